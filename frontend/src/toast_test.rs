use super::*;

fn messages(queue: &ToastQueue) -> Vec<&str> {
    queue.iter().map(|queued| queued.toast.message.as_str()).collect()
}

#[test]
fn new_queue_is_empty() {
    let queue = ToastQueue::default();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn push_assigns_increasing_ids() {
    let mut queue = ToastQueue::default();
    let first = queue.push(Toast::success("one"));
    let second = queue.push(Toast::error("two"));
    assert!(second > first);
    assert_eq!(messages(&queue), vec!["one", "two"]);
}

#[test]
fn queue_never_exceeds_capacity_and_evicts_oldest() {
    let mut queue = ToastQueue::default();
    for n in 0..5 {
        queue.push(Toast::success(format!("toast {n}")));
        assert!(queue.len() <= TOAST_CAPACITY);
    }
    assert_eq!(messages(&queue), vec!["toast 2", "toast 3", "toast 4"]);
}

#[test]
fn ids_are_not_reused_after_eviction() {
    let mut queue = ToastQueue::default();
    let ids: Vec<u64> = (0..5).map(|_| queue.push(Toast::success("x"))).collect();
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids, deduped);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut queue = ToastQueue::default();
    queue.push(Toast::success("keep"));
    let id = queue.push(Toast::error("drop"));
    queue.push(Toast::success("also keep"));

    assert!(queue.dismiss(id));
    assert_eq!(messages(&queue), vec!["keep", "also keep"]);
}

#[test]
fn dismissing_twice_reports_missing() {
    let mut queue = ToastQueue::default();
    let id = queue.push(Toast::success("once"));
    assert!(queue.dismiss(id));
    assert!(!queue.dismiss(id));
}

#[test]
fn reduce_stale_dismiss_keeps_same_rc() {
    let queue = Rc::new(ToastQueue::default());
    let next = queue.clone().reduce(ToastAction::Dismiss(42));
    assert!(Rc::ptr_eq(&queue, &next));
}

#[test]
fn reduce_push_adds_toast() {
    let queue = Rc::new(ToastQueue::default());
    let next = queue.reduce(ToastAction::Push(Toast::success("hello")));
    assert_eq!(messages(&next), vec!["hello"]);
    assert_eq!(next.iter().next().map(|q| q.toast.kind), Some(ToastKind::Success));
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
}
