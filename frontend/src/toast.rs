//! Short-lived user notifications.
//!
//! [`Notifier`] is what the rest of the app talks to. The page keeps a
//! [`ToastQueue`] in a reducer and renders it with the `Toaster` component.

use std::collections::VecDeque;
use std::rc::Rc;

use yew::Reducible;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Most toasts shown at once; pushing past this evicts the oldest.
pub const TOAST_CAPACITY: usize = 3;

/// How long a toast stays up before dismissing itself.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, toast: Toast);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedToast {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: VecDeque<QueuedToast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl ToastQueue {
    /// Queues a toast and returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(QueuedToast { id, toast });
        while self.toasts.len() > TOAST_CAPACITY {
            self.toasts.pop_front();
        }
        id
    }

    /// Returns `false` if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|queued| queued.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedToast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                next.push(toast);
            }
            ToastAction::Dismiss(id) => {
                // Timer firing after a manual dismiss
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}
