use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::icon::{Icon, IconView};
use crate::toast::{Notifier, QueuedToast, Toast, ToastKind, TOAST_LIFETIME_MS};

/// [`Notifier`] that pushes onto the page's toast reducer.
#[derive(Clone, PartialEq)]
pub struct ToastNotifier {
    push: Callback<Toast>,
}

impl ToastNotifier {
    pub fn new(push: Callback<Toast>) -> Self {
        Self { push }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        self.push.emit(toast);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<QueuedToast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            { for props.toasts.iter().map(|queued| html! {
                <ToastItem
                    key={queued.id}
                    toast={queued.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        top: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 200;
                        width: min(420px, calc(100vw - 2rem));
                    }
                    @keyframes toastIn {
                        from { transform: translateY(-100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.9rem 1.1rem;
                        border-radius: 12px;
                        background: rgba(15, 23, 42, 0.97);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                        color: #f1f5f9;
                        cursor: pointer;
                        animation: toastIn 0.4s ease-out forwards;
                    }
                    .toast .icon { width: 20px; height: 20px; flex-shrink: 0; }
                    .toast-success { border: 1px solid rgba(34, 197, 94, 0.5); }
                    .toast-success .icon { color: #4ade80; }
                    .toast-error { border: 1px solid rgba(239, 68, 68, 0.5); }
                    .toast-error .icon { color: #f87171; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: QueuedToast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                // Dropping the handle cancels the timer if dismissed early
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let Toast { kind, message } = &props.toast.toast;
    let icon = match kind {
        ToastKind::Success => Icon::CheckCircle,
        ToastKind::Error => Icon::Close,
    };

    html! {
        <div class={classes!("toast", kind.class())} role="status" {onclick}>
            <IconView {icon} />
            <span>{message}</span>
        </div>
    }
}
