//! Toast notifications for sidebar actions.

use leptos::prelude::*;
use std::collections::VecDeque;

const MAX_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: RwSignal<VecDeque<Toast>>,
    // StoredValue so showing a toast from inside an Effect does not subscribe to it
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>, toast_type: ToastType) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let dismiss_secs = match &toast_type {
            ToastType::Error => 6,
            ToastType::Info => 3,
        };

        let toast = Toast {
            id,
            message: message.into(),
            toast_type,
        };

        self.toasts.try_update_untracked(|toasts| {
            toasts.push_back(toast);
            while toasts.len() > MAX_TOASTS {
                toasts.pop_front();
            }
        });
        self.toasts.notify();

        let ctx = *self;
        set_timeout(move || ctx.dismiss(id), std::time::Duration::from_secs(dismiss_secs));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastType::Info);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastType::Error);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| {
            toasts.retain(|t| t.id != id);
        });
    }
}

/// Hook to get the toast context.
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext not found. Wrap your app in ToastProvider.")
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext::new();
    provide_context(ctx);

    view! {
        {children()}
        <ToastContainer ctx=ctx />
    }
}

/// Bottom-right, clear of the sidebar.
#[component]
fn ToastContainer(ctx: ToastContext) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            {move || {
                ctx.toasts.get().into_iter().map(|toast| {
                    let id = toast.id;
                    view! { <ToastItem toast=toast on_dismiss=move || ctx.dismiss(id) /> }
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: impl Fn() + 'static) -> impl IntoView {
    let class = match toast.toast_type {
        ToastType::Info => "bg-sky-50 border-sky-300 text-sky-800",
        ToastType::Error => "bg-red-50 border-red-300 text-red-800",
    };

    view! {
        <div class=format!("pointer-events-auto flex items-center gap-2 px-3 py-2 rounded border shadow {}", class)>
            <span class="text-sm flex-1">{toast.message}</span>
            <button class="text-xs opacity-60 hover:opacity-100" on:click=move |_| on_dismiss()>
                "×"
            </button>
        </div>
    }
}
