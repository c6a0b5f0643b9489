//! Bottom-right notification stack.
//!
//! Each toast arms its own auto-dismiss timer when it mounts. The timer lives
//! in the toast's reactive scope, so dismissing a toast by hand also cancels
//! its timer.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastQueue};
use crate::util::clock::now_ms;

/// Push a toast with the queue's default duration.
pub fn notify(toasts: RwSignal<ToastQueue>, message: impl Into<String>, kind: ToastKind) {
    let message = message.into();
    toasts.update(|q| {
        q.notify(message, kind, now_ms());
    });
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toaster toaster--bottom-right" aria-live="polite">
            <For
                each=move || toasts.with(|q| q.toasts().to_vec())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastQueue>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let timer = gloo_timers::callback::Timeout::new(toast.duration_ms, move || {
            toasts.maybe_update(|q| q.dismiss(id));
        });
        let _ = StoredValue::new_local(timer);
    }

    let class = format!("toast toast--{}", toast.kind.class_suffix());

    view! {
        <div class=class role="status">
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.maybe_update(|q| q.dismiss(id))>
                "✕"
            </button>
        </div>
    }
}
