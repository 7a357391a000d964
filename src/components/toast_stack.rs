//! Toast rendering and per-toast expiry timers.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastState};

/// Renders the toast queue in insertion order.
///
/// Keyed by toast id so an unrelated push never remounts (and therefore
/// never restarts the timer of) an already-visible toast.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts-wrapper">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

/// One toast; schedules its own removal after `duration_ms`.
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    // Cancellable deferred removal: clearing the handle on teardown keeps an
    // early manual removal from leaving a timer that later fires against a
    // reused identifier. Removal itself is idempotent either way.
    if let Ok(handle) = set_timeout_with_handle(
        move || toasts.update(|state| state.remove(id)),
        Duration::from_millis(u64::from(toast.duration_ms)),
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <div class=format!("toast toast-{}", toast.severity.css_class()) role="status">
            {toast.message}
        </div>
    }
}
