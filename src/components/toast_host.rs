//! Toast Host Component
//!
//! Renders the toast queue. Timers live in `DashboardSurface`; this only
//! draws and forwards the close button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardStateStoreFields;
use crate::toast::{Toast, ToastBody};

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let surface = use_app_context().surface;
    let id = toast.id;

    let class = format!(
        "toast {}{}",
        toast.notice.severity.css_class(),
        if toast.leaving { " leaving" } else { "" }
    );
    // markup bodies are assembled from escaped values only
    let message = match toast.notice.body {
        ToastBody::Text(text) => view! { <div class="toast-message">{text}</div> }.into_any(),
        ToastBody::Markup(markup) => view! { <div class="toast-message" inner_html=markup></div> }.into_any(),
    };

    view! {
        <div class=class>
            <div class="toast-header">
                <span class="toast-title">{toast.notice.title}</span>
                <button class="toast-close" on:click=move |_| surface.dismiss(id)>"×"</button>
            </div>
            {message}
        </div>
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_app_context().store.toasts();

    view! {
        <div id="toast-container" class="toast-container">
            <For
                each=move || toasts.with(|queue| queue.items().to_vec())
                key=|toast| (toast.id, toast.leaving)
                children=|toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}
