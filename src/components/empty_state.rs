//! Empty State Component
//!
//! Placeholder shown in place of a list that is loading, empty or failed.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    /// Font Awesome icon name without the `fa-` prefix
    #[prop(into)]
    icon: String,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <i class=format!("fas fa-{}", icon)></i>
            <h3>{title}</h3>
            <p>{message}</p>
        </div>
    }
}

/// Spinner line used while a listing is being fetched
#[component]
pub fn LoadingLine(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="files-loading">
            <i class="fas fa-spinner fa-spin"></i>
            " "
            {label}
        </div>
    }
}
