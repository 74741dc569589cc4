//! Storage Panel Component
//!
//! Disk usage figures and the two-segment usage bar.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardStateStoreFields;

#[component]
fn StorageStat(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="storage-stat">
            <div class="stat-label">{label}</div>
            <div class="stat-value">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn StoragePanel() -> impl IntoView {
    let store = use_app_context().store;
    let storage = store.storage();

    // GB values are shown exactly as the server rounded them
    let gb = move |pick: fn(&crate::models::StorageSnapshot) -> f64| {
        Signal::derive(move || {
            storage
                .get()
                .map(|s| format!("{} GB", pick(&s)))
                .unwrap_or_else(|| "-- GB".to_string())
        })
    };

    let usage = move || storage.get().map(|s| s.usage_percentage).unwrap_or(0.0);
    let fill_style = move || match storage.get() {
        Some(s) => format!(
            "width: {}%; background: {}",
            s.usage_percentage,
            s.usage_tier().background()
        ),
        None => "width: 0%".to_string(),
    };
    let downloaded_style = move || {
        let pct = storage.get().map(|s| s.downloaded_percentage()).unwrap_or(0.0);
        format!("width: {}%", pct)
    };

    view! {
        <section class="card storage-section">
            <h2><i class="fas fa-hdd"></i> " Storage"</h2>
            <div class="storage-stats">
                <StorageStat label="Total" value=gb(|s| s.total_storage_gb) />
                <StorageStat label="Used" value=gb(|s| s.used_storage_gb) />
                <StorageStat label="Free" value=gb(|s| s.free_storage_gb) />
                <StorageStat label="Downloaded" value=gb(|s| s.downloaded_content_gb) />
            </div>
            <div class="storage-bar-container">
                <div class="storage-bar">
                    <div class="storage-bar-fill" style=fill_style></div>
                    <div class="storage-bar-downloaded" style=downloaded_style></div>
                </div>
                <div class="storage-percentage">{move || format!("{}%", usage())}</div>
            </div>
        </section>
    }
}
