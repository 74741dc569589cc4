//! File List Component
//!
//! Every downloaded file with a selection checkbox, plus the bulk actions
//! header driving the select-all tri-state.

use leptos::prelude::*;

use crate::components::{EmptyState, LoadingLine};
use crate::context::use_app_context;
use crate::file_kind::{icon_for, FileKind};
use crate::models::FileView;
use crate::selection::HeaderCheck;
use crate::session::Listing;
use crate::store::DashboardStateStoreFields;

#[component]
fn BulkHeader() -> impl IntoView {
    let ctx = use_app_context();
    let selection = ctx.store.selection();

    let header = move || selection.with(|s| s.header);
    let count = move || selection.with(|s| s.count);

    view! {
        <div class="bulk-actions-header">
            <div class="bulk-controls">
                <label class="checkbox-container">
                    <input
                        type="checkbox"
                        id="selectAllFiles"
                        prop:checked=move || header() == HeaderCheck::Checked
                        prop:indeterminate=move || header() == HeaderCheck::Indeterminate
                        on:change=move |ev| ctx.session().toggle_select_all(event_target_checked(&ev))
                    />
                    <span class="checkmark"></span>
                    " Select All"
                </label>
                <Show when=move || count() != 0>
                    <button class="btn-secondary" on:click=move |_| ctx.session().open_bulk_actions()>
                        <i class="fas fa-cogs"></i>
                        " Actions ("
                        <span id="selectedCount">{count}</span>
                        ")"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn FileItem(file: FileView) -> impl IntoView {
    let ctx = use_app_context();
    let selection = ctx.store.selection();

    let kind = FileKind::from_extension(&file.extension);
    let href = ctx.download_url(&file.path);

    let checked = {
        let path = file.path.clone();
        move || selection.with(|s| s.contains(&path))
    };
    let toggle = {
        let path = file.path.clone();
        move |ev| ctx.session().toggle_file(&path, event_target_checked(&ev))
    };
    let details = {
        let path = file.path.clone();
        move |_| {
            let path = path.clone();
            ctx.dispatch(move |session| async move { session.show_file_details(&path).await });
        }
    };
    let delete = {
        let path = file.path.clone();
        let name = file.name.clone();
        move |_| ctx.session().confirm_delete_file(&path, &name)
    };

    view! {
        <div class="file-item">
            <div class="file-selector">
                <label class="checkbox-container">
                    <input
                        type="checkbox"
                        class="file-checkbox"
                        value=file.path.clone()
                        prop:checked=checked
                        on:change=toggle
                    />
                    <span class="checkmark"></span>
                </label>
            </div>
            <div class=format!("file-icon {}", kind.css_class())>
                <i class=icon_for(&file.extension)></i>
            </div>
            <div class="file-info">
                <div class="file-name">{file.name.clone()}</div>
                <div class="file-details">
                    {format!("{} MB • {} • Modified: {}", file.size_mb, file.folder, file.modified)}
                </div>
            </div>
            <div class="file-actions">
                <button class="btn-info" title="View details" on:click=details>
                    <i class="fas fa-info-circle"></i>
                </button>
                <a href=href class="btn-download" title="Download file">
                    <i class="fas fa-download"></i>
                </a>
                <button class="btn-danger" title="Delete file" on:click=delete>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let store = use_app_context().store;

    move || match store.files().get() {
        Listing::Loading => view! { <LoadingLine label="Loading files..." /> }.into_any(),
        Listing::Empty => view! {
            <EmptyState icon="file" title="No files found" message="No downloaded files available yet" />
        }
            .into_any(),
        Listing::Failed { title, message } => {
            view! { <EmptyState icon="exclamation-triangle" title=title message=message /> }
                .into_any()
        }
        Listing::Ready(files) => view! {
            <BulkHeader />
            {files.into_iter().map(|file| view! { <FileItem file=file /> }).collect_view()}
        }
            .into_any(),
    }
}
