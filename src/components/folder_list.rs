//! Folder List Component
//!
//! Top-level download folders with details, ZIP download and delete actions.

use leptos::prelude::*;

use crate::components::{EmptyState, LoadingLine};
use crate::context::use_app_context;
use crate::models::FolderView;
use crate::session::Listing;
use crate::store::DashboardStateStoreFields;

#[component]
fn FolderItem(folder: FolderView) -> impl IntoView {
    let ctx = use_app_context();

    let path = folder.path.clone();
    let open = {
        let path = path.clone();
        move |_| {
            let path = path.clone();
            ctx.dispatch(move |session| async move { session.show_folder_files(&path).await });
        }
    };
    let details = {
        let path = path.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.session().show_folder_details(&path);
        }
    };
    let download = {
        let path = path.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let path = path.clone();
            ctx.dispatch(move |session| async move { session.download_folder(&path).await });
        }
    };
    let delete = {
        let name = folder.name.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.session().confirm_delete_folder(&path, &name);
        }
    };

    view! {
        <div class="folder-item" on:click=open>
            <div class="folder-icon">
                <i class="fas fa-folder"></i>
            </div>
            <div class="folder-info">
                <div class="folder-name">{folder.name.clone()}</div>
                <div class="folder-details">
                    {format!(
                        "{} files • {} MB • Modified: {}",
                        folder.file_count,
                        folder.size_mb,
                        folder.modified,
                    )}
                </div>
            </div>
            <div class="folder-actions">
                <button class="btn-info" title="View details" on:click=details>
                    <i class="fas fa-info-circle"></i>
                </button>
                <button class="btn-primary" title="Download as ZIP" on:click=download>
                    <i class="fas fa-file-archive"></i> " ZIP"
                </button>
                <button class="btn-danger" title="Delete folder" on:click=delete>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn FolderList() -> impl IntoView {
    let store = use_app_context().store;

    move || match store.folders().get() {
        Listing::Loading => view! { <LoadingLine label="Loading folders..." /> }.into_any(),
        Listing::Empty => view! {
            <EmptyState
                icon="folder-open"
                title="No folders found"
                message="No downloaded folders available yet"
            />
        }
            .into_any(),
        Listing::Failed { title, message } => {
            view! { <EmptyState icon="exclamation-triangle" title=title message=message /> }
                .into_any()
        }
        Listing::Ready(folders) => view! {
            <For
                each=move || folders.clone()
                key=|folder| folder.path.clone()
                children=|folder| view! { <FolderItem folder=folder /> }
            />
        }
            .into_any(),
    }
}
