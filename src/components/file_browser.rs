//! File Browser Component
//!
//! Folder and file tabs sharing one list/grid layout toggle.

use leptos::prelude::*;

use crate::components::{FileList, FolderList};
use crate::context::use_app_context;
use crate::session::BrowserTab;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn FileBrowser() -> impl IntoView {
    let ctx = use_app_context();
    let tab = ctx.store.tab();
    let grid_view = ctx.store.grid_view();

    let container_class = move |which: BrowserTab| {
        move || {
            let mut class = String::from("files-container");
            if tab.get() == which {
                class.push_str(" active");
            }
            if grid_view.get() {
                class.push_str(" grid-view");
            }
            class
        }
    };
    let tab_class = move |which: BrowserTab| {
        move || if tab.get() == which { "tab-btn active" } else { "tab-btn" }
    };

    let refresh = move |_| {
        ctx.dispatch(|session| async move { session.refresh_listings().await });
    };

    view! {
        <section class="card file-browser-section">
            <div class="section-header">
                <h2><i class="fas fa-folder-open"></i> " Downloaded Files"</h2>
                <div class="file-browser-controls">
                    <button class="btn-secondary" on:click=move |_| {
                        let mut grid = grid_view.write();
                        *grid = !*grid;
                    }>
                        {move || if grid_view.get() {
                            view! { <i class="fas fa-th-list"></i> " List View" }.into_any()
                        } else {
                            view! { <i class="fas fa-th"></i> " Grid View" }.into_any()
                        }}
                    </button>
                    <button class="btn-secondary" on:click=refresh>
                        <i class="fas fa-sync-alt"></i> " Refresh"
                    </button>
                </div>
            </div>

            <div class="file-tabs">
                <button
                    class=tab_class(BrowserTab::Folders)
                    on:click=move |_| *tab.write() = BrowserTab::Folders
                >
                    <i class="fas fa-folder"></i> " Folders"
                </button>
                <button
                    class=tab_class(BrowserTab::Files)
                    on:click=move |_| *tab.write() = BrowserTab::Files
                >
                    <i class="fas fa-file"></i> " All Files"
                </button>
            </div>

            <div id="foldersContainer" class=container_class(BrowserTab::Folders)>
                <FolderList />
            </div>
            <div id="filesContainer" class=container_class(BrowserTab::Files)>
                <FileList />
            </div>
        </section>
    }
}
