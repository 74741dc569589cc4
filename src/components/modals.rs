//! Dialog Components
//!
//! Remove-torrent, delete confirmation and bulk actions dialogs. Each one is
//! open exactly while its store field is `Some`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn RemoveTorrentModal() -> impl IntoView {
    let ctx = use_app_context();
    let removal = ctx.store.removal();

    let remove = move |delete_files: bool| {
        ctx.dispatch(move |session| async move { session.confirm_removal(delete_files).await });
    };

    view! {
        <Show when=move || removal.with(Option::is_some)>
            // a click on the backdrop itself cancels
            <div
                id="confirmModal"
                class="modal"
                on:click=move |ev| {
                    if ev.target() == ev.current_target() {
                        ctx.session().cancel_removal();
                    }
                }
            >
                <div class="modal-content">
                    <h3>"Remove Torrent"</h3>
                    <p>"Do you want to remove this torrent only, or also delete its downloaded files?"</p>
                    <div class="modal-actions">
                        <button class="btn-warning" on:click=move |_| remove(false)>
                            "Remove Torrent Only"
                        </button>
                        <button class="btn-danger" on:click=move |_| remove(true)>
                            "Remove & Delete Files"
                        </button>
                        <button class="btn-secondary" on:click=move |_| ctx.session().cancel_removal()>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_app_context();
    let prompt = ctx.store.delete_prompt();

    let confirm = move |_| {
        ctx.dispatch(|session| async move { session.confirm_delete().await });
    };

    move || {
        prompt.get().map(|prompt| {
            view! {
                <div id="deleteModal" class="modal">
                    <div class="modal-content">
                        <h3 id="deleteModalTitle">{prompt.title}</h3>
                        <p id="deleteModalMessage">{prompt.message}</p>
                        <div class="modal-actions">
                            <button class="btn-danger" on:click=confirm>
                                <i class="fas fa-trash"></i> " Delete"
                            </button>
                            <button class="btn-secondary" on:click=move |_| ctx.session().cancel_delete()>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn BulkActionsModal() -> impl IntoView {
    let ctx = use_app_context();
    let bulk = ctx.store.bulk();

    let download = move |_| {
        ctx.dispatch(|session| async move { session.download_selected().await });
    };

    move || {
        bulk.get().map(|count| {
            view! {
                <div id="bulkModal" class="modal">
                    <div class="modal-content">
                        <h3>"Bulk Actions"</h3>
                        <p id="bulkModalMessage">
                            {format!("{} files selected. Choose an action:", count)}
                        </p>
                        <div class="modal-actions">
                            <button class="btn-primary" on:click=download>
                                <i class="fas fa-file-archive"></i> " Download as ZIP"
                            </button>
                            <button class="btn-danger" on:click=move |_| ctx.session().confirm_delete_selected()>
                                <i class="fas fa-trash"></i> " Delete Selected"
                            </button>
                            <button class="btn-secondary" on:click=move |_| ctx.session().close_bulk_actions()>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
