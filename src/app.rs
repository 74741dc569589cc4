//! Torrent Dashboard App
//!
//! Builds the session, runs the initial load and owns the polling timers.

use leptos::prelude::*;

use crate::api::HttpBackend;
use crate::components::{
    AddTorrentPanel, BulkActionsModal, DeleteModal, FileBrowser, RemoveTorrentModal,
    StoragePanel, ToastHost, TorrentList,
};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::poller::{Cadence, Poller};
use crate::session::Session;
use crate::store::{DashboardState, DashboardStore, DashboardSurface};

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = DashboardStore::new(DashboardState::default());
    let surface = DashboardSurface::new(store, &config);
    let session = Session::new(HttpBackend::new(config.api_base.clone()), surface);

    let ctx = AppContext::new(surface, session, config.api_base.clone());
    provide_context(ctx);

    // Initial load of all four resources
    Effect::new(move |_| {
        ctx.dispatch(|session| async move { session.refresh_all().await });
    });

    let poller = StoredValue::new_local(Some(Poller::start(
        Cadence::from_config(&config),
        move || ctx.dispatch(|session| async move { session.refresh_stats().await }),
        move || ctx.dispatch(|session| async move { session.refresh_listings().await }),
    )));
    on_cleanup(move || {
        poller.try_update_value(|poller| {
            if let Some(mut poller) = poller.take() {
                poller.stop();
            }
        });
    });

    view! {
        <div class="container">
            <header class="header">
                <h1><i class="fas fa-download"></i> " Torrent Downloader"</h1>
            </header>

            <div class="dashboard">
                <AddTorrentPanel />
                <StoragePanel />
            </div>

            <TorrentList />
            <FileBrowser />

            <RemoveTorrentModal />
            <DeleteModal />
            <BulkActionsModal />
            <ToastHost />
        </div>
    }
}
