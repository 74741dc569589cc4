//! Torrent List Component
//!
//! One card per torrent, in the order the server returned them.

use leptos::prelude::*;

use crate::components::{EmptyState, LoadingLine};
use crate::context::use_app_context;
use crate::format::{clamp_progress, format_bytes, format_speed, to_fixed};
use crate::models::{DownloadableFile, TorrentStatus, TorrentView};
use crate::session::Listing;
use crate::store::DashboardStateStoreFields;

#[component]
fn InfoItem(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="info-item">
            <div class="info-label">{label}</div>
            <div class="info-value">{value}</div>
        </div>
    }
}

#[component]
fn DownloadFiles(files: Vec<DownloadableFile>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="download-files">
            <h4><i class="fas fa-download"></i> " Available Downloads:"</h4>
            <div class="download-files-list">
                {files
                    .into_iter()
                    .map(|file| {
                        let href = ctx.download_url(&file.path);
                        let title = format!("Download {}", file.name);
                        view! {
                            <div class="download-file-item">
                                <div class="download-file-info">
                                    <span class="download-file-name">{file.name}</span>
                                    <span class="download-file-size">{format_bytes(file.size)}</span>
                                </div>
                                <a href=href class="btn-download-small" title=title>
                                    <i class="fas fa-download"></i>
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TorrentCard(torrent: TorrentView) -> impl IntoView {
    let ctx = use_app_context();

    let progress = clamp_progress(torrent.progress);
    let id = torrent.id.clone();
    let paused = torrent.status == TorrentStatus::Paused;
    let downloads = torrent.has_downloads().then(|| torrent.download_files.clone());

    let toggle = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            ctx.dispatch(move |session| async move {
                if paused {
                    session.resume(&id).await;
                } else {
                    session.pause(&id).await;
                }
            });
        }
    };
    let remove = move |_| ctx.session().request_removal(&id);

    view! {
        <div class="torrent-item">
            <div class="torrent-header">
                <h3 class="torrent-name">{torrent.name.clone()}</h3>
                <span class=format!("torrent-status {}", torrent.status.css_class())>
                    {torrent.status.as_str().to_string()}
                </span>
            </div>

            <div class="progress-container">
                <div class="progress-bar">
                    <div class="progress-fill" style=format!("width: {}%", progress)></div>
                </div>
                <div class="progress-text">{format!("{}% complete", to_fixed(progress, 1))}</div>
            </div>

            <div class="torrent-info">
                <InfoItem label="Size" value=format_bytes(torrent.size) />
                <InfoItem label="Download Speed" value=format_speed(torrent.download_rate) />
                <InfoItem label="Upload Speed" value=format_speed(torrent.upload_rate) />
                <InfoItem label="Peers" value=torrent.peers.to_string() />
                <InfoItem label="Seeds" value=torrent.seeds.to_string() />
                <InfoItem label="Added" value=torrent.added_time.clone() />
            </div>

            {downloads.map(|files| view! { <DownloadFiles files=files /> })}

            <div class="torrent-actions">
                {if paused {
                    view! {
                        <button class="action-btn btn-success" on:click=toggle>
                            <i class="fas fa-play"></i> " Resume"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button class="action-btn btn-warning" on:click=toggle>
                            <i class="fas fa-pause"></i> " Pause"
                        </button>
                    }
                        .into_any()
                }}
                <button class="action-btn btn-danger" on:click=remove>
                    <i class="fas fa-trash"></i> " Remove"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn TorrentList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let refresh = move |_| ctx.dispatch(|session| async move { session.refresh_torrents().await });

    view! {
        <section class="card torrents-section">
            <div class="section-header">
                <h2><i class="fas fa-list"></i> " Torrents"</h2>
                <button class="btn-secondary" on:click=refresh>
                    <i class="fas fa-sync-alt"></i> " Refresh"
                </button>
            </div>
            <div id="torrentsContainer">
                {move || match store.torrents().get() {
                    Listing::Loading => view! { <LoadingLine label="Loading torrents..." /> }.into_any(),
                    Listing::Empty => view! {
                        <EmptyState
                            icon="cloud-download-alt"
                            title="No Active Torrents"
                            message="Add a magnet link or upload a .torrent file to get started"
                        />
                    }
                        .into_any(),
                    Listing::Failed { title, message } => {
                        view! { <EmptyState icon="exclamation-triangle" title=title message=message /> }
                            .into_any()
                    }
                    Listing::Ready(torrents) => torrents
                        .into_iter()
                        .map(|torrent| view! { <TorrentCard torrent=torrent /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}
