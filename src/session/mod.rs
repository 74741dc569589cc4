//! Dashboard Session
//!
//! Owns everything that used to be page-global: the backend handle, the
//! selection set, the torrent awaiting removal and the armed delete target.
//! Created when the app mounts, dropped when it unmounts.
//!
//! Fetchers live here; user actions are in `actions`.

mod actions;
mod surface;
mod tests;

use std::cell::RefCell;

use crate::api::Backend;
use crate::error::ApiError;
use crate::format::escape_html;
use crate::models::FileView;
use crate::selection::Selection;
use crate::toast::{Notice, Severity};

pub use surface::{BrowserTab, ConfirmPrompt, Listing, SavedFile, Surface};

/// What the delete dialog will act on when confirmed
#[derive(Debug, Clone, PartialEq)]
enum DeleteTarget {
    File { path: String, name: String },
    Folder { path: String, name: String },
    Selected(Vec<String>),
}

pub struct Session<B, S> {
    backend: B,
    surface: S,
    selection: RefCell<Selection>,
    pending_removal: RefCell<Option<String>>,
    armed_delete: RefCell<Option<DeleteTarget>>,
}

/// Server rejections are shown verbatim, other failures get some context.
fn failure(context: &str, error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => message.clone(),
        other => format!("{}: {}", context, other),
    }
}

impl<B: Backend, S: Surface> Session<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self {
            backend,
            surface,
            selection: RefCell::new(Selection::default()),
            pending_removal: RefCell::new(None),
            armed_delete: RefCell::new(None),
        }
    }

    fn notify(&self, notice: Notice) {
        log::debug!("[session] toast {}: {}", notice.title, notice.message());
        self.surface.notify(notice);
    }

    fn publish_selection(&self) {
        let summary = self.selection.borrow().summary();
        self.surface.selection(summary);
    }

    /// Replace the file rows; the selection restarts empty.
    fn render_files(&self, listing: Listing<FileView>) {
        let paths = listing.items().iter().map(|f| f.path.clone()).collect();
        self.selection.borrow_mut().replace_rendered(paths);
        self.surface.files(listing);
        self.publish_selection();
    }

    // ========================
    // Fetchers
    // ========================

    /// Everything, concurrently. Used on mount.
    pub async fn refresh_all(&self) {
        futures::join!(
            self.refresh_torrents(),
            self.refresh_storage(),
            self.refresh_folders(),
            self.refresh_files()
        );
    }

    /// Fast cadence: torrents and storage
    pub async fn refresh_stats(&self) {
        futures::join!(self.refresh_torrents(), self.refresh_storage());
    }

    /// Slow cadence: folder and file listings
    pub async fn refresh_listings(&self) {
        futures::join!(self.refresh_folders(), self.refresh_files());
    }

    pub async fn refresh_torrents(&self) {
        let listing = match self.backend.torrents().await {
            Ok(torrents) => {
                log::debug!("[session] loaded {} torrents", torrents.len());
                Listing::from_items(torrents)
            }
            Err(ApiError::Rejected(message)) => Listing::failed("Error", message),
            Err(e) => {
                log::error!("[session] torrents: {}", e);
                Listing::failed("Connection Error", format!("Failed to fetch torrents: {}", e))
            }
        };
        self.surface.torrents(listing);
    }

    /// Failures keep the last snapshot on screen.
    pub async fn refresh_storage(&self) {
        match self.backend.storage().await {
            Ok(snapshot) => self.surface.storage(snapshot),
            Err(e) => log::error!("[session] failed to fetch storage info: {}", e),
        }
    }

    pub async fn refresh_folders(&self) {
        self.surface.folders(Listing::Loading);
        let listing = match self.backend.folders().await {
            Ok(folders) => Listing::from_items(folders),
            Err(e) => {
                log::error!("[session] folders: {}", e);
                Listing::failed("Error loading folders", e.to_string())
            }
        };
        self.surface.folders(listing);
    }

    pub async fn refresh_files(&self) {
        self.render_files(Listing::Loading);
        let listing = match self.backend.files().await {
            Ok(files) => Listing::from_items(files),
            Err(e) => {
                log::error!("[session] files: {}", e);
                Listing::failed("Error loading files", e.to_string())
            }
        };
        self.render_files(listing);
    }

    /// Switch to the file tab showing only the files under `folder`.
    pub async fn show_folder_files(&self, folder: &str) {
        match self.backend.files().await {
            Ok(files) => {
                let matched: Vec<FileView> =
                    files.into_iter().filter(|f| f.belongs_to(folder)).collect();
                let count = matched.len();
                self.surface.show_tab(BrowserTab::Files);
                self.render_files(Listing::from_items(matched));
                self.notify(Notice::success(format!(
                    "Showing {} files from {}",
                    count, folder
                )));
            }
            Err(e) => self.notify(Notice::error(format!(
                "Failed to load folder files: {}",
                e
            ))),
        }
    }

    pub async fn show_file_details(&self, path: &str) {
        match self.backend.file_info(path).await {
            Ok(file) => {
                let markup = format!(
                    "<strong>Name:</strong> {}<br>\
                     <strong>Size:</strong> {} MB ({} GB)<br>\
                     <strong>Type:</strong> {}<br>\
                     <strong>Modified:</strong> {}<br>\
                     <strong>Created:</strong> {}<br>\
                     <strong>Path:</strong> {}",
                    escape_html(&file.name),
                    file.size_mb,
                    file.size_gb,
                    escape_html(&file.mime_type),
                    escape_html(&file.modified),
                    escape_html(&file.created),
                    escape_html(&file.path),
                );
                self.notify(Notice::markup("File Details", markup, Severity::Info));
            }
            Err(e) => self.notify(Notice::error(format!(
                "Failed to get file details: {}",
                e
            ))),
        }
    }

    pub fn show_folder_details(&self, path: &str) {
        let markup = format!(
            "Folder: {}<br>Click to view all files in this folder",
            escape_html(path)
        );
        self.notify(Notice::markup("Folder Details", markup, Severity::Info));
    }
}
