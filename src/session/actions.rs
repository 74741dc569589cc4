//! User Actions
//!
//! Each dispatcher validates its input, issues one mutating request, reports
//! the outcome as a toast and, on success, refreshes what changed.

use std::future::Future;

use futures::future::join_all;

use super::{failure, ConfirmPrompt, DeleteTarget, SavedFile, Session, Surface};
use crate::api::download::attachment_name;
use crate::api::Backend;
use crate::error::ApiError;
use crate::models::{Archive, TorrentUpload};
use crate::toast::Notice;

const MAGNET_PREFIX: &str = "magnet:";
const TORRENT_SUFFIX: &str = ".torrent";

impl<B: Backend, S: Surface> Session<B, S> {
    // ========================
    // Adding torrents
    // ========================

    /// Returns true when the torrent was accepted, so the form can reset.
    pub async fn add_magnet(&self, input: &str) -> bool {
        let link = input.trim();
        if link.is_empty() {
            self.notify(Notice::error("Please enter a magnet link"));
            return false;
        }
        if !link.starts_with(MAGNET_PREFIX) {
            self.notify(Notice::error("Invalid magnet link format"));
            return false;
        }

        match self.backend.add_magnet(link).await {
            Ok(_) => {
                self.notify(Notice::success("Torrent added successfully!"));
                self.refresh_stats().await;
                true
            }
            Err(e) => {
                self.notify(Notice::error(failure("Failed to add torrent", &e)));
                false
            }
        }
    }

    /// `name` is the picked file's name, `None` when the picker was
    /// dismissed. `read` loads its bytes and only runs once the name passed
    /// validation; it yields `None` when the file cannot be read.
    pub async fn add_torrent_file<R, Fut>(&self, name: Option<String>, read: R) -> bool
    where
        R: FnOnce() -> Fut,
        Fut: Future<Output = Option<Vec<u8>>>,
    {
        let Some(name) = name else {
            return false;
        };
        if !name.ends_with(TORRENT_SUFFIX) {
            self.notify(Notice::error("Please select a valid .torrent file"));
            return false;
        }
        let Some(bytes) = read().await else {
            return false;
        };
        let upload = TorrentUpload { name, bytes };

        log::info!("[session] uploading {} ({} bytes)", upload.name, upload.bytes.len());
        match self.backend.add_torrent_file(upload).await {
            Ok(_) => {
                self.notify(Notice::success("Torrent file added successfully!"));
                self.refresh_stats().await;
                true
            }
            Err(e) => {
                self.notify(Notice::error(failure("Failed to add torrent file", &e)));
                false
            }
        }
    }

    // ========================
    // Torrent controls
    // ========================

    pub async fn pause(&self, id: &str) {
        match self.backend.pause(id).await {
            Ok(_) => {
                self.notify(Notice::success("Torrent paused"));
                self.refresh_stats().await;
            }
            Err(e) => self.notify(Notice::error(failure("Failed to pause torrent", &e))),
        }
    }

    pub async fn resume(&self, id: &str) {
        match self.backend.resume(id).await {
            Ok(_) => {
                self.notify(Notice::success("Torrent resumed"));
                self.refresh_stats().await;
            }
            Err(e) => self.notify(Notice::error(failure("Failed to resume torrent", &e))),
        }
    }

    /// First step of removal: remember the torrent and ask how to remove it.
    pub fn request_removal(&self, id: &str) {
        *self.pending_removal.borrow_mut() = Some(id.to_string());
        self.surface.removal_prompt(Some(id.to_string()));
    }

    pub fn cancel_removal(&self) {
        self.pending_removal.borrow_mut().take();
        self.surface.removal_prompt(None);
    }

    /// Second step: one DELETE with the chosen `delete_files` flag. The
    /// pending id is consumed whatever the outcome.
    pub async fn confirm_removal(&self, delete_files: bool) {
        let Some(id) = self.pending_removal.borrow_mut().take() else {
            return;
        };

        let result = self.backend.remove(&id, delete_files).await;
        self.surface.removal_prompt(None);
        match result {
            Ok(message) => {
                let message = if message.is_empty() {
                    "Torrent removed".to_string()
                } else {
                    message
                };
                self.notify(Notice::success(message));
                self.refresh_stats().await;
            }
            Err(e) => self.notify(Notice::error(failure("Failed to remove torrent", &e))),
        }
    }

    // ========================
    // Deleting files and folders
    // ========================

    /// Arm the delete dialog. Only the latest target is ever acted on.
    fn arm_delete(&self, target: DeleteTarget, prompt: ConfirmPrompt) {
        *self.armed_delete.borrow_mut() = Some(target);
        self.surface.delete_prompt(Some(prompt));
    }

    /// Put a target back after a failed attempt, unless another one was
    /// armed in the meantime.
    fn rearm_delete(&self, target: DeleteTarget) {
        let mut armed = self.armed_delete.borrow_mut();
        if armed.is_none() {
            *armed = Some(target);
        }
    }

    pub fn confirm_delete_file(&self, path: &str, name: &str) {
        self.arm_delete(
            DeleteTarget::File {
                path: path.to_string(),
                name: name.to_string(),
            },
            ConfirmPrompt {
                title: "Delete File".to_string(),
                message: format!("Are you sure you want to delete \"{}\"?", name),
            },
        );
    }

    pub fn confirm_delete_folder(&self, path: &str, name: &str) {
        self.arm_delete(
            DeleteTarget::Folder {
                path: path.to_string(),
                name: name.to_string(),
            },
            ConfirmPrompt {
                title: "Delete Folder".to_string(),
                message: format!(
                    "Are you sure you want to delete the folder \"{}\" and all its contents?",
                    name
                ),
            },
        );
    }

    pub fn confirm_delete_selected(&self) {
        let paths = self.selection.borrow().paths();
        if paths.is_empty() {
            return;
        }
        let count = paths.len();
        self.surface.bulk_prompt(None);
        self.arm_delete(
            DeleteTarget::Selected(paths),
            ConfirmPrompt {
                title: "Delete Multiple Files".to_string(),
                message: format!("Are you sure you want to delete {} selected files?", count),
            },
        );
    }

    pub fn cancel_delete(&self) {
        self.armed_delete.borrow_mut().take();
        self.surface.delete_prompt(None);
    }

    /// Run whatever the delete dialog is currently armed with.
    pub async fn confirm_delete(&self) {
        let Some(target) = self.armed_delete.borrow_mut().take() else {
            return;
        };

        let done = match &target {
            DeleteTarget::File { path, name } => self.delete_file(path, name).await,
            DeleteTarget::Folder { path, name } => self.delete_folder(path, name).await,
            DeleteTarget::Selected(paths) => {
                self.delete_many(paths).await;
                true
            }
        };
        if !done {
            self.rearm_delete(target);
        }
    }

    async fn delete_file(&self, path: &str, name: &str) -> bool {
        log::info!("[session] deleting file {}", name);
        match self.backend.delete_file(path).await {
            Ok(message) => {
                self.notify(Notice::success(message));
                self.surface.delete_prompt(None);
                futures::join!(self.refresh_files(), self.refresh_storage());
                true
            }
            Err(e) => {
                self.notify(Notice::error(format!("Failed to delete file: {}", e)));
                false
            }
        }
    }

    async fn delete_folder(&self, path: &str, name: &str) -> bool {
        log::info!("[session] deleting folder {}", name);
        match self.backend.delete_folder(path).await {
            Ok(message) => {
                self.notify(Notice::success(message));
                self.surface.delete_prompt(None);
                futures::join!(self.refresh_folders(), self.refresh_storage());
                true
            }
            Err(e) => {
                self.notify(Notice::error(format!("Failed to delete folder: {}", e)));
                false
            }
        }
    }

    /// One DELETE per path, all in flight together. Partial failure is
    /// reported, not treated as an error.
    async fn delete_many(&self, paths: &[String]) {
        let results = join_all(paths.iter().map(|p| self.backend.delete_file(p))).await;

        let mut succeeded = 0;
        for (path, result) in paths.iter().zip(&results) {
            match result {
                Ok(_) => succeeded += 1,
                Err(e) => log::warn!("[session] failed to delete {}: {}", path, e),
            }
        }
        let failed = results.len() - succeeded;

        if succeeded > 0 {
            self.notify(Notice::success(format!(
                "{} files deleted successfully",
                succeeded
            )));
        }
        if failed > 0 {
            self.notify(Notice::warning(format!("{} files failed to delete", failed)));
        }

        self.surface.delete_prompt(None);
        self.surface.bulk_prompt(None);
        self.selection.borrow_mut().clear();
        self.publish_selection();
        futures::join!(self.refresh_files(), self.refresh_storage());
    }

    // ========================
    // Bulk actions & selection
    // ========================

    pub fn open_bulk_actions(&self) {
        let count = self.selection.borrow().len();
        if count > 0 {
            self.surface.bulk_prompt(Some(count));
        }
    }

    pub fn close_bulk_actions(&self) {
        self.surface.bulk_prompt(None);
    }

    pub fn toggle_file(&self, path: &str, checked: bool) {
        self.selection.borrow_mut().set_checked(path, checked);
        self.publish_selection();
    }

    pub fn toggle_select_all(&self, checked: bool) {
        self.selection.borrow_mut().set_all(checked);
        self.publish_selection();
    }

    // ========================
    // ZIP downloads
    // ========================

    /// Hand a non-empty archive to the browser. Returns the saved name.
    fn save_archive(&self, archive: Archive, fallback: &str) -> Option<String> {
        if archive.bytes.is_empty() {
            return None;
        }
        let filename = attachment_name(archive.content_disposition.as_deref(), fallback);
        self.surface.save_file(SavedFile {
            filename: filename.clone(),
            bytes: archive.bytes,
        });
        Some(filename)
    }

    pub async fn download_selected(&self) {
        let paths = self.selection.borrow().paths();
        if paths.is_empty() {
            self.notify(Notice::warning("No files selected for download"));
            return;
        }
        let count = paths.len();
        self.notify(Notice::info(
            "Info",
            format!("Creating ZIP file with {} selected files...", count),
        ));

        match self.backend.download_selected(&paths).await {
            Ok(archive) => match self.save_archive(archive, "selected_files.zip") {
                Some(filename) => {
                    self.surface.bulk_prompt(None);
                    self.notify(Notice::success(format!(
                        "Downloaded {} files as {}",
                        count, filename
                    )));
                    self.selection.borrow_mut().clear();
                    self.publish_selection();
                }
                None => self.notify(Notice::error("ZIP file is empty. No valid files found.")),
            },
            Err(ApiError::Rejected(message)) => self.notify(Notice::error(message)),
            Err(ApiError::Status(code)) => {
                log::warn!("[session] selected download failed with HTTP {}", code);
                self.notify(Notice::error("Failed to download files"));
            }
            Err(e) => {
                log::error!("[session] download selected files: {}", e);
                self.notify(Notice::error(format!(
                    "Network error while downloading files: {}",
                    e
                )));
            }
        }
    }

    pub async fn download_folder(&self, path: &str) {
        self.notify(Notice::info("Info", "Creating ZIP file..."));

        match self.backend.download_folder(path).await {
            Ok(archive) => match self.save_archive(archive, &format!("{}.zip", path)) {
                Some(filename) => {
                    self.notify(Notice::success(format!("Folder downloaded as {}", filename)))
                }
                None => self.notify(Notice::error(
                    "ZIP file is empty. No files found in folder.",
                )),
            },
            Err(ApiError::Rejected(message)) => self.notify(Notice::error(message)),
            Err(ApiError::Status(code)) => {
                log::warn!("[session] folder download failed with HTTP {}", code);
                self.notify(Notice::error("Failed to download folder"));
            }
            Err(e) => {
                log::error!("[session] download folder {}: {}", path, e);
                self.notify(Notice::error(format!(
                    "Network error while downloading folder: {}",
                    e
                )));
            }
        }
    }
}
