//! Torrent API Bindings
//!
//! Frontend bindings to the backend HTTP endpoints, organized by concern.
//! `Backend` is the seam the session talks to; `HttpBackend` is the real
//! implementation.

pub mod download;
mod http;
pub mod routes;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    Archive, FileDetail, FileView, FolderView, StorageSnapshot, TorrentUpload, TorrentView,
};

pub use http::HttpBackend;

/// One method per endpoint, one HTTP round trip per call.
///
/// Mutating calls return the server's `message` (empty when absent).
#[async_trait(?Send)]
pub trait Backend {
    // ========================
    // Torrents
    // ========================

    /// All torrents, in the order the server listed them
    async fn torrents(&self) -> ApiResult<Vec<TorrentView>>;

    async fn add_magnet(&self, magnet_link: &str) -> ApiResult<String>;

    async fn add_torrent_file(&self, upload: TorrentUpload) -> ApiResult<String>;

    async fn pause(&self, id: &str) -> ApiResult<String>;

    async fn resume(&self, id: &str) -> ApiResult<String>;

    async fn remove(&self, id: &str, delete_files: bool) -> ApiResult<String>;

    // ========================
    // Storage
    // ========================

    async fn storage(&self) -> ApiResult<StorageSnapshot>;

    // ========================
    // Files & Folders
    // ========================

    async fn folders(&self) -> ApiResult<Vec<FolderView>>;

    async fn files(&self) -> ApiResult<Vec<FileView>>;

    async fn file_info(&self, path: &str) -> ApiResult<FileDetail>;

    async fn delete_file(&self, path: &str) -> ApiResult<String>;

    async fn delete_folder(&self, path: &str) -> ApiResult<String>;

    async fn download_folder(&self, path: &str) -> ApiResult<Archive>;

    async fn download_selected(&self, paths: &[String]) -> ApiResult<Archive>;
}
