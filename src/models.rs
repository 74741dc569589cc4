//! Frontend Models
//!
//! Client-side projections of the JSON the torrent API sends. Nothing here is
//! persisted; every poll replaces them.

use serde::{Deserialize, Serialize};

/// Common response wrapper: `{ success, message?, <payload> }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Torrent lifecycle state reported by the engine.
///
/// Unknown states are kept verbatim so they still render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TorrentStatus {
    Downloading,
    Seeding,
    Paused,
    Completed,
    Error,
    Other(String),
}

impl TorrentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TorrentStatus::Downloading => "downloading",
            TorrentStatus::Seeding => "seeding",
            TorrentStatus::Paused => "paused",
            TorrentStatus::Completed => "completed",
            TorrentStatus::Error => "error",
            TorrentStatus::Other(s) => s,
        }
    }

    pub fn css_class(&self) -> String {
        format!("status-{}", self.as_str())
    }

    /// Finished torrents expose their files for download
    pub fn is_finished(&self) -> bool {
        matches!(self, TorrentStatus::Completed | TorrentStatus::Seeding)
    }
}

impl From<String> for TorrentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "downloading" => TorrentStatus::Downloading,
            "seeding" => TorrentStatus::Seeding,
            "paused" => TorrentStatus::Paused,
            "completed" => TorrentStatus::Completed,
            "error" => TorrentStatus::Error,
            _ => TorrentStatus::Other(s),
        }
    }
}

impl From<TorrentStatus> for String {
    fn from(status: TorrentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A file of a finished torrent that the server can stream back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadableFile {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: f64,
}

/// Torrent data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentView {
    pub id: String,
    pub name: String,
    pub status: TorrentStatus,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub download_rate: f64,
    #[serde(default)]
    pub upload_rate: f64,
    #[serde(default)]
    pub peers: u32,
    #[serde(default)]
    pub seeds: u32,
    #[serde(default)]
    pub added_time: String,
    #[serde(default)]
    pub download_files: Vec<DownloadableFile>,
}

impl TorrentView {
    /// Download links are only offered once the payload is complete
    pub fn has_downloads(&self) -> bool {
        self.status.is_finished() && !self.download_files.is_empty()
    }
}

/// Colour band of the storage usage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTier {
    /// p <= 70
    Healthy,
    /// 70 < p <= 90
    Warning,
    /// p > 90
    Critical,
}

impl UsageTier {
    pub fn from_percentage(p: f64) -> Self {
        if p > 90.0 {
            UsageTier::Critical
        } else if p > 70.0 {
            UsageTier::Warning
        } else {
            UsageTier::Healthy
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            UsageTier::Critical => "#dc3545",
            UsageTier::Warning => "linear-gradient(90deg, #ffc107, #dc3545)",
            UsageTier::Healthy => "linear-gradient(90deg, #28a745, #ffc107)",
        }
    }
}

/// Disk usage of the download volume. GB fields are pre-rounded server side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSnapshot {
    pub total_storage: f64,
    pub used_storage: f64,
    pub free_storage: f64,
    pub downloaded_content: f64,
    pub total_storage_gb: f64,
    pub used_storage_gb: f64,
    pub free_storage_gb: f64,
    pub downloaded_content_gb: f64,
    pub usage_percentage: f64,
}

impl StorageSnapshot {
    /// Share of the volume taken by downloaded content, in percent
    pub fn downloaded_percentage(&self) -> f64 {
        if self.total_storage > 0.0 {
            self.downloaded_content / self.total_storage * 100.0
        } else {
            0.0
        }
    }

    pub fn usage_tier(&self) -> UsageTier {
        UsageTier::from_percentage(self.usage_percentage)
    }
}

/// Top-level download folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderView {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub size_mb: f64,
    #[serde(default)]
    pub modified: String,
}

/// A downloaded file; `path` is its stable identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileView {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub size_mb: f64,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub modified: String,
}

impl FileView {
    pub fn belongs_to(&self, folder: &str) -> bool {
        self.folder == folder || self.path.starts_with(&format!("{}/", folder))
    }
}

/// Detail record from `/api/file/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDetail {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size_mb: f64,
    #[serde(default)]
    pub size_gb: f64,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub created: String,
}

/// A `.torrent` file picked by the user, read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentUpload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Binary body of a ZIP download
#[derive(Debug, Clone, PartialEq)]
pub struct Archive {
    pub bytes: Vec<u8>,
    pub content_disposition: Option<String>,
}
