//! Endpoint paths
//!
//! Dynamic segments are encoded like `encodeURIComponent`, so a file path
//! such as `Show/S01 E01.mkv` travels as one segment.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

pub const TORRENTS: &str = "/api/torrents";
pub const STORAGE: &str = "/api/storage";
pub const ADD_TORRENT: &str = "/api/add_torrent";
pub const FOLDERS: &str = "/api/folders";
pub const FILES: &str = "/api/files";
pub const DOWNLOAD_SELECTED: &str = "/api/files/download/selected";

pub fn pause(id: &str) -> String {
    format!("/api/torrent/{}/pause", encode(id))
}

pub fn resume(id: &str) -> String {
    format!("/api/torrent/{}/resume", encode(id))
}

pub fn remove(id: &str, delete_files: bool) -> String {
    format!(
        "/api/torrent/{}/remove?delete_files={}",
        encode(id),
        delete_files
    )
}

pub fn file_info(path: &str) -> String {
    format!("/api/file/info/{}", encode(path))
}

/// Also used as a plain link target for single-file downloads
pub fn download_file(path: &str) -> String {
    format!("/api/download/{}", encode(path))
}

pub fn download_folder(path: &str) -> String {
    format!("/api/folder/download/{}", encode(path))
}

pub fn delete_file(path: &str) -> String {
    format!("/api/file/delete/{}", encode(path))
}

pub fn delete_folder(path: &str) -> String {
    format!("/api/folder/delete/{}", encode(path))
}
