//! File Categories
//!
//! Fixed extension table driving both the icon glyph and the CSS class of a
//! file row.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Video,
    Audio,
    Image,
    Archive,
    Document,
    Executable,
    Default,
}

const VIDEO: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm"];
const AUDIO: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "wma"];
const IMAGE: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];
const ARCHIVE: &[&str] = &["zip", "rar", "7z", "tar", "gz"];
const DOCUMENT: &[&str] = &["pdf", "doc", "docx", "txt"];
const EXECUTABLE: &[&str] = &["exe", "msi", "bin"];

/// Lowercased extension without the leading dot
fn normalize(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Self {
        let ext = normalize(extension);
        let ext = ext.as_str();
        if VIDEO.contains(&ext) {
            FileKind::Video
        } else if AUDIO.contains(&ext) {
            FileKind::Audio
        } else if IMAGE.contains(&ext) {
            FileKind::Image
        } else if ARCHIVE.contains(&ext) {
            FileKind::Archive
        } else if DOCUMENT.contains(&ext) {
            FileKind::Document
        } else if EXECUTABLE.contains(&ext) {
            FileKind::Executable
        } else {
            FileKind::Default
        }
    }

    /// Class on the icon wrapper. Executables share the default styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Image => "image",
            FileKind::Archive => "archive",
            FileKind::Document => "document",
            FileKind::Executable | FileKind::Default => "default",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            FileKind::Video => "fas fa-file-video",
            FileKind::Audio => "fas fa-file-audio",
            FileKind::Image => "fas fa-file-image",
            FileKind::Archive => "fas fa-file-archive",
            FileKind::Document => "fas fa-file-alt",
            FileKind::Executable => "fas fa-cog",
            FileKind::Default => "fas fa-file",
        }
    }
}

/// Icon glyph class for an extension
pub fn icon_for(extension: &str) -> &'static str {
    match normalize(extension).as_str() {
        "pdf" => "fas fa-file-pdf",
        "doc" | "docx" => "fas fa-file-word",
        "srt" => "fas fa-closed-captioning",
        _ => FileKind::from_extension(extension).icon(),
    }
}
