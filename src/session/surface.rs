//! Render Surface
//!
//! What the session hands to the UI. Every call is a full replacement of the
//! corresponding piece of the page, never a patch.

use crate::models::{FileView, FolderView, StorageSnapshot, TorrentView};
use crate::selection::SelectionSummary;
use crate::toast::Notice;

/// State of a list container
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Listing<T> {
    #[default]
    Loading,
    Ready(Vec<T>),
    /// Fetched fine, nothing to show
    Empty,
    Failed {
        title: String,
        message: String,
    },
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Ready(items)
        }
    }

    pub fn failed(title: impl Into<String>, message: impl Into<String>) -> Self {
        Listing::Failed {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Ready(items) => items,
            _ => &[],
        }
    }
}

/// Tab of the file browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserTab {
    #[default]
    Folders,
    Files,
}

/// Title and text of the delete confirmation dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
}

/// A blob to hand to the browser's save mechanism
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// render(view-model) -> UI
pub trait Surface {
    fn torrents(&self, listing: Listing<TorrentView>);

    fn storage(&self, snapshot: StorageSnapshot);

    fn folders(&self, listing: Listing<FolderView>);

    fn files(&self, listing: Listing<FileView>);

    fn selection(&self, summary: SelectionSummary);

    fn notify(&self, notice: Notice);

    /// `Some(id)` opens the remove-torrent dialog, `None` closes it
    fn removal_prompt(&self, torrent_id: Option<String>);

    fn delete_prompt(&self, prompt: Option<ConfirmPrompt>);

    /// `Some(count)` opens the bulk actions dialog
    fn bulk_prompt(&self, selected: Option<usize>);

    fn show_tab(&self, tab: BrowserTab);

    fn save_file(&self, file: SavedFile);
}
