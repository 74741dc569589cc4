//! UI Components
//!
//! Leptos views over the dashboard store.

mod add_torrent_panel;
mod empty_state;
mod file_browser;
mod file_list;
mod folder_list;
mod modals;
mod storage_panel;
mod toast_host;
mod torrent_list;

pub use add_torrent_panel::AddTorrentPanel;
pub use empty_state::{EmptyState, LoadingLine};
pub use file_browser::FileBrowser;
pub use file_list::FileList;
pub use folder_list::FolderList;
pub use modals::{BulkActionsModal, DeleteModal, RemoveTorrentModal};
pub use storage_panel::StoragePanel;
pub use toast_host::ToastHost;
pub use torrent_list::TorrentList;
