//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session never
//! touches the store directly; it renders through `DashboardSurface`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::DashboardConfig;
use crate::models::{FileView, FolderView, StorageSnapshot, TorrentView};
use crate::selection::SelectionSummary;
use crate::session::{BrowserTab, ConfirmPrompt, Listing, SavedFile, Surface};
use crate::toast::{Notice, ToastQueue};

/// Everything currently on screen, field-level reactive
#[derive(Clone, Debug, Store)]
pub struct DashboardState {
    pub torrents: Listing<TorrentView>,
    /// `None` until the first successful fetch
    pub storage: Option<StorageSnapshot>,
    pub folders: Listing<FolderView>,
    pub files: Listing<FileView>,
    pub selection: SelectionSummary,
    pub toasts: ToastQueue,
    /// Torrent id the remove dialog is open for
    pub removal: Option<String>,
    pub delete_prompt: Option<ConfirmPrompt>,
    /// Selected count while the bulk actions dialog is open
    pub bulk: Option<usize>,
    pub tab: BrowserTab,
    /// File browser layout, list when false
    pub grid_view: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            torrents: Listing::Loading,
            storage: None,
            folders: Listing::Loading,
            files: Listing::Loading,
            selection: SelectionSummary::default(),
            toasts: ToastQueue::default(),
            removal: None,
            delete_prompt: None,
            bulk: None,
            tab: BrowserTab::default(),
            grid_view: false,
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// Surface
// ========================

/// Renders session output into the store and owns toast timing.
#[derive(Clone, Copy)]
pub struct DashboardSurface {
    pub store: DashboardStore,
    toast_timeout_ms: u32,
    toast_exit_ms: u32,
}

impl DashboardSurface {
    pub fn new(store: DashboardStore, config: &DashboardConfig) -> Self {
        Self {
            store,
            toast_timeout_ms: config.toast_timeout_ms,
            toast_exit_ms: config.toast_exit_ms,
        }
    }

    /// Play the exit animation, then detach. Safe to call more than once.
    pub fn dismiss(&self, id: u64) {
        let store = self.store;
        if !store.toasts().write().begin_dismiss(id) {
            return;
        }
        Timeout::new(self.toast_exit_ms, move || {
            store.toasts().write().remove(id);
        })
        .forget();
    }
}

impl Surface for DashboardSurface {
    fn torrents(&self, listing: Listing<TorrentView>) {
        *self.store.torrents().write() = listing;
    }

    fn storage(&self, snapshot: StorageSnapshot) {
        *self.store.storage().write() = Some(snapshot);
    }

    fn folders(&self, listing: Listing<FolderView>) {
        *self.store.folders().write() = listing;
    }

    fn files(&self, listing: Listing<FileView>) {
        *self.store.files().write() = listing;
    }

    fn selection(&self, summary: SelectionSummary) {
        *self.store.selection().write() = summary;
    }

    fn notify(&self, notice: Notice) {
        let id = self.store.toasts().write().push(notice);
        let surface = *self;
        Timeout::new(self.toast_timeout_ms, move || surface.dismiss(id)).forget();
    }

    fn removal_prompt(&self, torrent_id: Option<String>) {
        *self.store.removal().write() = torrent_id;
    }

    fn delete_prompt(&self, prompt: Option<ConfirmPrompt>) {
        *self.store.delete_prompt().write() = prompt;
    }

    fn bulk_prompt(&self, selected: Option<usize>) {
        *self.store.bulk().write() = selected;
    }

    fn show_tab(&self, tab: BrowserTab) {
        *self.store.tab().write() = tab;
    }

    fn save_file(&self, file: SavedFile) {
        if let Err(e) = trigger_download(&file) {
            log::error!("[store] saving {} failed: {:?}", file.filename, e);
        }
    }
}

/// Wrap the bytes in a blob and click a temporary anchor pointing at it.
fn trigger_download(file: &SavedFile) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/zip");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.set_attribute("style", "display: none")?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    web_sys::Url::revoke_object_url(&url)
}
