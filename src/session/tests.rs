//! Session Tests
//!
//! Drives the dispatchers against an in-memory backend and a surface that
//! records what would have been rendered.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use futures::executor::block_on;

    use crate::api::Backend;
    use crate::error::{ApiError, ApiResult};
    use crate::models::{
        Archive, FileDetail, FileView, FolderView, StorageSnapshot, TorrentStatus, TorrentUpload,
        TorrentView,
    };
    use crate::selection::{HeaderCheck, SelectionSummary};
    use crate::session::{BrowserTab, ConfirmPrompt, Listing, SavedFile, Session, Surface};
    use crate::toast::{Notice, Severity, ToastBody};

    // ========================
    // Fixtures
    // ========================

    #[derive(Default)]
    struct MockBackend {
        calls: RefCell<Vec<String>>,
        /// Calls (by label) that answer `success: false`
        rejected: Vec<String>,
        /// Calls (by label) that fail with a non-2xx status
        failing_status: Vec<String>,
        /// Calls (by label) whose response never arrives intact
        broken: Vec<String>,
        torrents: Vec<TorrentView>,
        folders: Vec<FolderView>,
        files: Vec<FileView>,
        archive: Option<Archive>,
    }

    impl MockBackend {
        fn record(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call.clone());
            if self.rejected.contains(&call) {
                return Err(ApiError::Rejected(format!("{} rejected", call)));
            }
            if self.failing_status.contains(&call) {
                return Err(ApiError::Status(500));
            }
            if self.broken.contains(&call) {
                return Err(ApiError::Decode("connection reset".into()));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        /// Every call that is not a plain read
        fn mutations(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter(|c| !c.starts_with("GET "))
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl Backend for MockBackend {
        async fn torrents(&self) -> ApiResult<Vec<TorrentView>> {
            self.record("GET torrents".into())?;
            Ok(self.torrents.clone())
        }

        async fn add_magnet(&self, magnet_link: &str) -> ApiResult<String> {
            self.record(format!("POST magnet {}", magnet_link))?;
            Ok("Torrent added successfully".into())
        }

        async fn add_torrent_file(&self, upload: TorrentUpload) -> ApiResult<String> {
            self.record(format!("POST upload {}", upload.name))?;
            Ok(String::new())
        }

        async fn pause(&self, id: &str) -> ApiResult<String> {
            self.record(format!("POST pause {}", id))?;
            Ok("Torrent paused".into())
        }

        async fn resume(&self, id: &str) -> ApiResult<String> {
            self.record(format!("POST resume {}", id))?;
            Ok("Torrent resumed".into())
        }

        async fn remove(&self, id: &str, delete_files: bool) -> ApiResult<String> {
            self.record(format!("DELETE remove {} {}", id, delete_files))?;
            Ok(format!("Torrent {} removed", id))
        }

        async fn storage(&self) -> ApiResult<StorageSnapshot> {
            self.record("GET storage".into())?;
            Ok(StorageSnapshot {
                usage_percentage: 42.0,
                ..Default::default()
            })
        }

        async fn folders(&self) -> ApiResult<Vec<FolderView>> {
            self.record("GET folders".into())?;
            Ok(self.folders.clone())
        }

        async fn files(&self) -> ApiResult<Vec<FileView>> {
            self.record("GET files".into())?;
            Ok(self.files.clone())
        }

        async fn file_info(&self, path: &str) -> ApiResult<FileDetail> {
            self.record(format!("GET info {}", path))?;
            Ok(FileDetail {
                name: "<b>x</b>.mkv".into(),
                path: path.into(),
                size_mb: 10.5,
                size_gb: 0.01,
                mime_type: "video/x-matroska".into(),
                modified: "2024-01-01 10:00:00".into(),
                created: "2024-01-01 09:00:00".into(),
            })
        }

        async fn delete_file(&self, path: &str) -> ApiResult<String> {
            self.record(format!("DELETE file {}", path))?;
            Ok(format!("File {} deleted successfully", path))
        }

        async fn delete_folder(&self, path: &str) -> ApiResult<String> {
            self.record(format!("DELETE folder {}", path))?;
            Ok(format!("Folder {} deleted successfully", path))
        }

        async fn download_folder(&self, path: &str) -> ApiResult<Archive> {
            self.record(format!("GET zip {}", path))?;
            Ok(self.archive.clone().unwrap_or(Archive {
                bytes: Vec::new(),
                content_disposition: None,
            }))
        }

        async fn download_selected(&self, paths: &[String]) -> ApiResult<Archive> {
            self.record(format!("POST zip {}", paths.join(",")))?;
            Ok(self.archive.clone().unwrap_or(Archive {
                bytes: Vec::new(),
                content_disposition: None,
            }))
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        notices: RefCell<Vec<Notice>>,
        torrents: RefCell<Option<Listing<TorrentView>>>,
        storage: RefCell<Option<StorageSnapshot>>,
        folders: RefCell<Vec<Listing<FolderView>>>,
        files: RefCell<Vec<Listing<FileView>>>,
        selection: RefCell<SelectionSummary>,
        removal: RefCell<Option<String>>,
        delete: RefCell<Option<ConfirmPrompt>>,
        bulk: RefCell<Option<usize>>,
        tab: RefCell<BrowserTab>,
        saved: RefCell<Vec<SavedFile>>,
    }

    impl Surface for RecordingSurface {
        fn torrents(&self, listing: Listing<TorrentView>) {
            *self.torrents.borrow_mut() = Some(listing);
        }

        fn storage(&self, snapshot: StorageSnapshot) {
            *self.storage.borrow_mut() = Some(snapshot);
        }

        fn folders(&self, listing: Listing<FolderView>) {
            self.folders.borrow_mut().push(listing);
        }

        fn files(&self, listing: Listing<FileView>) {
            self.files.borrow_mut().push(listing);
        }

        fn selection(&self, summary: SelectionSummary) {
            *self.selection.borrow_mut() = summary;
        }

        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn removal_prompt(&self, torrent_id: Option<String>) {
            *self.removal.borrow_mut() = torrent_id;
        }

        fn delete_prompt(&self, prompt: Option<ConfirmPrompt>) {
            *self.delete.borrow_mut() = prompt;
        }

        fn bulk_prompt(&self, selected: Option<usize>) {
            *self.bulk.borrow_mut() = selected;
        }

        fn show_tab(&self, tab: BrowserTab) {
            *self.tab.borrow_mut() = tab;
        }

        fn save_file(&self, file: SavedFile) {
            self.saved.borrow_mut().push(file);
        }
    }

    impl RecordingSurface {
        fn notices(&self) -> Vec<(Severity, String)> {
            self.notices
                .borrow()
                .iter()
                .map(|n| (n.severity, n.message().to_string()))
                .collect()
        }

        fn last_files(&self) -> Listing<FileView> {
            self.files.borrow().last().cloned().unwrap_or(Listing::Loading)
        }
    }

    type TestSession = Session<MockBackend, RecordingSurface>;

    fn make_session(backend: MockBackend) -> TestSession {
        Session::new(backend, RecordingSurface::default())
    }

    fn make_torrent(id: &str, status: TorrentStatus) -> TorrentView {
        TorrentView {
            id: id.to_string(),
            name: format!("Torrent {}", id),
            status,
            progress: 50.0,
            size: 1024.0,
            download_rate: 0.0,
            upload_rate: 0.0,
            peers: 0,
            seeds: 0,
            added_time: "2024-01-01 10:00:00".to_string(),
            download_files: Vec::new(),
        }
    }

    fn make_file(path: &str, folder: &str) -> FileView {
        FileView {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            extension: ".mkv".to_string(),
            size_mb: 1.0,
            folder: folder.to_string(),
            modified: "2024-01-01 10:00:00".to_string(),
        }
    }

    fn make_folder(path: &str) -> FolderView {
        FolderView {
            path: path.to_string(),
            name: path.to_string(),
            file_count: 1,
            size_mb: 1.0,
            modified: "2024-01-01 10:00:00".to_string(),
        }
    }

    /// Session with three rendered files, all selected
    fn make_selected_session(backend: MockBackend) -> TestSession {
        let backend = MockBackend {
            files: vec![
                make_file("Movies/a.mkv", "Movies"),
                make_file("Movies/b.mkv", "Movies"),
                make_file("c.mkv", "root"),
            ],
            ..backend
        };
        let session = make_session(backend);
        block_on(session.refresh_files());
        session.toggle_select_all(true);
        session.backend.calls.borrow_mut().clear();
        session
    }

    // ========================
    // Adding torrents
    // ========================

    #[test]
    fn test_magnet_without_prefix_never_hits_network() {
        let session = make_session(MockBackend::default());
        let added = block_on(session.add_magnet("http://example.com/file.torrent"));

        assert!(!added);
        assert!(session.backend.calls().is_empty());
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Error, "Invalid magnet link format".to_string())]
        );
    }

    #[test]
    fn test_empty_magnet_is_rejected() {
        let session = make_session(MockBackend::default());
        assert!(!block_on(session.add_magnet("   ")));
        assert!(session.backend.calls().is_empty());
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Error, "Please enter a magnet link".to_string())]
        );
    }

    #[test]
    fn test_magnet_success_refreshes_after_mutation() {
        let session = make_session(MockBackend::default());
        assert!(block_on(session.add_magnet("  magnet:?xt=urn:btih:abc ")));

        let calls = session.backend.calls();
        assert_eq!(calls[0], "POST magnet magnet:?xt=urn:btih:abc");
        assert!(calls[1..].contains(&"GET torrents".to_string()));
        assert!(calls[1..].contains(&"GET storage".to_string()));
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Success, "Torrent added successfully!".to_string())]
        );
    }

    #[test]
    fn test_magnet_rejected_by_server() {
        let session = make_session(MockBackend {
            rejected: vec!["POST magnet magnet:?xt=bad".into()],
            ..Default::default()
        });
        assert!(!block_on(session.add_magnet("magnet:?xt=bad")));
        assert_eq!(session.backend.calls(), vec!["POST magnet magnet:?xt=bad"]);
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Error, "POST magnet magnet:?xt=bad rejected".to_string())]
        );
    }

    /// Reader that counts how often the file contents were requested
    fn counting_reader(
        reads: &Cell<u32>,
        bytes: Option<Vec<u8>>,
    ) -> impl FnOnce() -> futures::future::Ready<Option<Vec<u8>>> + '_ {
        move || {
            reads.set(reads.get() + 1);
            futures::future::ready(bytes)
        }
    }

    #[test]
    fn test_torrent_file_validation() {
        let session = make_session(MockBackend::default());
        let reads = Cell::new(0);

        assert!(!block_on(session.add_torrent_file(None, counting_reader(&reads, None))));
        assert!(session.surface.notices().is_empty());

        let picked = Some("debian.torrent".to_string());
        let bytes = Some(vec![b'd', b'e']);
        assert!(block_on(session.add_torrent_file(picked, counting_reader(&reads, bytes))));
        assert_eq!(reads.get(), 1);
        assert_eq!(session.backend.mutations(), vec!["POST upload debian.torrent"]);
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Success, "Torrent file added successfully!".to_string())]
        );
    }

    #[test]
    fn test_wrong_extension_is_rejected_before_reading() {
        let session = make_session(MockBackend::default());
        let reads = Cell::new(0);

        let picked = Some("big.mkv".to_string());
        let bytes = Some(vec![0; 16]);
        assert!(!block_on(session.add_torrent_file(picked, counting_reader(&reads, bytes))));

        assert_eq!(reads.get(), 0);
        assert!(session.backend.calls().is_empty());
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Error, "Please select a valid .torrent file".to_string())]
        );
    }

    #[test]
    fn test_unreadable_torrent_file_is_not_uploaded() {
        let session = make_session(MockBackend::default());
        let reads = Cell::new(0);

        let picked = Some("debian.torrent".to_string());
        assert!(!block_on(session.add_torrent_file(picked, counting_reader(&reads, None))));

        assert_eq!(reads.get(), 1);
        assert!(session.backend.calls().is_empty());
    }

    // ========================
    // Torrent controls
    // ========================

    #[test]
    fn test_pause_refreshes_only_on_success() {
        let session = make_session(MockBackend {
            rejected: vec!["POST pause bad".into()],
            ..Default::default()
        });

        block_on(session.pause("bad"));
        assert_eq!(session.backend.calls(), vec!["POST pause bad"]);

        session.backend.calls.borrow_mut().clear();
        block_on(session.resume("good"));
        let calls = session.backend.calls();
        assert_eq!(calls[0], "POST resume good");
        assert_eq!(calls.len(), 3);
    }

    #[test]
    fn test_remove_flag_follows_choice() {
        let session = make_session(MockBackend::default());

        session.request_removal("ab12");
        assert_eq!(*session.surface.removal.borrow(), Some("ab12".to_string()));
        block_on(session.confirm_removal(true));

        session.request_removal("cd34");
        block_on(session.confirm_removal(false));

        assert_eq!(
            session.backend.mutations(),
            vec!["DELETE remove ab12 true", "DELETE remove cd34 false"]
        );
        assert_eq!(*session.surface.removal.borrow(), None);
        assert!(session.pending_removal.borrow().is_none());
    }

    #[test]
    fn test_cancel_removal_sends_nothing() {
        let session = make_session(MockBackend::default());
        session.request_removal("ab12");
        session.cancel_removal();
        block_on(session.confirm_removal(true));

        assert!(session.backend.calls().is_empty());
        assert_eq!(*session.surface.removal.borrow(), None);
    }

    #[test]
    fn test_failed_removal_still_clears_pending() {
        let session = make_session(MockBackend {
            rejected: vec!["DELETE remove ab12 false".into()],
            ..Default::default()
        });
        session.request_removal("ab12");
        block_on(session.confirm_removal(false));

        assert!(session.pending_removal.borrow().is_none());
        assert_eq!(*session.surface.removal.borrow(), None);
        assert_eq!(session.backend.calls(), vec!["DELETE remove ab12 false"]);
        assert_eq!(session.surface.notices()[0].0, Severity::Error);
    }

    // ========================
    // Deleting
    // ========================

    #[test]
    fn test_only_latest_delete_target_is_armed() {
        let session = make_session(MockBackend::default());
        session.confirm_delete_file("Movies/a.mkv", "a.mkv");
        session.confirm_delete_folder("Music", "Music");

        let prompt = session.surface.delete.borrow().clone().unwrap();
        assert_eq!(prompt.title, "Delete Folder");
        assert!(prompt.message.contains("\"Music\""));

        block_on(session.confirm_delete());
        assert_eq!(session.backend.mutations(), vec!["DELETE folder Music"]);
        assert!(session.surface.delete.borrow().is_none());

        // nothing armed any more
        block_on(session.confirm_delete());
        assert_eq!(session.backend.mutations().len(), 1);
    }

    #[test]
    fn test_failed_delete_stays_armed_until_cancel() {
        let session = make_session(MockBackend {
            rejected: vec!["DELETE file x.mkv".into()],
            ..Default::default()
        });
        session.confirm_delete_file("x.mkv", "x.mkv");
        block_on(session.confirm_delete());

        assert!(session.surface.delete.borrow().is_some());
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Error, "Failed to delete file: DELETE file x.mkv rejected".to_string())]
        );

        session.cancel_delete();
        block_on(session.confirm_delete());
        assert_eq!(session.backend.mutations(), vec!["DELETE file x.mkv"]);
    }

    #[test]
    fn test_folder_delete_refreshes_folders_and_storage() {
        let session = make_session(MockBackend::default());
        session.confirm_delete_folder("Music", "Music");
        block_on(session.confirm_delete());

        let calls = session.backend.calls();
        assert_eq!(calls[0], "DELETE folder Music");
        let mut refreshes = calls[1..].to_vec();
        refreshes.sort();
        assert_eq!(refreshes, vec!["GET folders", "GET storage"]);
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Success, "Folder Music deleted successfully".to_string())]
        );
    }

    #[test]
    fn test_file_delete_refreshes_files_and_storage() {
        let session = make_session(MockBackend::default());
        session.confirm_delete_file("Movies/a.mkv", "a.mkv");
        block_on(session.confirm_delete());

        let calls = session.backend.calls();
        assert_eq!(calls[0], "DELETE file Movies/a.mkv");
        let mut refreshes = calls[1..].to_vec();
        refreshes.sort();
        assert_eq!(refreshes, vec!["GET files", "GET storage"]);
        assert!(session.surface.delete.borrow().is_none());
    }

    #[test]
    fn test_bulk_delete_reports_partial_failure() {
        let session = make_selected_session(MockBackend {
            rejected: vec!["DELETE file Movies/b.mkv".into()],
            ..Default::default()
        });

        session.confirm_delete_selected();
        let prompt = session.surface.delete.borrow().clone().unwrap();
        assert_eq!(prompt.message, "Are you sure you want to delete 3 selected files?");

        block_on(session.confirm_delete());

        let deletes: Vec<String> = session
            .backend
            .mutations()
            .into_iter()
            .filter(|c| c.starts_with("DELETE file"))
            .collect();
        assert_eq!(deletes.len(), 3);
        assert_eq!(
            session.surface.notices(),
            vec![
                (Severity::Success, "2 files deleted successfully".to_string()),
                (Severity::Warning, "1 files failed to delete".to_string()),
            ]
        );
        assert_eq!(session.surface.selection.borrow().count, 0);
        assert!(session.surface.delete.borrow().is_none());
        assert!(session.surface.bulk.borrow().is_none());
    }

    #[test]
    fn test_bulk_delete_needs_selection() {
        let session = make_session(MockBackend::default());
        session.confirm_delete_selected();
        assert!(session.surface.delete.borrow().is_none());
        block_on(session.confirm_delete());
        assert!(session.backend.calls().is_empty());
    }

    // ========================
    // Selection
    // ========================

    #[test]
    fn test_selection_tracks_checkboxes() {
        let session = make_selected_session(MockBackend::default());
        assert_eq!(session.surface.selection.borrow().header, HeaderCheck::Checked);

        session.toggle_file("c.mkv", false);
        let summary = session.surface.selection.borrow().clone();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.header, HeaderCheck::Indeterminate);
        assert!(!summary.contains("c.mkv"));

        session.open_bulk_actions();
        assert_eq!(*session.surface.bulk.borrow(), Some(2));

        block_on(session.refresh_files());
        let summary = session.surface.selection.borrow().clone();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.header, HeaderCheck::Unchecked);
    }

    #[test]
    fn test_bulk_actions_hidden_without_selection() {
        let session = make_session(MockBackend::default());
        session.open_bulk_actions();
        assert!(session.surface.bulk.borrow().is_none());
    }

    // ========================
    // Downloads
    // ========================

    #[test]
    fn test_download_selected_requires_selection() {
        let session = make_session(MockBackend::default());
        block_on(session.download_selected());
        assert!(session.backend.calls().is_empty());
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Warning, "No files selected for download".to_string())]
        );
    }

    #[test]
    fn test_empty_archive_is_an_error() {
        let session = make_selected_session(MockBackend::default());
        block_on(session.download_selected());

        assert!(session.surface.saved.borrow().is_empty());
        let notices = session.surface.notices();
        assert_eq!(notices.last().unwrap().0, Severity::Error);
        assert_eq!(notices.last().unwrap().1, "ZIP file is empty. No valid files found.");
        // selection survives a failed download
        assert_eq!(session.surface.selection.borrow().count, 3);
    }

    #[test]
    fn test_download_selected_uses_header_filename() {
        let session = make_selected_session(MockBackend {
            archive: Some(Archive {
                bytes: vec![0x50, 0x4b, 0x03, 0x04],
                content_disposition: Some(
                    r#"attachment; filename="selected_files_20240101.zip""#.into(),
                ),
            }),
            ..Default::default()
        });
        session.open_bulk_actions();
        block_on(session.download_selected());

        assert_eq!(
            session.backend.calls(),
            vec!["POST zip Movies/a.mkv,Movies/b.mkv,c.mkv"]
        );
        let saved = session.surface.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].filename, "selected_files_20240101.zip");
        assert_eq!(
            session.surface.notices().last().unwrap().1,
            "Downloaded 3 files as selected_files_20240101.zip"
        );
        assert_eq!(session.surface.selection.borrow().count, 0);
        assert!(session.surface.bulk.borrow().is_none());
    }

    #[test]
    fn test_download_selected_shows_server_rejection() {
        let session = make_selected_session(MockBackend {
            rejected: vec!["POST zip Movies/a.mkv,Movies/b.mkv,c.mkv".into()],
            ..Default::default()
        });
        session.open_bulk_actions();
        block_on(session.download_selected());

        assert!(session.surface.saved.borrow().is_empty());
        assert_eq!(
            session.surface.notices().last().cloned(),
            Some((
                Severity::Error,
                "POST zip Movies/a.mkv,Movies/b.mkv,c.mkv rejected".to_string()
            ))
        );
        assert_eq!(session.surface.selection.borrow().count, 3);
        assert_eq!(*session.surface.bulk.borrow(), Some(3));
    }

    #[test]
    fn test_download_selected_http_failure() {
        let session = make_selected_session(MockBackend {
            failing_status: vec!["POST zip Movies/a.mkv,Movies/b.mkv,c.mkv".into()],
            ..Default::default()
        });
        block_on(session.download_selected());

        assert_eq!(
            session.surface.notices().last().cloned(),
            Some((Severity::Error, "Failed to download files".to_string()))
        );
    }

    #[test]
    fn test_download_selected_network_failure() {
        let session = make_selected_session(MockBackend {
            broken: vec!["POST zip Movies/a.mkv,Movies/b.mkv,c.mkv".into()],
            ..Default::default()
        });
        block_on(session.download_selected());

        assert!(session.surface.saved.borrow().is_empty());
        assert_eq!(
            session.surface.notices().last().cloned(),
            Some((
                Severity::Error,
                "Network error while downloading files: unexpected response: connection reset"
                    .to_string()
            ))
        );
        assert_eq!(session.surface.selection.borrow().count, 3);
    }

    #[test]
    fn test_folder_download_falls_back_to_folder_name() {
        let session = make_session(MockBackend {
            archive: Some(Archive {
                bytes: vec![1],
                content_disposition: Some("attachment".into()),
            }),
            ..Default::default()
        });
        block_on(session.download_folder("Movies"));

        assert_eq!(session.surface.saved.borrow()[0].filename, "Movies.zip");
        assert_eq!(
            session.surface.notices(),
            vec![
                (Severity::Info, "Creating ZIP file...".to_string()),
                (Severity::Success, "Folder downloaded as Movies.zip".to_string()),
            ]
        );
    }

    #[test]
    fn test_folder_download_http_failure() {
        let session = make_session(MockBackend {
            failing_status: vec!["GET zip Movies".into()],
            ..Default::default()
        });
        block_on(session.download_folder("Movies"));
        assert!(session.surface.saved.borrow().is_empty());
        assert_eq!(
            session.surface.notices().last().unwrap().1,
            "Failed to download folder"
        );
    }

    // ========================
    // Fetchers
    // ========================

    #[test]
    fn test_empty_listings_render_empty_state() {
        let session = make_session(MockBackend::default());
        block_on(session.refresh_all());

        assert_eq!(*session.surface.torrents.borrow(), Some(Listing::Empty));
        assert_eq!(session.surface.folders.borrow().first(), Some(&Listing::Loading));
        assert_eq!(session.surface.folders.borrow().last(), Some(&Listing::Empty));
        assert_eq!(session.surface.last_files(), Listing::Empty);
        assert!(session.surface.storage.borrow().is_some());
    }

    #[test]
    fn test_failed_fetch_replaces_loading_state() {
        let session = make_session(MockBackend {
            rejected: vec!["GET torrents".into(), "GET files".into()],
            ..Default::default()
        });
        block_on(session.refresh_torrents());
        block_on(session.refresh_files());

        assert_eq!(
            *session.surface.torrents.borrow(),
            Some(Listing::failed("Error", "GET torrents rejected"))
        );
        assert_eq!(
            session.surface.last_files(),
            Listing::failed("Error loading files", "GET files rejected")
        );
    }

    #[test]
    fn test_torrents_render_in_server_order() {
        let session = make_session(MockBackend {
            torrents: vec![
                make_torrent("zz", TorrentStatus::Paused),
                make_torrent("aa", TorrentStatus::Seeding),
            ],
            ..Default::default()
        });
        block_on(session.refresh_torrents());

        let listing = session.surface.torrents.borrow().clone().unwrap();
        let ids: Vec<&str> = listing.items().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["zz", "aa"]);
    }

    #[test]
    fn test_show_folder_files_filters_and_switches_tab() {
        let session = make_session(MockBackend {
            folders: vec![make_folder("Movies")],
            files: vec![
                make_file("Movies/a.mkv", "Movies"),
                make_file("Movies/Extras/b.mkv", "Movies/Extras"),
                make_file("c.mkv", "root"),
            ],
            ..Default::default()
        });
        block_on(session.show_folder_files("Movies"));

        assert_eq!(*session.surface.tab.borrow(), BrowserTab::Files);
        assert_eq!(session.surface.last_files().items().len(), 2);
        assert_eq!(
            session.surface.notices(),
            vec![(Severity::Success, "Showing 2 files from Movies".to_string())]
        );
    }

    #[test]
    fn test_file_details_are_escaped() {
        let session = make_session(MockBackend::default());
        block_on(session.show_file_details("Movies/x.mkv"));

        let notice = session.surface.notices.borrow()[0].clone();
        assert_eq!(notice.title, "File Details");
        let ToastBody::Markup(markup) = notice.body else {
            panic!("expected markup body");
        };
        assert!(markup.contains("&lt;b&gt;x&lt;/b&gt;.mkv"));
        assert!(markup.contains("<strong>Size:</strong> 10.5 MB (0.01 GB)"));
        assert!(!markup.contains("<b>x</b>"));
    }
}
