//! Add Torrent Panel Component
//!
//! Magnet link form and `.torrent` file upload.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::context::use_app_context;

/// Bytes of a picked file. `None` when the read fails.
async fn read_file(file: web_sys::File) -> Option<Vec<u8>> {
    match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => Some(js_sys::Uint8Array::new(&buffer).to_vec()),
        Err(e) => {
            log::error!("[add] could not read {}: {:?}", file.name(), e);
            None
        }
    }
}

#[component]
pub fn AddTorrentPanel() -> impl IntoView {
    let ctx = use_app_context();

    let (magnet, set_magnet) = signal(String::new());
    let file_input = NodeRef::<html::Input>::new();

    let add_magnet = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let link = magnet.get_untracked();
        ctx.dispatch(move |session| async move {
            if session.add_magnet(&link).await {
                set_magnet.set(String::new());
            }
        });
    };

    let add_file = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let picked = input.files().and_then(|files| files.get(0));
        ctx.dispatch(move |session| async move {
            let name = picked.as_ref().map(|file| file.name());
            // the name is checked before any byte is read
            let read = move || async move { read_file(picked?).await };
            if session.add_torrent_file(name, read).await {
                input.set_value("");
            }
        });
    };

    view! {
        <section class="card add-torrent-section">
            <h2><i class="fas fa-plus-circle"></i> " Add Torrent"</h2>

            <form class="input-group" on:submit=add_magnet>
                <input
                    type="text"
                    id="magnetLink"
                    placeholder="Paste magnet link here..."
                    prop:value=move || magnet.get()
                    on:input=move |ev| set_magnet.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">
                    <i class="fas fa-magnet"></i> " Add Magnet"
                </button>
            </form>

            <div class="input-group">
                <input type="file" id="torrentFile" accept=".torrent" node_ref=file_input />
                <button type="button" class="btn-primary" on:click=add_file>
                    <i class="fas fa-upload"></i> " Upload Torrent"
                </button>
            </div>
        </section>
    }
}
