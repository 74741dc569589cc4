//! Torrent Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod file_kind;
mod format;
mod logging;
mod models;
mod poller;
mod selection;
mod session;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // default level until the page config says otherwise
    logging::init(log::LevelFilter::Info);
    let config = config::load();
    logging::init(config.level_filter());
    log::info!("[main] dashboard starting against {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
