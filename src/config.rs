//! Dashboard Configuration
//!
//! Read once at start-up from an optional `window.TORRENT_DASHBOARD_CONFIG`
//! object placed in the page before the bundle loads. Missing fields take
//! their defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "TORRENT_DASHBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// API origin; empty means the page's own origin
    pub api_base: String,
    /// Torrents + storage refresh period
    pub refresh_interval_ms: u32,
    /// Folders + files refresh period
    pub listing_refresh_ms: u32,
    pub toast_timeout_ms: u32,
    /// Length of the toast exit animation
    pub toast_exit_ms: u32,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            refresh_interval_ms: 5_000,
            listing_refresh_ms: 30_000,
            toast_timeout_ms: 5_000,
            toast_exit_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Load the page config, falling back to defaults.
pub fn load() -> DashboardConfig {
    let Some(window) = web_sys::window() else {
        return DashboardConfig::default();
    };

    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    let mut config = if raw.is_undefined() || raw.is_null() {
        DashboardConfig::default()
    } else {
        match serde_wasm_bindgen::from_value::<DashboardConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[config] ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                DashboardConfig::default()
            }
        }
    };

    if config.api_base.is_empty() {
        config.api_base = window.location().origin().unwrap_or_default();
    }
    log::debug!("[config] {:?}", config);
    config
}
