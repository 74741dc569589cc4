//! Polling Scheduler
//!
//! Two independent intervals: a fast one for torrents and storage, a slow one
//! for the folder and file listings. Both stop when the `Poller` is dropped.

use gloo_timers::callback::Interval;

use crate::config::DashboardConfig;

/// Validated refresh periods in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub fast_ms: u32,
    pub slow_ms: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            fast_ms: 5_000,
            slow_ms: 30_000,
        }
    }
}

impl Cadence {
    /// Zero periods fall back to the defaults; the listing period is never
    /// shorter than the fast one.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let defaults = Self::default();
        let fast_ms = if config.refresh_interval_ms == 0 {
            defaults.fast_ms
        } else {
            config.refresh_interval_ms
        };
        let slow_ms = if config.listing_refresh_ms == 0 {
            defaults.slow_ms
        } else {
            config.listing_refresh_ms
        };
        Self {
            fast_ms,
            slow_ms: slow_ms.max(fast_ms),
        }
    }
}

pub struct Poller {
    fast: Option<Interval>,
    slow: Option<Interval>,
}

impl Poller {
    pub fn start<F, S>(cadence: Cadence, on_fast: F, on_slow: S) -> Self
    where
        F: FnMut() + 'static,
        S: FnMut() + 'static,
    {
        log::info!(
            "[poller] refreshing every {} ms, listings every {} ms",
            cadence.fast_ms,
            cadence.slow_ms
        );
        Self {
            fast: Some(Interval::new(cadence.fast_ms, on_fast)),
            slow: Some(Interval::new(cadence.slow_ms, on_slow)),
        }
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.fast.take() {
            interval.cancel();
        }
        if let Some(interval) = self.slow.take() {
            interval.cancel();
        }
        log::info!("[poller] stopped");
    }

    pub fn is_running(&self) -> bool {
        self.fast.is_some() || self.slow.is_some()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if self.is_running() {
            self.stop();
        }
    }
}
