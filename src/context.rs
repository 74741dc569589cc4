//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{routes, HttpBackend};
use crate::session::Session;
use crate::store::{DashboardStore, DashboardSurface};

pub type DashboardSession = Session<HttpBackend, DashboardSurface>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: DashboardStore,
    pub surface: DashboardSurface,
    /// The session is not `Send`, so it stays in local storage
    session: StoredValue<Rc<DashboardSession>, LocalStorage>,
    api_base: StoredValue<String>,
}

impl AppContext {
    pub fn new(surface: DashboardSurface, session: DashboardSession, api_base: String) -> Self {
        Self {
            store: surface.store,
            surface,
            session: StoredValue::new_local(Rc::new(session)),
            api_base: StoredValue::new(api_base),
        }
    }

    pub fn session(&self) -> Rc<DashboardSession> {
        self.session.get_value()
    }

    /// Run a session action on the browser event loop.
    pub fn dispatch<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<DashboardSession>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let session = self.session();
        spawn_local(async move { action(session).await });
    }

    /// Absolute link for a single-file download, used as a plain `href`.
    pub fn download_url(&self, path: &str) -> String {
        self.api_base
            .with_value(|base| format!("{}{}", base, routes::download_file(path)))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
