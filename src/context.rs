//! Session and navigation context for EcoLoop.
//!
//! The session lives in a signal provided by `App`. The header reaches it,
//! and the router, through two small adapters that implement the core's
//! collaborator traits, so the orchestrator never touches Dioxus context
//! itself.
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_session();
//! let header = HeaderOrchestrator::new(
//!     SignalSession::new(session),
//!     RouterNavigator::new(use_navigator(), current_path),
//! );
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use ecoloop_core::{parse_session, SessionError, SessionProvider, SessionState};

use crate::app::{route_for, Route};

/// Get the session document path.
pub fn get_session_file() -> PathBuf {
    crate::get_session_file()
}

/// Read the session document the app was started with.
///
/// A missing or unreadable file means nobody is signed in yet.
pub fn load_initial_session() -> Option<SessionState> {
    let path = get_session_file();
    match std::fs::read_to_string(&path) {
        Ok(raw) => parse_session(Some(&raw)),
        Err(e) => {
            tracing::debug!(path = ?path, error = %e, "No session document, starting signed out");
            None
        }
    }
}

/// Session used by the landing page's login button.
pub fn demo_session() -> SessionState {
    SessionState::authenticated("eco-explorer", 3, 50)
}

/// Hook to access the session store from context.
pub fn use_session() -> Signal<Option<SessionState>> {
    use_context::<Signal<Option<SessionState>>>()
}

/// Session collaborator backed by the app's session signal.
#[derive(Clone, Copy)]
pub struct SignalSession {
    store: Signal<Option<SessionState>>,
}

impl SignalSession {
    pub fn new(store: Signal<Option<SessionState>>) -> Self {
        Self { store }
    }
}

impl SessionProvider for SignalSession {
    fn current(&self) -> Option<SessionState> {
        self.store.read().clone()
    }

    fn terminate(&mut self) -> Result<(), SessionError> {
        let mut guard = self
            .store
            .try_write()
            .map_err(|_| SessionError::Unavailable)?;
        *guard = None;
        Ok(())
    }
}

/// Navigation collaborator backed by the Dioxus router.
///
/// `path` mirrors the active route; the header keeps it in sync.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
    path: Signal<String>,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator, path: Signal<String>) -> Self {
        Self { navigator, path }
    }
}

impl ecoloop_core::Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        self.path.read().clone()
    }

    fn navigate_to(&mut self, path: &str) {
        let route: Route = route_for(path);
        self.path.set(route.to_string());
        self.navigator.push(route);
    }
}
