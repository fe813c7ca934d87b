//! Session state and the session collaborator seam.
//!
//! The session is owned by whatever signs the player in. The header only
//! reads it once per render and delegates logout through
//! [`SessionProvider::terminate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication state and per-player metrics, as computed upstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub streak: u32,
    pub coins: u64,
    pub username: String,
}

impl SessionState {
    /// A signed-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in session with the given metrics.
    pub fn authenticated(username: impl Into<String>, streak: u32, coins: u64) -> Self {
        Self {
            is_logged_in: true,
            streak,
            coins,
            username: username.into(),
        }
    }
}

/// Failure reported by the session collaborator while logging out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session termination failed: {0}")]
    TerminationFailed(String),

    #[error("Session backend unavailable")]
    Unavailable,
}

/// The external owner of [`SessionState`].
///
/// Implementations decide how the session is stored and how logout is
/// carried out; errors from `terminate` are theirs to report.
pub trait SessionProvider {
    /// Current session, or `None` when nothing is known about the player.
    fn current(&self) -> Option<SessionState>;

    /// End the session.
    fn terminate(&mut self) -> Result<(), SessionError>;
}

/// Parse a JSON session document.
///
/// Absent, empty, or malformed input yields `None`, which the gate treats as
/// anonymous.
pub fn parse_session(raw: Option<&str>) -> Option<SessionState> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    match serde_json::from_str::<SessionState>(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed session document");
            None
        }
    }
}
