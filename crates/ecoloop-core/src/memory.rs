//! In-memory collaborators for headless drivers and tests.

use crate::nav::{Navigator, ANONYMOUS_LANDING};
use crate::session::{SessionError, SessionProvider, SessionState};

/// Session held in memory.
///
/// With `fail_terminate` set, `terminate` reports an error and leaves the
/// session untouched, the way a flaky logout endpoint would.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    pub state: Option<SessionState>,
    pub fail_terminate: bool,
    pub terminations: usize,
}

impl MemorySession {
    pub fn new(state: Option<SessionState>) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail_terminate = true;
        self
    }
}

impl SessionProvider for MemorySession {
    fn current(&self) -> Option<SessionState> {
        self.state.clone()
    }

    fn terminate(&mut self) -> Result<(), SessionError> {
        self.terminations += 1;
        if self.fail_terminate {
            return Err(SessionError::TerminationFailed(
                "logout endpoint unreachable".to_string(),
            ));
        }
        self.state = None;
        Ok(())
    }
}

/// Router that records every navigation.
#[derive(Clone, Debug)]
pub struct MemoryRouter {
    pub path: String,
    pub history: Vec<String>,
}

impl MemoryRouter {
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            history: Vec::new(),
        }
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::at(ANONYMOUS_LANDING)
    }
}

impl Navigator for MemoryRouter {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate_to(&mut self, path: &str) {
        self.path = path.to_string();
        self.history.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminate_clears_session() {
        let mut session = MemorySession::new(Some(SessionState::authenticated("ana", 1, 1)));
        assert!(session.terminate().is_ok());
        assert_eq!(session.current(), None);
        assert_eq!(session.terminations, 1);
    }

    #[test]
    fn failing_terminate_keeps_session() {
        let mut session =
            MemorySession::new(Some(SessionState::authenticated("ana", 1, 1))).failing();
        assert!(matches!(
            session.terminate(),
            Err(SessionError::TerminationFailed(_))
        ));
        assert!(session.current().is_some());
    }

    #[test]
    fn router_records_history() {
        let mut router = MemoryRouter::at("/dashboard");
        router.navigate_to("/store");
        router.navigate_to("/");
        assert_eq!(router.current_path(), "/");
        assert_eq!(router.history, ["/store", "/"]);
    }
}
