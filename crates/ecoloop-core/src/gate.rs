//! Session gate: anonymous vs authenticated header surface.

use serde::Serialize;

use crate::session::SessionState;

/// Which header surface renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Login call-to-action only
    #[default]
    Anonymous,
    /// Stats, tool icons, profile and logout
    Authenticated,
}

impl RenderMode {
    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Anonymous => "anonymous",
            RenderMode::Authenticated => "authenticated",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, RenderMode::Authenticated)
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pure predicate over session state.
pub struct SessionGate;

impl SessionGate {
    /// Decide the render mode. A missing session is anonymous.
    pub fn render(session: Option<&SessionState>) -> RenderMode {
        match session {
            Some(s) if s.is_logged_in => RenderMode::Authenticated,
            _ => RenderMode::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_session_is_anonymous() {
        assert_eq!(SessionGate::render(None), RenderMode::Anonymous);
    }

    #[test]
    fn logged_out_session_is_anonymous() {
        let session = SessionState {
            streak: 40,
            coins: 900,
            username: "stale".into(),
            ..SessionState::default()
        };
        assert_eq!(SessionGate::render(Some(&session)), RenderMode::Anonymous);
    }

    #[test]
    fn logged_in_session_is_authenticated() {
        let session = SessionState::authenticated("maya", 5, 120);
        assert_eq!(SessionGate::render(Some(&session)), RenderMode::Authenticated);
    }

    #[test]
    fn render_mode_labels() {
        assert_eq!(RenderMode::Anonymous.to_string(), "anonymous");
        assert_eq!(RenderMode::Authenticated.to_string(), "authenticated");
        assert!(!RenderMode::default().is_authenticated());
    }
}
