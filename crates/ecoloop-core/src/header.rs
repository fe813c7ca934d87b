//! Header orchestration.
//!
//! [`HeaderOrchestrator`] owns the overlay controller and borrows nothing
//! global: the session and navigation collaborators are handed in when it is
//! built. Each render asks it for a [`HeaderView`], a plain projection of the
//! current session, route and overlay.

use serde::Serialize;

use crate::gate::{RenderMode, SessionGate};
use crate::nav::{
    is_active, NavItem, Navigator, ANONYMOUS_LANDING, ANONYMOUS_LINKS, AUTHENTICATED_HOME,
    PRIMARY_NAV, TOOL_LINKS,
};
use crate::overlay::{OverlayController, OverlayId};
use crate::session::{SessionProvider, SessionState};

/// A nav link with its highlight state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    #[serde(flatten)]
    pub item: NavItem,
    pub active: bool,
}

/// Props handed to an overlay surface. The matching `on_close` is
/// [`HeaderOrchestrator::close`] with the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OverlayProps {
    pub id: OverlayId,
    pub is_open: bool,
}

/// What a signed-in player sees on the right of the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthenticatedSurface {
    pub streak: u32,
    pub coins: u64,
    pub username: String,
    pub tools: Vec<NavEntry>,
}

/// One render's worth of header state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub mode: RenderMode,
    pub brand_target: &'static str,
    pub current_path: String,
    pub nav: Vec<NavEntry>,
    /// `None` on the anonymous surface
    pub authenticated: Option<AuthenticatedSurface>,
    /// Empty on the anonymous surface: overlays are not mounted at all
    pub overlays: Vec<OverlayProps>,
}

impl HeaderView {
    pub fn overlay(&self, id: OverlayId) -> Option<&OverlayProps> {
        self.overlays.iter().find(|o| o.id == id)
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.overlay(id).is_some_and(|o| o.is_open)
    }

    /// The overlay that is showing, if any.
    pub fn visible(&self) -> OverlayId {
        self.overlays
            .iter()
            .find(|o| o.is_open)
            .map(|o| o.id)
            .unwrap_or_default()
    }
}

/// Composes the session gate, the overlay controller and the collaborators.
pub struct HeaderOrchestrator<S, N> {
    session: S,
    navigator: N,
    overlays: OverlayController,
}

impl<S, N> HeaderOrchestrator<S, N>
where
    S: SessionProvider,
    N: Navigator,
{
    pub fn new(session: S, navigator: N) -> Self {
        Self {
            session,
            navigator,
            overlays: OverlayController::new(),
        }
    }

    /// Current gate decision, read fresh from the session collaborator.
    pub fn mode(&self) -> RenderMode {
        SessionGate::render(self.session.current().as_ref())
    }

    pub fn current(&self) -> OverlayId {
        self.overlays.current()
    }

    /// Open an overlay. Ignored on the anonymous surface, so a handler that
    /// fires after logout cannot resurrect a panel.
    pub fn open(&mut self, id: OverlayId) {
        if !self.mode().is_authenticated() {
            tracing::debug!(overlay = %id, "Ignoring open while signed out");
            return;
        }
        self.overlays.open(id);
    }

    pub fn close(&mut self, id: OverlayId) {
        self.overlays.close(id);
    }

    pub fn close_all(&mut self) {
        self.overlays.close_all();
    }

    /// Call whenever the session collaborator reports a change.
    pub fn on_session_changed(&mut self) {
        if !self.mode().is_authenticated() {
            self.overlays.close_all();
        }
    }

    /// Call whenever the route changes. Overlays never outlive their page.
    pub fn on_route_changed(&mut self) {
        self.overlays.close_all();
    }

    /// Log out: clear overlays, ask the session to terminate, go to the
    /// landing page. Navigation happens whether or not termination worked.
    pub fn logout(&mut self) {
        self.overlays.close_all();

        if let Err(e) = self.session.terminate() {
            tracing::debug!(error = %e, "Session termination reported failure, continuing logout");
        }

        self.navigator.navigate_to(ANONYMOUS_LANDING);
        tracing::info!(to = ANONYMOUS_LANDING, "Logged out");
    }

    /// Project the header for rendering. Reads the session once and has no
    /// side effects.
    pub fn view(&self) -> HeaderView {
        let session = self.session.current();
        let mode = SessionGate::render(session.as_ref());
        let current_path = self.navigator.current_path();

        match session {
            Some(session) if mode.is_authenticated() => {
                self.authenticated_view(session, current_path)
            }
            _ => HeaderView {
                mode,
                brand_target: ANONYMOUS_LANDING,
                nav: nav_entries(&ANONYMOUS_LINKS, &current_path),
                current_path,
                authenticated: None,
                overlays: Vec::new(),
            },
        }
    }

    fn authenticated_view(&self, session: SessionState, current_path: String) -> HeaderView {
        let overlays = OverlayId::SURFACES
            .iter()
            .map(|&id| OverlayProps {
                id,
                is_open: self.overlays.is_open(id),
            })
            .collect();

        HeaderView {
            mode: RenderMode::Authenticated,
            brand_target: AUTHENTICATED_HOME,
            nav: nav_entries(&PRIMARY_NAV, &current_path),
            authenticated: Some(AuthenticatedSurface {
                streak: session.streak,
                coins: session.coins,
                username: session.username,
                tools: nav_entries(&TOOL_LINKS, &current_path),
            }),
            current_path,
            overlays,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}

fn nav_entries(items: &[NavItem], current_path: &str) -> Vec<NavEntry> {
    items
        .iter()
        .map(|&item| NavEntry {
            item,
            active: is_active(item.path, current_path),
        })
        .collect()
}
