//! Header scenario tests
//!
//! Walks the header through the flows a player actually performs, using
//! the in-memory session and router.

use ecoloop_core::{
    parse_session, HeaderCommand, HeaderOrchestrator, MemoryRouter, MemorySession, OverlayId,
    RenderMode, SessionGate, SessionState,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn header_for(
    session: Option<SessionState>,
    path: &str,
) -> HeaderOrchestrator<MemorySession, MemoryRouter> {
    HeaderOrchestrator::new(MemorySession::new(session), MemoryRouter::at(path))
}

fn run(header: &mut HeaderOrchestrator<MemorySession, MemoryRouter>, script: &[&str]) {
    for raw in script {
        let command: HeaderCommand = raw.parse().expect("valid command");
        header.apply(&command);
    }
}

// ============================================================================
// Cold start
// ============================================================================

#[test]
fn test_cold_start_is_anonymous() {
    let header = header_for(Some(SessionState::anonymous()), "/");
    let view = header.view();

    assert_eq!(view.mode, RenderMode::Anonymous);
    assert!(view.authenticated.is_none());
    assert!(view.overlays.is_empty());
    assert_eq!(header.current(), OverlayId::None);

    let labels: Vec<_> = view.nav.iter().map(|e| e.item.label).collect();
    assert_eq!(labels, ["About", "Contact", "Login"]);
    assert!(view.nav[2].active, "login link is highlighted on the landing page");
}

#[test]
fn test_missing_session_fails_closed() {
    let session = parse_session(Some("{\"isLoggedIn\": tru"));
    assert_eq!(SessionGate::render(session.as_ref()), RenderMode::Anonymous);

    let mut header = header_for(session, "/");
    run(&mut header, &["open:scanner", "open:streak"]);
    assert_eq!(header.current(), OverlayId::None);
}

// ============================================================================
// Authenticated session
// ============================================================================

#[test]
fn test_authenticated_session_shows_metrics() {
    let session = parse_session(Some(
        r#"{"isLoggedIn": true, "streak": 5, "coins": 120, "username": "maya"}"#,
    ));
    let header = header_for(session, "/dashboard");
    let view = header.view();

    assert_eq!(view.mode, RenderMode::Authenticated);
    let surface = view.authenticated.expect("stats surface");
    assert_eq!(surface.streak, 5);
    assert_eq!(surface.coins, 120);
    assert_eq!(header.current(), OverlayId::None);

    let tools: Vec<_> = surface.tools.iter().map(|e| e.item.path).collect();
    assert_eq!(tools, ["/leaderboard", "/store", "/profile"]);
}

#[test]
fn test_switching_overlays_keeps_one_open() {
    let mut header = header_for(Some(SessionState::authenticated("maya", 5, 120)), "/dashboard");

    run(&mut header, &["open:scanner", "open:challenges"]);
    let view = header.view();
    assert_eq!(header.current(), OverlayId::Challenges);
    assert!(!view.is_open(OverlayId::Scanner));
    assert!(view.is_open(OverlayId::Challenges));
    assert!(!view.is_open(OverlayId::StreakCalendar));
}

#[test]
fn test_late_close_from_previous_overlay_is_ignored() {
    let mut header = header_for(Some(SessionState::authenticated("maya", 5, 120)), "/dashboard");

    // Scanner was replaced by the calendar; its close handler fires late.
    run(&mut header, &["open:scanner", "open:streak", "close:scanner"]);
    assert_eq!(header.current(), OverlayId::StreakCalendar);

    run(&mut header, &["close:streak"]);
    assert_eq!(header.current(), OverlayId::None);
}

#[test]
fn test_route_change_closes_overlay() {
    let mut header = header_for(Some(SessionState::authenticated("maya", 5, 120)), "/dashboard");

    run(&mut header, &["open:challenges", "route:/leaderboard"]);
    let view = header.view();
    assert_eq!(header.current(), OverlayId::None);
    assert_eq!(view.current_path, "/leaderboard");

    let surface = view.authenticated.expect("stats surface");
    let active: Vec<_> = surface.tools.iter().filter(|e| e.active).map(|e| e.item.label).collect();
    assert_eq!(active, ["Leaderboard"]);
}

// ============================================================================
// Logout
// ============================================================================

#[test]
fn test_logout_from_calendar() {
    let mut header = header_for(Some(SessionState::authenticated("maya", 5, 120)), "/dashboard");

    run(&mut header, &["open:streak-calendar", "logout"]);

    assert_eq!(header.current(), OverlayId::None);
    assert_eq!(header.navigator().history, ["/"]);
    assert_eq!(header.session().terminations, 1);
    assert_eq!(header.view().mode, RenderMode::Anonymous);
}

#[test]
fn test_logout_with_failing_termination_still_navigates() {
    let session = MemorySession::new(Some(SessionState::authenticated("maya", 5, 120))).failing();
    let mut header = HeaderOrchestrator::new(session, MemoryRouter::at("/store"));

    run(&mut header, &["open:streak-calendar", "logout"]);

    assert_eq!(header.current(), OverlayId::None);
    assert_eq!(header.navigator().path, "/");
    assert_eq!(header.session().terminations, 1);
}

#[test]
fn test_clicks_after_logout_are_ignored() {
    let mut header = header_for(Some(SessionState::authenticated("maya", 5, 120)), "/dashboard");

    run(&mut header, &["logout", "open:scanner", "open:challenges"]);
    assert_eq!(header.current(), OverlayId::None);
    assert!(header.view().overlays.is_empty());
}
