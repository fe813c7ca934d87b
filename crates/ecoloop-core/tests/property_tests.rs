//! Property-based tests for overlay orchestration
//!
//! Uses proptest to drive random command sequences through the overlay
//! controller and the header orchestrator.

use ecoloop_core::{
    HeaderCommand, HeaderOrchestrator, MemoryRouter, MemorySession, OverlayController, OverlayId,
    SessionState,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn surface_strategy() -> impl Strategy<Value = OverlayId> {
    prop_oneof![
        Just(OverlayId::Scanner),
        Just(OverlayId::Challenges),
        Just(OverlayId::StreakCalendar),
    ]
}

/// Operations on the bare controller
#[derive(Debug, Clone)]
enum ControllerOp {
    Open(OverlayId),
    Close(OverlayId),
    CloseAll,
}

fn controller_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ControllerOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => surface_strategy().prop_map(ControllerOp::Open),
            2 => surface_strategy().prop_map(ControllerOp::Close),
            1 => Just(ControllerOp::CloseAll),
        ],
        0..max_ops,
    )
}

fn header_command_strategy() -> impl Strategy<Value = HeaderCommand> {
    prop_oneof![
        4 => surface_strategy().prop_map(HeaderCommand::Open),
        2 => surface_strategy().prop_map(HeaderCommand::Close),
        1 => Just(HeaderCommand::CloseAll),
        1 => prop::sample::select(vec!["/dashboard", "/store", "/about", "/profile"])
            .prop_map(|p| HeaderCommand::Route(p.to_string())),
    ]
}

fn apply(controller: &mut OverlayController, op: &ControllerOp) {
    match op {
        ControllerOp::Open(id) => controller.open(*id),
        ControllerOp::Close(id) => controller.close(*id),
        ControllerOp::CloseAll => controller.close_all(),
    }
}

fn signed_in() -> HeaderOrchestrator<MemorySession, MemoryRouter> {
    HeaderOrchestrator::new(
        MemorySession::new(Some(SessionState::authenticated("maya", 5, 120))),
        MemoryRouter::at("/dashboard"),
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// At most one surface reports open after any sequence
    #[test]
    fn at_most_one_overlay_open(ops in controller_ops_strategy(50)) {
        let mut controller = OverlayController::new();
        for op in &ops {
            apply(&mut controller, op);
            let open = OverlayId::SURFACES
                .iter()
                .filter(|id| controller.is_open(**id))
                .count();
            prop_assert!(open <= 1);
            prop_assert_eq!(open == 1, controller.current() != OverlayId::None);
        }
    }

    /// The controller follows the transition table exactly
    #[test]
    fn controller_matches_transition_table(ops in controller_ops_strategy(50)) {
        let mut controller = OverlayController::new();
        let mut expected = OverlayId::None;

        for op in &ops {
            expected = match op {
                ControllerOp::Open(id) => *id,
                ControllerOp::Close(id) if *id == expected => OverlayId::None,
                ControllerOp::Close(_) => expected,
                ControllerOp::CloseAll => OverlayId::None,
            };
            apply(&mut controller, op);
            prop_assert_eq!(controller.current(), expected);
        }
    }

    /// Opening the same overlay twice equals opening it once
    #[test]
    fn open_is_idempotent(ops in controller_ops_strategy(20), id in surface_strategy()) {
        let mut once = OverlayController::new();
        for op in &ops {
            apply(&mut once, op);
        }
        let mut twice = once.clone();

        once.open(id);
        twice.open(id);
        twice.open(id);

        prop_assert_eq!(once, twice);
    }

    /// A close aimed at a different overlay never changes state
    #[test]
    fn stale_close_is_noop(open in surface_strategy(), other in surface_strategy()) {
        prop_assume!(open != other);
        let mut controller = OverlayController::new();
        controller.open(open);
        controller.close(other);
        prop_assert_eq!(controller.current(), open);
    }

    /// Signed-out headers never show an overlay, whatever is clicked
    #[test]
    fn anonymous_never_opens(commands in prop::collection::vec(header_command_strategy(), 0..30)) {
        let mut header = HeaderOrchestrator::new(
            MemorySession::new(Some(SessionState::anonymous())),
            MemoryRouter::default(),
        );
        for command in &commands {
            header.apply(command);
            prop_assert_eq!(header.current(), OverlayId::None);
            prop_assert!(header.view().overlays.is_empty());
        }
    }

    /// The rendered view agrees with the controller after every command
    #[test]
    fn view_tracks_controller(commands in prop::collection::vec(header_command_strategy(), 0..30)) {
        let mut header = signed_in();
        for command in &commands {
            header.apply(command);
            let view = header.view();
            prop_assert_eq!(view.visible(), header.current());
            prop_assert!(view.overlays.iter().filter(|o| o.is_open).count() <= 1);
        }
    }

    /// Logout always clears overlays and lands on "/"
    #[test]
    fn logout_always_lands_home(
        commands in prop::collection::vec(header_command_strategy(), 0..20),
        fail in any::<bool>(),
    ) {
        let mut session = MemorySession::new(Some(SessionState::authenticated("maya", 5, 120)));
        session.fail_terminate = fail;
        let mut header = HeaderOrchestrator::new(session, MemoryRouter::at("/dashboard"));

        for command in &commands {
            header.apply(command);
        }
        header.logout();

        prop_assert_eq!(header.current(), OverlayId::None);
        prop_assert_eq!(header.navigator().path.as_str(), "/");
        prop_assert_eq!(header.navigator().history.last().map(String::as_str), Some("/"));
    }
}
