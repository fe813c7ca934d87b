//! EcoLoop Core Library
//!
//! Session gating and overlay orchestration for the EcoLoop header.
//!
//! ## Overview
//!
//! The header shows engagement metrics (streak, coins) for a signed-in
//! player and hosts three transient overlays: the AI eco-scanner, the
//! challenges list and the streak calendar. This crate owns the decisions
//! behind that surface:
//!
//! - **[`SessionGate`]**: which surface (anonymous or authenticated) renders
//! - **[`OverlayController`]**: which overlay, if any, is visible
//! - **[`HeaderOrchestrator`]**: wires both to the session and navigation
//!   collaborators and projects a [`HeaderView`]
//!
//! Streak and coin accrual, authentication and challenge rules live
//! elsewhere; the core only reads already-computed values.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ecoloop_core::{HeaderOrchestrator, OverlayId, SessionState};
//!
//! let mut header = HeaderOrchestrator::new(session_store, router);
//!
//! header.open(OverlayId::Scanner);
//! header.open(OverlayId::Challenges); // scanner closes
//! assert_eq!(header.current(), OverlayId::Challenges);
//!
//! header.logout(); // overlays cleared, session terminated, back to "/"
//! ```

pub mod command;
pub mod error;
pub mod gate;
pub mod header;
pub mod memory;
pub mod nav;
pub mod overlay;
pub mod session;

// Re-exports
pub use command::HeaderCommand;
pub use error::{EcoError, EcoResult};
pub use gate::{RenderMode, SessionGate};
pub use header::{AuthenticatedSurface, HeaderOrchestrator, HeaderView, NavEntry, OverlayProps};
pub use memory::{MemoryRouter, MemorySession};
pub use nav::{
    is_active, NavItem, Navigator, ANONYMOUS_LANDING, ANONYMOUS_LINKS, AUTHENTICATED_HOME,
    PRIMARY_NAV, PROFILE_PATH, TOOL_LINKS,
};
pub use overlay::{OverlayController, OverlayId};
pub use session::{parse_session, SessionError, SessionProvider, SessionState};
