//! Overlay state machine.
//!
//! The header hosts three transient panels. Only one may be visible, so the
//! controller tracks a single [`OverlayId`] instead of a flag per panel.
//!
//! ```text
//!            open(X)                 close(X) / close_all()
//!   None ───────────────▶ X ──────────────────────────▶ None
//!                         │ open(Y)
//!                         ▼
//!                         Y          close(X) from Y: unchanged
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::EcoError;

/// Identifier of the visible overlay, `None` when the header is clear.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayId {
    #[default]
    None,
    Scanner,
    Challenges,
    StreakCalendar,
}

impl OverlayId {
    /// The overlays that actually render a surface.
    pub const SURFACES: [OverlayId; 3] = [
        OverlayId::Scanner,
        OverlayId::Challenges,
        OverlayId::StreakCalendar,
    ];

    /// Stable kebab-case name, used on the command line and in logs.
    pub fn slug(&self) -> &'static str {
        match self {
            OverlayId::None => "none",
            OverlayId::Scanner => "scanner",
            OverlayId::Challenges => "challenges",
            OverlayId::StreakCalendar => "streak-calendar",
        }
    }

    /// Human-readable title for the surface.
    pub fn title(&self) -> &'static str {
        match self {
            OverlayId::None => "",
            OverlayId::Scanner => "AI Eco-Scanner",
            OverlayId::Challenges => "Challenges",
            OverlayId::StreakCalendar => "Streak Calendar",
        }
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for OverlayId {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(OverlayId::None),
            "scanner" => Ok(OverlayId::Scanner),
            "challenges" => Ok(OverlayId::Challenges),
            "streak-calendar" | "streak" | "calendar" => Ok(OverlayId::StreakCalendar),
            other => Err(EcoError::UnknownOverlay(other.to_string())),
        }
    }
}

/// Owner of the current overlay.
///
/// Created with `None` when the header mounts and dropped with it. The
/// field is private; every change goes through `open`, `close` or
/// `close_all`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayController {
    current: OverlayId,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the visible overlay, closing whatever was open.
    pub fn open(&mut self, id: OverlayId) {
        if self.current == id {
            return;
        }
        tracing::debug!(from = %self.current, to = %id, "Opening overlay");
        self.current = id;
    }

    /// Close `id` if it is the visible overlay.
    ///
    /// A close for an overlay that is no longer current is ignored so a late
    /// handler cannot dismiss a different panel.
    pub fn close(&mut self, id: OverlayId) {
        if self.current != id {
            tracing::debug!(requested = %id, current = %self.current, "Ignoring stale close");
            return;
        }
        tracing::debug!(overlay = %id, "Closing overlay");
        self.current = OverlayId::None;
    }

    /// Clear any visible overlay.
    pub fn close_all(&mut self) {
        if self.current != OverlayId::None {
            tracing::debug!(overlay = %self.current, "Closing all overlays");
        }
        self.current = OverlayId::None;
    }

    pub fn current(&self) -> OverlayId {
        self.current
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        id != OverlayId::None && self.current == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let controller = OverlayController::new();
        assert_eq!(controller.current(), OverlayId::None);
        for id in OverlayId::SURFACES {
            assert!(!controller.is_open(id));
        }
    }

    #[test]
    fn open_is_idempotent() {
        let mut once = OverlayController::new();
        once.open(OverlayId::Scanner);

        let mut twice = OverlayController::new();
        twice.open(OverlayId::Scanner);
        twice.open(OverlayId::Scanner);

        assert_eq!(once, twice);
        assert_eq!(twice.current(), OverlayId::Scanner);
    }

    #[test]
    fn open_replaces_other_overlay() {
        let mut controller = OverlayController::new();
        controller.open(OverlayId::Scanner);
        controller.open(OverlayId::Challenges);

        assert_eq!(controller.current(), OverlayId::Challenges);
        assert!(!controller.is_open(OverlayId::Scanner));
        assert!(controller.is_open(OverlayId::Challenges));
    }

    #[test]
    fn close_ignores_stale_target() {
        let mut controller = OverlayController::new();
        controller.open(OverlayId::Scanner);
        controller.close(OverlayId::Challenges);
        assert_eq!(controller.current(), OverlayId::Scanner);

        controller.close(OverlayId::Scanner);
        assert_eq!(controller.current(), OverlayId::None);
    }

    #[test]
    fn close_all_from_any_state() {
        for id in OverlayId::SURFACES {
            let mut controller = OverlayController::new();
            controller.open(id);
            controller.close_all();
            assert_eq!(controller.current(), OverlayId::None);
        }

        let mut controller = OverlayController::new();
        controller.close_all();
        assert_eq!(controller.current(), OverlayId::None);
    }

    #[test]
    fn none_is_never_reported_open() {
        let mut controller = OverlayController::new();
        controller.open(OverlayId::None);
        assert!(!controller.is_open(OverlayId::None));
    }

    #[test]
    fn parse_overlay_names() {
        assert_eq!("scanner".parse::<OverlayId>().unwrap(), OverlayId::Scanner);
        assert_eq!("Challenges".parse::<OverlayId>().unwrap(), OverlayId::Challenges);
        assert_eq!("streak".parse::<OverlayId>().unwrap(), OverlayId::StreakCalendar);
        assert_eq!("calendar".parse::<OverlayId>().unwrap(), OverlayId::StreakCalendar);
        assert_eq!(
            "streak-calendar".parse::<OverlayId>().unwrap(),
            OverlayId::StreakCalendar
        );
        assert_eq!("none".parse::<OverlayId>().unwrap(), OverlayId::None);
        assert!(matches!(
            "radar".parse::<OverlayId>(),
            Err(EcoError::UnknownOverlay(name)) if name == "radar"
        ));
    }

    #[test]
    fn slug_roundtrips_through_parse() {
        for id in OverlayId::SURFACES {
            assert_eq!(id.slug().parse::<OverlayId>().unwrap(), id);
        }
    }
}
