//! UI Components for EcoLoop.

mod challenges_modal;
mod game_map;
mod header;
pub mod icons;
mod scanner_modal;
mod streak_calendar;

pub use challenges_modal::ChallengesModal;
pub use game_map::GameMap;
pub use header::Header;
pub use scanner_modal::ScannerModal;
pub use streak_calendar::StreakCalendar;
