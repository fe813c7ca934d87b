//! Reusable UI components
//!
//! Rounded, light surfaces with the leaf-green accent. Class names match
//! the global stylesheet shipped by the desktop app.

mod button;
mod overlay_frame;
mod stat_badge;

pub use button::*;
pub use overlay_frame::*;
pub use stat_badge::*;
