//! Page components for EcoLoop.

mod dashboard;
mod landing;
mod sections;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use sections::{About, Community, Contact, Leaderboard, NotFound, Profile, Store};
