//! Theme for EcoLoop.

mod styles;

pub use styles::GLOBAL_STYLES;
