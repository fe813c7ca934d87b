//! EcoLoop UI Components
//!
//! Dioxus building blocks shared by the EcoLoop header and pages.
//!
//! ## Palette
//!
//! - **Leaf (#16a34a)**: brand, primary actions, active nav
//! - **Flame (#f97316)**: streak
//! - **Coin (#eab308)**: coin balance
//! - **Sky (#2563eb)**: scanner and other AI tools
//! - **Slate (#1e293b)**: body text on the white header

pub mod components;

pub use components::*;
