#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Session document location, set from command line
static SESSION_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Default session document: `<data dir>/ecoloop/session.json`
fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ecoloop")
        .join("session.json")
}

/// Get the session document path (set from command line or default)
pub fn get_session_file() -> PathBuf {
    SESSION_FILE.get().cloned().unwrap_or_else(default_session_file)
}

/// EcoLoop - Gamified eco-habits
#[derive(Parser, Debug)]
#[command(name = "ecoloop-desktop")]
#[command(about = "EcoLoop - Turn everyday eco-habits into a game")]
struct Args {
    /// JSON session document to start from ({"isLoggedIn", "streak", "coins", "username"})
    #[arg(short, long)]
    session: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 820.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let session_file = args.session.unwrap_or_else(default_session_file);
    let _ = SESSION_FILE.set(session_file.clone());

    tracing::info!(session = ?session_file, "Starting EcoLoop");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("EcoLoop")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
