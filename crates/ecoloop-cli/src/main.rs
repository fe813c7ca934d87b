//! EcoLoop CLI
//!
//! Drives the header orchestrator without a renderer. Useful for checking
//! what a given session would see and for replaying click sequences.
//!
//! ## Usage
//!
//! ```bash
//! # Which surface does this session get?
//! ecoloop gate --session session.json
//!
//! # Full header projection for a signed-in player on /store
//! ecoloop render --user maya --streak 5 --coins 120 --path /store
//!
//! # Replay clicks, then log out with a failing logout endpoint
//! ecoloop replay --user maya --fail-terminate open:scanner open:challenges logout
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ecoloop_core::{
    parse_session, HeaderCommand, HeaderOrchestrator, HeaderView, MemoryRouter, MemorySession,
    NavEntry, OverlayId, RenderMode, SessionGate, SessionState,
};
use serde::Serialize;

/// EcoLoop - header orchestration from the command line
#[derive(Parser)]
#[command(name = "ecoloop")]
#[command(version = "0.1.0")]
#[command(about = "EcoLoop - drive the header headlessly")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the render mode for a session
    Gate {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Print the header view for a session and route
    Render {
        #[command(flatten)]
        session: SessionArgs,

        /// Current route
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Apply header commands and print the final state
    Replay {
        #[command(flatten)]
        session: SessionArgs,

        /// Starting route
        #[arg(short, long, default_value = "/dashboard")]
        path: String,

        /// Make session termination fail during logout
        #[arg(long)]
        fail_terminate: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Commands: open:<overlay>, close:<overlay>, close-all, route:<path>, logout
        #[arg(required = true)]
        commands: Vec<String>,
    },
}

/// Where the session comes from
#[derive(Args)]
struct SessionArgs {
    /// JSON session document ({"isLoggedIn", "streak", "coins", "username"})
    #[arg(short, long, conflicts_with = "user")]
    session: Option<PathBuf>,

    /// Signed-in username (builds a session inline)
    #[arg(short, long)]
    user: Option<String>,

    /// Streak for --user
    #[arg(long, default_value_t = 0, requires = "user")]
    streak: u32,

    /// Coins for --user
    #[arg(long, default_value_t = 0, requires = "user")]
    coins: u64,
}

impl SessionArgs {
    /// Resolve to a session. Unreadable or malformed documents are treated
    /// as no session at all.
    fn load(&self) -> Option<SessionState> {
        if let Some(user) = &self.user {
            return Some(SessionState::authenticated(user.clone(), self.streak, self.coins));
        }

        let path = self.session.as_ref()?;
        match std::fs::read_to_string(path) {
            Ok(raw) => parse_session(Some(&raw)),
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Could not read session document");
                None
            }
        }
    }
}

/// Final state after a replay
#[derive(Serialize)]
struct ReplayReport {
    overlay: OverlayId,
    mode: RenderMode,
    path: String,
    navigations: Vec<String>,
    terminations: usize,
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn print_entries(entries: &[NavEntry]) {
    for entry in entries {
        let marker = if entry.active { "*" } else { " " };
        println!("  {} {} ({})", marker, entry.item.label, entry.item.path);
    }
}

fn print_view(view: &HeaderView) {
    println!("Mode: {}", view.mode);
    println!("Brand: {}", view.brand_target);
    println!("Path: {}", view.current_path);
    println!();
    println!("Nav:");
    print_entries(&view.nav);

    if let Some(surface) = &view.authenticated {
        println!();
        println!("Stats:");
        println!("  Streak: {}", surface.streak);
        println!("  Coins: {}", surface.coins);
        println!("  User: {}", surface.username);
        println!();
        println!("Tools:");
        print_entries(&surface.tools);
        println!();
        println!("Overlays:");
        for overlay in &view.overlays {
            let state = if overlay.is_open { "open" } else { "closed" };
            println!("  {}: {}", overlay.id, state);
        }
    }
}

fn print_report(report: &ReplayReport) {
    println!("Overlay: {}", report.overlay);
    println!("Mode: {}", report.mode);
    println!("Path: {}", report.path);
    if report.navigations.is_empty() {
        println!("Navigations: (none)");
    } else {
        println!("Navigations: {}", report.navigations.join(" -> "));
    }
    println!("Terminations: {}", report.terminations);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Gate { session } => {
            let state = session.load();
            println!("{}", SessionGate::render(state.as_ref()));
        }

        Commands::Render {
            session,
            path,
            json,
        } => {
            let header = HeaderOrchestrator::new(
                MemorySession::new(session.load()),
                MemoryRouter::at(path),
            );
            let view = header.view();

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }

        Commands::Replay {
            session,
            path,
            fail_terminate,
            json,
            commands,
        } => {
            let commands = commands
                .iter()
                .map(|raw| {
                    raw.parse::<HeaderCommand>()
                        .with_context(|| format!("Failed to parse command '{}'", raw))
                })
                .collect::<Result<Vec<_>>>()?;

            let mut memory = MemorySession::new(session.load());
            memory.fail_terminate = fail_terminate;
            let mut header = HeaderOrchestrator::new(memory, MemoryRouter::at(path));

            for command in &commands {
                tracing::info!(command = %command, "Applying");
                header.apply(command);
            }

            let report = ReplayReport {
                overlay: header.current(),
                mode: header.mode(),
                path: header.navigator().path.clone(),
                navigations: header.navigator().history.clone(),
                terminations: header.session().terminations,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}
