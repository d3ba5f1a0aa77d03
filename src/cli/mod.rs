//! CLI interface for nba-live-total
//!
//! Provides subcommands for:
//! - `interactive`: Prompt loop (default)
//! - `project`: One-shot projection from flags
//! - `hedge`: One-shot hedge calculation from flags
//! - `config`: Show effective configuration

mod hedge;
mod interactive;
mod project;

pub use hedge::HedgeArgs;
pub use interactive::{InteractiveSession, SessionStats};
pub use project::ProjectArgs;

use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "nba-live-total")]
#[command(about = "Live NBA game total projection and hedge calculator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for game state, project, hedge and save snapshots
    Interactive,
    /// Project the final total once
    Project(ProjectArgs),
    /// Size a hedge against a placed bet
    Hedge(HedgeArgs),
    /// Show effective configuration
    Config,
}

/// Print a result as pretty JSON or as its text report
fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}
