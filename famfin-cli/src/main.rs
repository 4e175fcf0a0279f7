#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Main entry point for the `FamFin` command-line client.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

mod commands;
mod terminal;

use commands::{
    context::CliContext,
    members::MembersCommand,
    reports::ReportsCommand,
    session::SessionCommand,
};

/// Main CLI structure for `FamFin`
#[derive(Parser)]
#[command(name = "famfin")]
#[command(about = "Command-line client for FamFin family budgets", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (yaml, json or toml)
    #[arg(long, short, global = true, env = "FAMFIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the FamFin API, e.g. `http://localhost:5000/api`
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Directory holding the session file and cookie jar
    #[arg(long, global = true, env = "FAMFIN_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for the `FamFin` CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect, verify or end the signed-in session
    #[command(subcommand)]
    Session(SessionCommand),

    /// Manage the members of the family budget
    #[command(subcommand)]
    Members(MembersCommand),

    /// Show budget reports
    #[command(subcommand)]
    Reports(ReportsCommand),

    /// Generate a configuration file
    Config {
        /// Format of the configuration file to generate (yaml, json or toml). Defaults to yaml.
        #[arg(long, short, default_value = "yaml")]
        format: String,
    },

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(long, short)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let load = || CliContext::load(cli.config, cli.api, cli.state_dir);
    match cli.command {
        Commands::Config { format } => commands::config::generate_config(&format),
        Commands::Completion { shell } => {
            commands::completion::generate_completion(shell);
            Ok(())
        }
        Commands::Session(command) => {
            let ctx = load()?;
            finish(&ctx, commands::session::run(&ctx, command).await)
        }
        Commands::Members(command) => {
            let ctx = load()?;
            finish(&ctx, commands::members::run(&ctx, command).await)
        }
        Commands::Reports(command) => {
            let ctx = load()?;
            finish(&ctx, commands::reports::run(&ctx, command).await)
        }
    }
}

/// Persist the cookie jar whether or not the command succeeded.
fn finish(ctx: &CliContext, result: Result<()>) -> Result<()> {
    ctx.save_cookies()?;
    result
}
