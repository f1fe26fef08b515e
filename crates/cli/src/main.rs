//! Reward code claiming tool.
//!
//! Hands out codes from a shared rewards file, one or many at a time.
//!
//! # Examples
//!
//! ```bash
//! # Pick a reward type interactively and claim one code
//! rewards claim
//!
//! # Claim three codes of reward type 1 from a specific file
//! rewards --file ./rewards.json claim-many --id 1 --count 3
//! ```

mod commands;
mod config;
mod dirs;
mod logging;
mod prompt;
mod table;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{ClaimMany, ClaimOne, Import, List};
use config::CliConfig;
use reward_store::RewardError;

/// Claim reward codes from a shared pool
#[derive(Parser)]
#[command(name = "rewards")]
#[command(about = "Claim reward codes from a shared pool", long_about = None)]
#[command(version)]
struct Cli {
    /// Rewards file to use (overrides REWARDS_FILE)
    #[arg(short, long, global = true, value_name = "FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Claim a single code
    #[command(alias = "claim-one")]
    Claim(ClaimOne),

    /// Claim several codes of the same reward type
    ClaimMany(ClaimMany),

    /// Show reward types and how many codes are left
    List(List),

    /// Merge codes from another rewards file
    Import(Import),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for REWARDS_FILE and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = CliConfig::from_env().with_rewards_file(cli.file);
    let _guard = logging::setup_logging(&config)?;

    tracing::debug!("Using rewards file {}", config.rewards_file.display());

    let result = match cli.command {
        Command::Claim(cmd) => cmd.execute(&config),
        Command::ClaimMany(cmd) => cmd.execute(&config),
        Command::List(cmd) => cmd.execute(&config),
        Command::Import(cmd) => cmd.execute(&config),
    };

    if let Err(err) = &result
        && let Some(reward_err) = err.downcast_ref::<RewardError>()
        && reward_err.severity().is_internal()
    {
        tracing::error!("Internal error, this is a bug: {}", reward_err);
    }

    result
}
