//! Command implementations
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod claim;
mod import;
mod list;

pub use claim::{ClaimMany, ClaimOne};
pub use import::Import;
pub use list::List;

use std::io::Write;

use anyhow::{Context, Result};
use reward_store::{FileRewardRepository, RewardStore};

use crate::config::CliConfig;
use crate::table;

/// Open the configured rewards file, failing when it does not exist.
fn open_store(config: &CliConfig) -> Result<RewardStore<FileRewardRepository>> {
    RewardStore::open(FileRewardRepository::new(&config.rewards_file)).with_context(|| {
        format!(
            "Failed to open rewards file: {}",
            config.rewards_file.display()
        )
    })
}

/// Print the reward-type table.
fn print_table(output: &mut impl Write, store: &RewardStore<FileRewardRepository>) -> Result<()> {
    writeln!(output, "{}", table::render(&store.list_types()))?;
    Ok(())
}
