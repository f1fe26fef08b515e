//! Merge codes from another rewards file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use reward_store::{FileRewardRepository, RewardRepository, RewardStore};

use crate::config::CliConfig;

/// Merge codes from another rewards file
#[derive(Parser, Debug)]
pub struct Import {
    /// JSON file with new reward records
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

impl Import {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let stdout = io::stdout();
        self.run(config, &mut stdout.lock())
    }

    fn run(self, config: &CliConfig, output: &mut impl Write) -> Result<()> {
        let incoming = FileRewardRepository::new(&self.source)
            .load()
            .with_context(|| format!("Failed to read import file: {}", self.source.display()))?
            .with_context(|| format!("Import file not found: {}", self.source.display()))?;

        let mut store = RewardStore::open_or_empty(FileRewardRepository::new(&config.rewards_file))
            .with_context(|| {
                format!(
                    "Failed to open rewards file: {}",
                    config.rewards_file.display()
                )
            })?;

        let added = store.import(incoming)?;

        writeln!(
            output,
            "{} Just saved {} new rewards.",
            style("✓").green(),
            added
        )?;
        Ok(())
    }
}
