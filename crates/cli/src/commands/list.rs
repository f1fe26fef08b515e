//! List reward types and remaining codes.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use console::style;

use super::{open_store, print_table};
use crate::config::CliConfig;

/// Show reward types and how many codes are left
#[derive(Parser, Debug)]
pub struct List {
    /// Rewrite the rewards file in canonical format
    #[arg(long)]
    pub normalize: bool,
}

impl List {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let stdout = io::stdout();
        self.run(config, &mut stdout.lock())
    }

    fn run(self, config: &CliConfig, output: &mut impl Write) -> Result<()> {
        let store = open_store(config)?;

        print_table(output, &store)?;

        if self.normalize {
            store.persist()?;
            writeln!(
                output,
                "{} {}",
                style("Rewrote").dim(),
                config.rewards_file.display()
            )?;
        }

        Ok(())
    }
}
