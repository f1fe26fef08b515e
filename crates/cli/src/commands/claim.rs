//! Claim-one and claim-many commands.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use super::{open_store, print_table};
use crate::config::CliConfig;
use crate::prompt;

/// Claim a single code
#[derive(Parser, Debug)]
pub struct ClaimOne {
    /// Reward type id (prompted for when omitted)
    #[arg(long, value_name = "ID")]
    pub id: Option<usize>,
}

impl ClaimOne {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(config, &mut stdin.lock(), &mut stdout.lock())
    }

    fn run(
        self,
        config: &CliConfig,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        let mut store = open_store(config)?;

        writeln!(output, "These codes are available:")?;
        print_table(output, &store)?;
        writeln!(output, "what code do you want?")?;

        let id = match self.id {
            Some(id) => id,
            None => prompt::read_value(input, output, "id")?,
        };

        let code = store
            .claim_by_type_id(id, 1)?
            .into_iter()
            .next()
            .context("No code was claimed")?;

        writeln!(output, "{} {}", style("Your code:").green().bold(), code)?;
        Ok(())
    }
}

/// Claim several codes of the same reward type
#[derive(Parser, Debug)]
pub struct ClaimMany {
    /// Reward type id (prompted for when omitted)
    #[arg(long, value_name = "ID")]
    pub id: Option<usize>,

    /// Number of codes to claim (prompted for when omitted)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,
}

impl ClaimMany {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(config, &mut stdin.lock(), &mut stdout.lock())
    }

    fn run(
        self,
        config: &CliConfig,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        let mut store = open_store(config)?;

        writeln!(output, "These codes are available:")?;
        print_table(output, &store)?;
        writeln!(output, "what codes do you want?")?;

        let id = match self.id {
            Some(id) => id,
            None => prompt::read_value(input, output, "id")?,
        };
        let count = match self.count {
            Some(count) => count,
            None => prompt::read_value(input, output, "count")?,
        };

        let codes = store.claim_by_type_id(id, count)?;

        writeln!(output, "{}", style("Your codes:").green().bold())?;
        for code in codes {
            writeln!(output, "{}", code)?;
        }
        Ok(())
    }
}
