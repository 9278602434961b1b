//! CLI for the rsynclog converter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rsynclog_core::config::{self, RsyncLogConfig};
use std::path::PathBuf;

use commands::{run_codes, run_convert, run_inspect};

/// Top-level CLI for rsynclog.
#[derive(Debug, Parser)]
#[command(name = "rsynclog")]
#[command(about = "rsynclog: convert rsync transfer logs into JSON job records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a log and write its jobs as a JSON array.
    Convert {
        /// rsync log to read (falls back to `input_path` in config.toml).
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// JSON file to write; its directory is created if missing.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Parse a log and print one line per job without writing JSON.
    Inspect {
        /// rsync log to read (falls back to `input_path` in config.toml).
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
    },

    /// Print the rsync exit code table.
    Codes,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config_or_default(config::load_or_init());
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert {
                input,
                output,
                pretty,
            } => run_convert(&cfg, input, output, pretty)?,
            CliCommand::Inspect { input } => run_inspect(&cfg, input)?,
            CliCommand::Codes => run_codes(),
        }

        Ok(())
    }
}

/// Command-line paths are enough to run, so an unreadable config only warns.
fn config_or_default(loaded: Result<RsyncLogConfig>) -> RsyncLogConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("config unavailable, using defaults: {:#}", err);
        RsyncLogConfig::default()
    })
}

#[cfg(test)]
mod tests;
