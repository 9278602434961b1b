//! `rsynclog convert` – log file to JSON file.

use anyhow::{Context, Result};
use rsynclog_core::config::RsyncLogConfig;
use rsynclog_core::convert::{self, ConvertOptions};
use std::path::PathBuf;

pub fn run_convert(
    cfg: &RsyncLogConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let opts = ConvertOptions::resolve(cfg, input, output, pretty)?;
    let summary = convert::convert(&opts)
        .with_context(|| format!("convert {}", opts.input.display()))?;
    println!(
        "Wrote {} job(s) to {}",
        summary.jobs,
        summary.output.display()
    );
    if summary.dropped > 0 {
        println!(
            "  ({} unterminated job(s) skipped; see log for line numbers)",
            summary.dropped
        );
    }
    Ok(())
}
