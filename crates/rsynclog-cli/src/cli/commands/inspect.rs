//! `rsynclog inspect` – print parsed jobs as a table.

use anyhow::Result;
use rsynclog_core::config::RsyncLogConfig;
use rsynclog_core::convert;
use rsynclog_core::RsyncLogError;
use std::path::PathBuf;

pub fn run_inspect(cfg: &RsyncLogConfig, input: Option<PathBuf>) -> Result<()> {
    let input = input
        .or_else(|| cfg.input_path.clone())
        .ok_or(RsyncLogError::MissingPath("input"))?;
    let source = convert::resolve_source(cfg);
    let parsed = convert::parse_log_file(&input, &source, cfg.missing_exit_code)?;

    if parsed.records.is_empty() {
        println!("No jobs in {}.", input.display());
    } else {
        println!(
            "{:<34} {:<6} {:<8} {:<14} {}",
            "BEGIN", "EXIT", "FILES", "SENT", "DESTINATION"
        );
        for r in &parsed.records {
            let exit = r
                .exit_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<34} {:<6} {:<8} {:<14} {}",
                r.begin, exit, r.total_files, r.total_xfer, r.destination
            );
        }
    }
    for frag in &parsed.dropped {
        println!("skipped unterminated job at line {}: {}", frag.line, frag.text);
    }
    Ok(())
}
