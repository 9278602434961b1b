//! CLI parse tests.

use super::{config_or_default, Cli, CliCommand};
use clap::Parser;
use rsynclog_core::config::{MissingExitCode, RsyncLogConfig};
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_convert_with_paths() {
    match parse(&[
        "rsynclog",
        "convert",
        "--input",
        "/var/log/rsync.log",
        "--output",
        "converted/processed.json",
    ]) {
        CliCommand::Convert {
            input,
            output,
            pretty,
        } => {
            assert_eq!(input, Some(PathBuf::from("/var/log/rsync.log")));
            assert_eq!(output, Some(PathBuf::from("converted/processed.json")));
            assert!(!pretty);
        }
        _ => panic!("expected Convert"),
    }
}

#[test]
fn cli_parse_convert_defaults_to_config() {
    match parse(&["rsynclog", "convert", "--pretty"]) {
        CliCommand::Convert {
            input,
            output,
            pretty,
        } => {
            assert!(input.is_none());
            assert!(output.is_none());
            assert!(pretty);
        }
        _ => panic!("expected Convert"),
    }
}

#[test]
fn cli_parse_inspect() {
    match parse(&["rsynclog", "inspect", "--input", "rsync.log"]) {
        CliCommand::Inspect { input } => assert_eq!(input, Some(PathBuf::from("rsync.log"))),
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_codes() {
    match parse(&["rsynclog", "codes"]) {
        CliCommand::Codes => {}
        _ => panic!("expected Codes"),
    }
}

#[test]
fn cli_rejects_positional_input() {
    assert!(Cli::try_parse_from(["rsynclog", "convert", "rsync.log"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["rsynclog"]).is_err());
}

#[test]
fn config_failure_falls_back_to_defaults() {
    let cfg = config_or_default(Err(anyhow::anyhow!("no home directory")));
    assert!(cfg.input_path.is_none());
    assert!(!cfg.pretty_json);
    assert_eq!(cfg.missing_exit_code, MissingExitCode::Absent);
}

#[test]
fn loaded_config_is_kept() {
    let loaded = RsyncLogConfig {
        pretty_json: true,
        ..Default::default()
    };
    assert!(config_or_default(Ok(loaded)).pretty_json);
}
