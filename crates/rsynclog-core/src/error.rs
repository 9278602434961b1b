//! Library error type for log conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, parsing, or writing an rsync log conversion.
///
/// Read and write failures are fatal for a run. `UnknownExitCode` is only ever
/// surfaced by [`crate::exit_codes::ExitCodeTable::lookup`]; the extractor
/// contains it to the affected job.
#[derive(Error, Debug)]
pub enum RsyncLogError {
    #[error("failed to read log {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Exit code not present in the reference table.
    #[error("unknown rsync exit code {0}")]
    UnknownExitCode(i32),

    /// A built-in line pattern failed to compile.
    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Neither the command line nor the config file supplied a path.
    #[error("no {0} path given (pass it on the command line or set it in config.toml)")]
    MissingPath(&'static str),
}

pub type Result<T> = std::result::Result<T, RsyncLogError>;
