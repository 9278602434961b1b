//! Job record produced for each job block of a log.

use serde::{Deserialize, Serialize};

/// How to fill `exit_code` / `exit_message` when a job block never logs an exit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingExitCode {
    /// Leave both fields `null`, so "no exit line" is distinguishable from code 1.
    #[default]
    Absent,
    /// Historical output: `exit_code = 1` with an empty message.
    Legacy,
}

/// One parsed transfer job. Field order is the JSON field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub begin: String,
    pub end: String,
    pub source: String,
    pub destination: String,
    pub exit_code: Option<i32>,
    pub exit_message: Option<String>,
    pub total_files: u64,
    pub files: u64,
    pub directories: u64,
    pub deleted: u64,
    pub total_xfer: u64,
    pub xfer_speed: f64,
}

impl JobRecord {
    /// Record with every field at its default, before any line has been scanned.
    pub fn new(source: &str, missing_exit: MissingExitCode) -> Self {
        let (exit_code, exit_message) = match missing_exit {
            MissingExitCode::Absent => (None, None),
            MissingExitCode::Legacy => (Some(1), Some(String::new())),
        };
        Self {
            begin: String::new(),
            end: String::new(),
            source: source.to_string(),
            destination: String::new(),
            exit_code,
            exit_message,
            total_files: 0,
            files: 0,
            directories: 0,
            deleted: 0,
            total_xfer: 0,
            xfer_speed: 0.0,
        }
    }
}
