//! rsync exit code reference table (from the rsync(1) man page).

use std::collections::BTreeMap;

use crate::error::{Result, RsyncLogError};

/// Message recorded for a job whose exit code is missing from the table.
pub const UNKNOWN_EXIT_MESSAGE: &str = "Unknown exit code";

const RSYNC_EXIT_CODES: &[(i32, &str)] = &[
    (0, "Success"),
    (1, "Syntax or usage error"),
    (2, "Protocol incompatibility"),
    (3, "Errors selecting input/output files, dirs"),
    (4, "Requested  action not supported"),
    (5, "Error starting client-server protocol"),
    (6, "Daemon unable to append to log-file"),
    (10, "Error in socket I/O"),
    (11, "Error in file I/O"),
    (12, "Error in rsync protocol data stream"),
    (13, "Errors with program diagnostics"),
    (14, "Error in IPC code"),
    (20, "Received SIGUSR1 or SIGINT"),
    (21, "Some error returned by waitpid"),
    (22, "Error allocating core memory buffers"),
    (23, "Partial transfer due to error"),
    (24, "Partial transfer due to vanished source files"),
    (25, "The --max-delete limit stopped deletions"),
    (30, "Timeout in data send/receive"),
    (35, "Timeout waiting for daemon connection"),
];

/// Immutable code -> description mapping. Build once per run and share by reference.
#[derive(Debug, Clone)]
pub struct ExitCodeTable {
    codes: BTreeMap<i32, &'static str>,
}

impl ExitCodeTable {
    /// Table of the exit codes documented for rsync.
    pub fn rsync() -> Self {
        Self {
            codes: RSYNC_EXIT_CODES.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, code: i32) -> Result<&'static str> {
        self.codes
            .get(&code)
            .copied()
            .ok_or(RsyncLogError::UnknownExitCode(code))
    }

    /// Description for `code`, or [`UNKNOWN_EXIT_MESSAGE`] when unlisted.
    pub fn describe(&self, code: i32) -> &'static str {
        self.lookup(code).unwrap_or(UNKNOWN_EXIT_MESSAGE)
    }

    /// Entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &'static str)> + '_ {
        self.codes.iter().map(|(code, msg)| (*code, *msg))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for ExitCodeTable {
    fn default() -> Self {
        Self::rsync()
    }
}
