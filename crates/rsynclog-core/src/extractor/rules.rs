//! Line rules: one compiled pattern per record field group.

use regex::{Captures, Regex};
use thiserror::Error;

use crate::exit_codes::ExitCodeTable;
use crate::record::JobRecord;

// Time: Mon 08 Jun 2020 08:47:11 PM CST. Job begining.
// The misspelling is what the log writer emits.
const JOB_BEGIN: &str = r"Time:\s(?P<begin>.+?[A-Z]{2}\s[A-Z]{3})\.\sJob\sbegining\.";
const JOB_END: &str = r"Time:\s(?P<end>.+?[A-Z]{2}\s[A-Z]{3})\.\sJob\sending\.";

// machine=server1 user=mrodriguez path=~/backup
const DESTINATION: &str =
    r"machine=(?P<server>[a-z]{6}\d)\suser=(?P<user>\w+?)\spath=(?P<path>.*\S)";

// Number of created files: 84 (reg: 55, dir: 29)
const CREATED_FILES: &str =
    r"created\sfiles:\s(?P<total>\d+)\s\(reg:\s(?P<files>\d+),\sdir:\s(?P<dirs>\d+)\)";
const DELETED_FILES: &str = r"deleted\sfiles:\s(?P<deleted>\d+)";

// sent 11,131,283 bytes  received 74,906 bytes  2,037,488.91 bytes/sec
const SENT_BYTES: &str = r"\ssent\s(?P<sent>\d+(?:,\d{3})*(?:\.\d{2})?)";
const XFER_SPEED: &str = r"(?P<speed>\d+(?:,\d{3})*(?:\.\d{2})?)\sbytes/sec";

// [sender] _exit_cleanup(code=11, file=io.c, line=-1642): entered
const EXIT_CODE: &str = r"code=(?P<code>\d+)";

/// A capture that matched the pattern but does not fit the field type.
#[derive(Error, Debug, PartialEq)]
pub enum RuleError {
    #[error("{field}: value {value:?} is out of range")]
    Number { field: &'static str, value: String },
}

type Apply = fn(&Captures<'_>, &mut JobRecord, &ExitCodeTable) -> Result<(), RuleError>;

/// One independent line rule. Every rule is tried on every line.
pub struct FieldRule {
    pub name: &'static str,
    pattern: Regex,
    apply: Apply,
}

impl FieldRule {
    fn new(name: &'static str, pattern: &str, apply: Apply) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            apply,
        })
    }

    /// Apply to `line`. `Ok(false)` means the pattern did not match.
    pub fn apply(
        &self,
        line: &str,
        record: &mut JobRecord,
        table: &ExitCodeTable,
    ) -> Result<bool, RuleError> {
        match self.pattern.captures(line) {
            Some(caps) => (self.apply)(&caps, record, table).map(|()| true),
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// All rules, in the order they are tried on each line.
pub fn build_rules() -> Result<Vec<FieldRule>, regex::Error> {
    Ok(vec![
        FieldRule::new("begin", JOB_BEGIN, |c, r, _| {
            r.begin = c["begin"].to_string();
            Ok(())
        })?,
        FieldRule::new("end", JOB_END, |c, r, _| {
            r.end = c["end"].to_string();
            Ok(())
        })?,
        FieldRule::new("destination", DESTINATION, |c, r, _| {
            r.destination = format!("{}@{}:{}", &c["user"], &c["server"], &c["path"]);
            Ok(())
        })?,
        FieldRule::new("created_files", CREATED_FILES, |c, r, _| {
            let total = parse_count("total_files", &c["total"])?;
            let files = parse_count("files", &c["files"])?;
            let dirs = parse_count("directories", &c["dirs"])?;
            r.total_files = total;
            r.files = files;
            r.directories = dirs;
            Ok(())
        })?,
        FieldRule::new("deleted_files", DELETED_FILES, |c, r, _| {
            r.deleted = parse_count("deleted", &c["deleted"])?;
            Ok(())
        })?,
        FieldRule::new("sent_bytes", SENT_BYTES, |c, r, _| {
            r.total_xfer = parse_byte_count("total_xfer", &c["sent"])?;
            Ok(())
        })?,
        FieldRule::new("xfer_speed", XFER_SPEED, |c, r, _| {
            r.xfer_speed = parse_rate("xfer_speed", &c["speed"])?;
            Ok(())
        })?,
        FieldRule::new("exit_code", EXIT_CODE, |c, r, table| {
            let raw = &c["code"];
            let code: i32 = raw.parse().map_err(|_| RuleError::Number {
                field: "exit_code",
                value: raw.to_string(),
            })?;
            if let Err(err) = table.lookup(code) {
                tracing::warn!("{err}; recording job with placeholder message");
            }
            r.exit_code = Some(code);
            r.exit_message = Some(table.describe(code).to_string());
            Ok(())
        })?,
    ])
}

fn parse_count(field: &'static str, raw: &str) -> Result<u64, RuleError> {
    raw.parse().map_err(|_| RuleError::Number {
        field,
        value: raw.to_string(),
    })
}

/// `11,131,283` -> 11131283. A fractional part is truncated.
fn parse_byte_count(field: &'static str, raw: &str) -> Result<u64, RuleError> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    let whole = digits.split('.').next().unwrap_or_default();
    parse_count(field, whole).map_err(|_| RuleError::Number {
        field,
        value: raw.to_string(),
    })
}

/// `2,037,488.91` -> 2037488.91
fn parse_rate(field: &'static str, raw: &str) -> Result<f64, RuleError> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    digits.parse().map_err(|_| RuleError::Number {
        field,
        value: raw.to_string(),
    })
}
