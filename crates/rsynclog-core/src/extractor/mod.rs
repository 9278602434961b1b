//! Field extraction: turn one job block into a [`JobRecord`].
//!
//! Every rule is tried against every line of the block, in order. A line may
//! feed several rules, and when a rule matches more than one line the last match
//! wins. Unmatched fields keep their defaults.

mod rules;

pub use rules::{build_rules, FieldRule, RuleError};

use crate::error::Result;
use crate::exit_codes::ExitCodeTable;
use crate::record::{JobRecord, MissingExitCode};
use crate::segmenter::JobBlock;

/// Rule set plus the per-run values copied into every record.
#[derive(Debug)]
pub struct FieldExtractor<'t> {
    rules: Vec<FieldRule>,
    table: &'t ExitCodeTable,
    source: String,
    missing_exit: MissingExitCode,
}

impl<'t> FieldExtractor<'t> {
    pub fn new(
        table: &'t ExitCodeTable,
        source: impl Into<String>,
        missing_exit: MissingExitCode,
    ) -> Result<Self> {
        Ok(Self {
            rules: build_rules()?,
            table,
            source: source.into(),
            missing_exit,
        })
    }

    pub fn extract(&self, block: &JobBlock<'_>) -> JobRecord {
        let record = self.extract_lines(block.lines());
        tracing::debug!(
            start_line = block.start_line(),
            begin = %record.begin,
            exit_code = ?record.exit_code,
            "extracted job"
        );
        record
    }

    pub fn extract_lines<'a, I>(&self, lines: I) -> JobRecord
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut record = JobRecord::new(&self.source, self.missing_exit);
        for line in lines {
            for rule in &self.rules {
                if let Err(err) = rule.apply(line, &mut record, self.table) {
                    tracing::warn!(rule = rule.name, "ignoring line: {err}");
                }
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(lines: &[&str]) -> JobRecord {
        let table = ExitCodeTable::rsync();
        let ex = FieldExtractor::new(&table, "backuphost", MissingExitCode::Absent).unwrap();
        ex.extract_lines(lines.iter().copied())
    }

    #[test]
    fn begin_and_end_timestamps() {
        let rec = extract(&[
            "Time: Mon 08 Jun 2020 08:47:11 PM CST. Job begining.",
            "Time: Mon 08 Jun 2020 08:47:16 PM CST. Job ending.",
        ]);
        assert_eq!(rec.begin, "Mon 08 Jun 2020 08:47:11 PM CST");
        assert_eq!(rec.end, "Mon 08 Jun 2020 08:47:16 PM CST");
    }

    #[test]
    fn correctly_spelled_begin_does_not_match() {
        let rec = extract(&["Time: Mon 08 Jun 2020 08:47:11 PM CST. Job beginning."]);
        assert_eq!(rec.begin, "");
    }

    #[test]
    fn destination_from_marker_line() {
        let rec = extract(&["2020/06/08 20:47:11 machine=server1 user=mrodriguez path=~/backup"]);
        assert_eq!(rec.destination, "mrodriguez@server1:~/backup");
    }

    #[test]
    fn destination_trims_trailing_whitespace() {
        let rec = extract(&["machine=backup2 user=ops_1 path=/srv/data dir  \r"]);
        assert_eq!(rec.destination, "ops_1@backup2:/srv/data dir");
    }

    #[test]
    fn destination_requires_six_letter_server() {
        let rec = extract(&["machine=srv1 user=mrodriguez path=~/backup"]);
        assert_eq!(rec.destination, "");
    }

    #[test]
    fn created_and_deleted_counts() {
        let rec = extract(&[
            "2020/06/08 20:47:16 [36113] Number of created files: 84 (reg: 55, dir: 29)",
            "2020/06/08 20:47:16 [36113] Number of deleted files: 17",
        ]);
        assert_eq!(rec.total_files, 84);
        assert_eq!(rec.files, 55);
        assert_eq!(rec.directories, 29);
        assert_eq!(rec.deleted, 17);
    }

    #[test]
    fn sent_and_speed_from_one_line() {
        let rec = extract(&[
            "2020/06/08 20:47:16 [36113] sent 11,131,283 bytes  received 74,906 bytes  2,037,488.91 bytes/sec",
        ]);
        assert_eq!(rec.total_xfer, 11_131_283);
        assert!((rec.xfer_speed - 2_037_488.91).abs() < 1e-6);
    }

    #[test]
    fn known_exit_code() {
        let rec = extract(&[
            "2020/06/08 20:47:43 [36121] [sender] _exit_cleanup(code=11, file=io.c, line=-1642): entered",
        ]);
        assert_eq!(rec.exit_code, Some(11));
        assert_eq!(rec.exit_message.as_deref(), Some("Error in file I/O"));
    }

    #[test]
    fn unknown_exit_code_gets_placeholder() {
        let rec = extract(&["_exit_cleanup(code=99, file=main.c, line=1): about to call exit(99)"]);
        assert_eq!(rec.exit_code, Some(99));
        assert_eq!(
            rec.exit_message.as_deref(),
            Some(crate::exit_codes::UNKNOWN_EXIT_MESSAGE)
        );
    }

    #[test]
    fn oversized_exit_code_is_ignored() {
        let rec = extract(&["code=99999999999"]);
        assert_eq!(rec.exit_code, None);
        assert_eq!(rec.exit_message, None);
    }

    #[test]
    fn last_match_wins() {
        let rec = extract(&[
            "Number of deleted files: 3",
            "[1] sent 100 bytes  received 5 bytes  10.00 bytes/sec",
            "Number of deleted files: 4",
            "[1] sent 200 bytes  received 5 bytes  20.50 bytes/sec",
        ]);
        assert_eq!(rec.deleted, 4);
        assert_eq!(rec.total_xfer, 200);
        assert!((rec.xfer_speed - 20.5).abs() < 1e-9);
    }

    #[test]
    fn missing_fields_keep_defaults() {
        let rec = extract(&["nothing useful here"]);
        assert_eq!(rec, JobRecord::new("backuphost", MissingExitCode::Absent));
        assert_eq!(rec.source, "backuphost");
    }

    #[test]
    fn legacy_policy_defaults_to_code_one() {
        let table = ExitCodeTable::rsync();
        let ex = FieldExtractor::new(&table, "h", MissingExitCode::Legacy).unwrap();
        let rec = ex.extract_lines(["Number of deleted files: 0"]);
        assert_eq!(rec.exit_code, Some(1));
        assert_eq!(rec.exit_message.as_deref(), Some(""));
        let rec = ex.extract_lines(["code=0"]);
        assert_eq!(rec.exit_code, Some(0));
        assert_eq!(rec.exit_message.as_deref(), Some("Success"));
    }
}
