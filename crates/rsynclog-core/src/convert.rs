//! Conversion pipeline: read log -> segment -> extract -> JSON -> write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::RsyncLogConfig;
use crate::error::{Result, RsyncLogError};
use crate::exit_codes::ExitCodeTable;
use crate::extractor::FieldExtractor;
use crate::record::{JobRecord, MissingExitCode};
use crate::segmenter::{DroppedFragment, Segmenter};

/// Records parsed from one log text.
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub records: Vec<JobRecord>,
    pub dropped: Vec<DroppedFragment>,
}

/// Fully resolved inputs for one [`convert`] run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source: String,
    pub pretty: bool,
    pub missing_exit: MissingExitCode,
}

impl ConvertOptions {
    /// Merge command-line values over config values. Paths must come from one of them.
    pub fn resolve(
        cfg: &RsyncLogConfig,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        pretty: bool,
    ) -> Result<Self> {
        let input = input
            .or_else(|| cfg.input_path.clone())
            .ok_or(RsyncLogError::MissingPath("input"))?;
        let output = output
            .or_else(|| cfg.output_path.clone())
            .ok_or(RsyncLogError::MissingPath("output"))?;
        Ok(Self {
            input,
            output,
            source: resolve_source(cfg),
            pretty: pretty || cfg.pretty_json,
            missing_exit: cfg.missing_exit_code,
        })
    }
}

/// What a [`convert`] run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub jobs: usize,
    pub dropped: usize,
    pub output: PathBuf,
}

/// `source` value for this run: the configured override, else the host name.
pub fn resolve_source(cfg: &RsyncLogConfig) -> String {
    if let Some(host) = cfg.source_host.as_ref().filter(|h| !h.is_empty()) {
        return host.clone();
    }
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

pub fn parse_log(text: &str, extractor: &FieldExtractor<'_>) -> Result<ParsedLog> {
    let segmentation = Segmenter::new()?.segment(text);
    let records = segmentation
        .blocks
        .iter()
        .map(|block| extractor.extract(block))
        .collect();
    Ok(ParsedLog {
        records,
        dropped: segmentation.dropped,
    })
}

pub fn read_log(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RsyncLogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the log at `path` with the built-in exit code table.
pub fn parse_log_file(
    path: &Path,
    source: &str,
    missing_exit: MissingExitCode,
) -> Result<ParsedLog> {
    let text = read_log(path)?;
    let table = ExitCodeTable::rsync();
    let extractor = FieldExtractor::new(&table, source, missing_exit)?;
    parse_log(&text, &extractor)
}

pub fn render_json(records: &[JobRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Write `contents` to `path` via a temp file in the same directory, creating the directory if needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| RsyncLogError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Convert one log file to a JSON array of job records.
///
/// Nothing is written when the input can't be read.
pub fn convert(opts: &ConvertOptions) -> Result<ConvertSummary> {
    tracing::info!(
        input = %opts.input.display(),
        output = %opts.output.display(),
        source = %opts.source,
        "converting rsync log"
    );
    let parsed = parse_log_file(&opts.input, &opts.source, opts.missing_exit)?;
    let json = render_json(&parsed.records, opts.pretty)?;
    write_output(&opts.output, &json)?;

    let summary = ConvertSummary {
        jobs: parsed.records.len(),
        dropped: parsed.dropped.len(),
        output: opts.output.clone(),
    };
    tracing::info!(
        jobs = summary.jobs,
        dropped = summary.dropped,
        "wrote {}",
        summary.output.display()
    );
    Ok(summary)
}
