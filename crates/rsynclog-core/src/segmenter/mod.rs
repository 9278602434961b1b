//! Log segmentation: split a multi-job log into job blocks.
//!
//! A block runs from a `Time: ... Job begining.` line through the first following
//! `ending.` token (shortest match, spanning lines). A job whose end marker never
//! appears produces no block; its begin line is reported as a [`DroppedFragment`].
//! That holds mid-log too: when a match covers several begin lines, only the
//! last one starts the block.

mod block;

pub use block::{DroppedFragment, JobBlock};

use regex::Regex;

use crate::error::Result;

const JOB_BLOCK: &str = r"(?ms)^Time:[^\n]*Job begining\..+?ending\.";
const JOB_BEGIN_LINE: &str = r"(?m)^Time:.*Job begining\..*$";

/// Output of [`Segmenter::segment`].
#[derive(Debug, Clone, Default)]
pub struct Segmentation<'a> {
    /// Blocks in source order.
    pub blocks: Vec<JobBlock<'a>>,
    pub dropped: Vec<DroppedFragment>,
}

/// Compiled block and begin-marker patterns.
#[derive(Debug, Clone)]
pub struct Segmenter {
    block: Regex,
    begin_line: Regex,
}

impl Segmenter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            block: Regex::new(JOB_BLOCK)?,
            begin_line: Regex::new(JOB_BEGIN_LINE)?,
        })
    }

    pub fn segment<'a>(&self, text: &'a str) -> Segmentation<'a> {
        let mut out = Segmentation::default();
        let mut cursor = 0usize;
        let mut line = 1usize;

        for m in self.block.find_iter(text) {
            self.collect_dropped(text, cursor, m.start(), line, &mut out.dropped);
            line += count_newlines(&text[cursor..m.start()]);

            // Earlier begin lines inside the match belong to jobs that never ended.
            let matched = m.as_str();
            let job_start = self
                .begin_line
                .find_iter(matched)
                .last()
                .map_or(0, |b| b.start());
            self.collect_dropped(matched, 0, job_start, line, &mut out.dropped);
            let start_line = line + count_newlines(&matched[..job_start]);
            out.blocks.push(JobBlock::new(&matched[job_start..], start_line));
            line += count_newlines(matched);
            cursor = m.end();
        }
        self.collect_dropped(text, cursor, text.len(), line, &mut out.dropped);

        for frag in &out.dropped {
            tracing::warn!(
                line = frag.line,
                "job begin marker without a matching end marker; skipping: {}",
                frag.text
            );
        }
        tracing::debug!(
            blocks = out.blocks.len(),
            dropped = out.dropped.len(),
            "segmented log"
        );
        out
    }

    /// Begin-marker lines in `text[from..to]`, which lies outside every block.
    fn collect_dropped(
        &self,
        text: &str,
        from: usize,
        to: usize,
        first_line: usize,
        dropped: &mut Vec<DroppedFragment>,
    ) {
        let gap = &text[from..to];
        for m in self.begin_line.find_iter(gap) {
            dropped.push(DroppedFragment {
                line: first_line + count_newlines(&gap[..m.start()]),
                text: m.as_str().trim_end().to_string(),
            });
        }
    }
}

fn count_newlines(s: &str) -> usize {
    s.bytes().filter(|b| *b == b'\n').count()
}
