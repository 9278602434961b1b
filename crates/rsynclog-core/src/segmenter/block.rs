//! A single job's slice of the log text.

/// Text of one transfer job, from its `Time:` marker through its `ending.` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobBlock<'a> {
    text: &'a str,
    start_line: usize,
}

impl<'a> JobBlock<'a> {
    pub(crate) fn new(text: &'a str, start_line: usize) -> Self {
        Self { text, start_line }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// 1-based line number in the full log where this block starts.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn lines(&self) -> std::str::Lines<'a> {
        self.text.lines()
    }
}

/// A begin marker that no job block covers (its job never logged `ending.`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFragment {
    /// 1-based line number of the begin marker.
    pub line: usize,
    pub text: String,
}
