use serde::Serialize;

/// One blank-line-delimited run of raw source lines (terminators kept).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceBlock {
    pub lines: Vec<String>,
}

impl SentenceBlock {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// All raw lines concatenated in order, no separator inserted.
    pub fn squashed(&self) -> String {
        self.lines.concat()
    }
}

impl<S: AsRef<str>> From<&[S]> for SentenceBlock {
    fn from(lines: &[S]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().to_string()).collect(),
        }
    }
}

/// A retained code line paired with the comment text attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLine {
    pub code: String,
    pub comment: String,
}

impl CodeLine {
    pub fn new(code: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            comment: comment.into(),
        }
    }
}

/// Classifier output for exactly one `SentenceBlock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledSentence {
    pub lines: Vec<CodeLine>,
    pub commented: bool,
    pub is_theorem: bool,
}
