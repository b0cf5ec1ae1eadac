//! Filtering and serialization of labeled sentences.

use std::io::{self, Write};

use crate::parser::LabeledSentence;

/// Separator between a code line and its comment in text output.
pub const DIVIDER: &str = " ♥ ";

/// Which sentences make it into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Theorems that carry at least one comment.
    #[default]
    TheoremsWithComments,
    All,
}

impl Selection {
    pub fn keeps(&self, sentence: &LabeledSentence) -> bool {
        match self {
            Selection::TheoremsWithComments => sentence.is_theorem && sentence.commented,
            Selection::All => true,
        }
    }
}

pub fn format_divided_line(code: &str, comment: &str) -> String {
    format!("{code}{DIVIDER}{comment}\n")
}

/// Write each retained line pair as `<code> ♥ <comment>`.
/// Returns the number of sentences written.
pub fn write_text<W: Write>(
    out: &mut W,
    sentences: &[LabeledSentence],
    selection: Selection,
) -> io::Result<usize> {
    let mut written = 0usize;
    for sentence in sentences.iter().filter(|s| selection.keeps(s)) {
        for line in &sentence.lines {
            out.write_all(format_divided_line(&line.code, &line.comment).as_bytes())?;
        }
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Write one JSON object per retained sentence, one per line.
pub fn write_json<W: Write>(
    out: &mut W,
    sentences: &[LabeledSentence],
    selection: Selection,
) -> io::Result<usize> {
    let mut written = 0usize;
    for sentence in sentences.iter().filter(|s| selection.keeps(s)) {
        serde_json::to_writer(&mut *out, sentence)?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Counts over one labeled run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivideSummary {
    pub sentences: usize,
    pub theorems: usize,
    pub commented: usize,
    pub retained: usize,
}

impl DivideSummary {
    pub fn of(sentences: &[LabeledSentence], selection: Selection) -> Self {
        Self {
            sentences: sentences.len(),
            theorems: sentences.iter().filter(|s| s.is_theorem).count(),
            commented: sentences.iter().filter(|s| s.commented).count(),
            retained: sentences.iter().filter(|s| selection.keeps(s)).count(),
        }
    }
}
