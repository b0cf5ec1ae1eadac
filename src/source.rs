//! File-level pipeline: read, segment, label.

use std::fs;
use std::path::Path;

use crate::config::KeywordSets;
use crate::error::DivideError;
use crate::parser::{label_sentences, raw_lines, segment, LabeledSentence};

pub fn read_source(path: &Path) -> Result<String, DivideError> {
    fs::read_to_string(path).map_err(|source| DivideError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Segment and label an in-memory source text.
pub fn divide_text(contents: &str, keywords: &KeywordSets) -> Vec<LabeledSentence> {
    let lines = raw_lines(contents);
    let blocks = segment(&lines);
    label_sentences(&blocks, keywords)
}

pub fn divide_file(
    path: &Path,
    keywords: &KeywordSets,
) -> Result<Vec<LabeledSentence>, DivideError> {
    let contents = read_source(path)?;
    Ok(divide_text(&contents, keywords))
}
