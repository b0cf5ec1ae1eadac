use std::collections::BTreeSet;

use tracing::debug;

use super::markers::{
    closes_block_comment, has_line_comment, starts_block_comment, ASSIGNMENT, PROOF_END,
    PROOF_START,
};
use super::types::{CodeLine, LabeledSentence, SentenceBlock};
use crate::config::KeywordSets;

/// Decide theorem-hood from a sentence's concatenated text.
///
/// Any blacklist word vetoes. Otherwise the text needs a proof body or an
/// assignment, plus a whitelist word followed by a space.
pub fn is_theorem(
    squashed: &str,
    whitelist: &BTreeSet<String>,
    blacklist: &BTreeSet<String>,
) -> bool {
    if blacklist.iter().any(|word| squashed.contains(word.as_str())) {
        return false;
    }

    let has_proof = squashed.contains(PROOF_START) && squashed.contains(PROOF_END);
    let has_body = has_proof || squashed.contains(ASSIGNMENT);

    has_body
        && whitelist
            .iter()
            .any(|word| squashed.contains(format!("{word} ").as_str()))
}

/// Walk a sentence's lines and fold comment lines into the next code line.
///
/// Returns the code/comment pairs and whether any comment was seen.
pub fn rescan_comments(block: &SentenceBlock) -> (Vec<CodeLine>, bool) {
    let mut out = Vec::with_capacity(block.len());
    let mut commented = false;
    let mut inside_block_comment = false;
    let mut pending = String::new();

    for line in &block.lines {
        if starts_block_comment(line) {
            commented = true;
            inside_block_comment = true;
        } else if has_line_comment(line) {
            commented = true;
            pending.push_str(line);
            continue;
        }

        if inside_block_comment {
            pending.push_str(line);
            if closes_block_comment(line) {
                inside_block_comment = false;
            }
        } else {
            out.push(CodeLine::new(line.trim(), pending.trim()));
            pending.clear();
        }
    }

    if !pending.is_empty() {
        out.push(CodeLine::new("", pending.trim()));
    }

    (out, commented)
}

pub fn classify(
    block: &SentenceBlock,
    whitelist: &BTreeSet<String>,
    blacklist: &BTreeSet<String>,
) -> LabeledSentence {
    let is_theorem = is_theorem(&block.squashed(), whitelist, blacklist);
    let (lines, commented) = rescan_comments(block);

    LabeledSentence {
        lines,
        commented,
        is_theorem,
    }
}

/// Classify every sentence in order with one keyword configuration.
pub fn label_sentences(blocks: &[SentenceBlock], keywords: &KeywordSets) -> Vec<LabeledSentence> {
    let labeled: Vec<LabeledSentence> = blocks
        .iter()
        .map(|b| classify(b, &keywords.whitelist, &keywords.blacklist))
        .collect();

    debug!(
        sentences = labeled.len(),
        theorems = labeled.iter().filter(|s| s.is_theorem).count(),
        "labeled sentences"
    );

    labeled
}
