use tracing::debug;

use super::markers::{
    closes_block_comment, closes_proof, is_blank_line, opens_block_comment, opens_proof,
};
use super::types::SentenceBlock;

/// Open spans that stop blank lines from ending a sentence.
///
/// Both flags are updated from every line independently, so a line holding
/// both `begin` and `end` leaves `proving` cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitGuard {
    pub commented: bool,
    pub proving: bool,
}

impl SplitGuard {
    pub fn observe(&mut self, line: &str) {
        if opens_proof(line) {
            self.proving = true;
        }
        if closes_proof(line) {
            self.proving = false;
        }
        if opens_block_comment(line) {
            self.commented = true;
        }
        if closes_block_comment(line) {
            self.commented = false;
        }
    }

    pub fn suppresses_split(&self) -> bool {
        self.commented || self.proving
    }
}

/// Group raw lines into sentences, splitting on blank lines outside of
/// comments and proofs. The splitting blank line belongs to neither side.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<SentenceBlock> {
    let mut out = Vec::new();
    let mut current = SentenceBlock::new();
    let mut guard = SplitGuard::default();

    for line in lines {
        let line = line.as_ref();
        guard.observe(line);

        if !guard.suppresses_split() && is_blank_line(line) {
            out.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    out.push(current);

    if guard.commented {
        debug!("block comment never closed; splitting was suppressed to end of input");
    }
    if guard.proving {
        debug!("proof never ended; splitting was suppressed to end of input");
    }
    debug!(lines = lines.len(), sentences = out.len(), "segmented source");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[SentenceBlock]) -> Vec<Vec<&str>> {
        blocks
            .iter()
            .map(|b| b.lines.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn empty_input_yields_one_empty_block() {
        let blocks = segment::<&str>(&[]);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_empty());
    }

    #[test]
    fn blank_line_splits() {
        let blocks = segment(&["def a := 1\n", "\n", "def b := 2\n"]);
        assert_eq!(texts(&blocks), vec![vec!["def a := 1\n"], vec!["def b := 2\n"]]);
    }

    #[test]
    fn blank_run_yields_empty_block() {
        let blocks = segment(&["a\n", "\n", "\n", "b\n"]);
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].is_empty());
    }

    #[test]
    fn proof_body_is_not_split() {
        let blocks = segment(&["lemma foo : p :=\n", "begin\n", "\n", "simp\n", "end\n"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 5);
    }

    #[test]
    fn block_comment_is_not_split() {
        let blocks = segment(&["/- note\n", "\n", "more -/\n", "\n", "def x := 1\n"]);
        assert_eq!(
            texts(&blocks),
            vec![vec!["/- note\n", "\n", "more -/\n"], vec!["def x := 1\n"]]
        );
    }

    #[test]
    fn begin_and_end_on_one_line_clears_proving() {
        let blocks = segment(&["begin simp end\n", "\n", "x\n"]);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn unclosed_comment_suppresses_rest_of_file() {
        let blocks = segment(&["/- open\n", "\n", "a\n", "\n", "b\n"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 5);
    }

    #[test]
    fn guard_tracks_both_spans() {
        let mut guard = SplitGuard::default();
        guard.observe("begin\n");
        guard.observe("/- inside proof\n");
        assert!(guard.proving && guard.commented);
        guard.observe("-/\n");
        assert!(guard.suppresses_split());
        guard.observe("end\n");
        assert!(!guard.suppresses_split());
    }
}
