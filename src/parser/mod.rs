mod classifier;
mod markers;
mod segmenter;
mod types;

pub use classifier::{classify, is_theorem, label_sentences, rescan_comments};
pub use markers::{
    is_blank_line, raw_lines, starts_block_comment, ASSIGNMENT, BLOCK_COMMENT_CLOSE,
    BLOCK_COMMENT_OPEN, LINE_COMMENT, PROOF_END, PROOF_START,
};
pub use segmenter::{segment, SplitGuard};
pub use types::{CodeLine, LabeledSentence, SentenceBlock};
