//! Split formal-mathematics source into sentences, attach comments to code
//! lines, and flag theorem-like declarations with lexical heuristics.

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod source;

pub use config::KeywordSets;
pub use error::DivideError;
pub use output::{DivideSummary, Selection};
pub use parser::{classify, label_sentences, segment, CodeLine, LabeledSentence, SentenceBlock};
pub use source::{divide_file, divide_text};
