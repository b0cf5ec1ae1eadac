use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the surrounding I/O and configuration glue.
///
/// Segmentation and classification themselves never fail.
#[derive(Error, Debug)]
pub enum DivideError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unbalanced quotes in word list: {0}")]
    WordList(String),
}
