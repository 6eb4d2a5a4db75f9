//! Errors.

use super::*;

use thiserror::Error;

/// Errors from loading, filtering, and writing feed documents.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The input could not be read.
    #[error("unable to read feed `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input was not a well-formed feed document.
    #[error("unable to parse feed as atom or rss:{reasons}")]
    Parse { reasons: String },
    /// The document could not be serialized back to markup.
    #[error("unable to serialize feed: {reason}")]
    Serialize { reason: String },
    /// The output could not be written.
    #[error("unable to write feed `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
