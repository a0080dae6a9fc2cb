//! Per-line normalization errors.

use thiserror::Error;

/// Why a raw line could not be turned into a canonical URL.
///
/// These are never fatal to a run: the line is counted as invalid and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Line was empty after trimming.
    #[error("empty line")]
    Empty,

    /// The `url` parser rejected the line.
    #[error("cannot parse URL {input:?}: {reason}")]
    Parse {
        input: String,
        reason: url::ParseError,
    },

    /// Parsed, but there is no host to key on.
    #[error("URL has no host: {input:?}")]
    MissingHost { input: String },
}
