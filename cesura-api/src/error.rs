//! API error types

use cesura_core::CoreError;
use thiserror::Error;

/// Errors surfaced by splitter construction and splitting calls
#[derive(Error, Debug)]
pub enum SplitterError {
    /// The language code is not a 2-letter lowercase ISO 639-1 code
    #[error("invalid language code: '{code}' (expected a 2-letter lowercase code)")]
    InvalidLanguage {
        /// The rejected language code
        code: String,
    },

    /// No embedded prefix resource exists for the requested language
    #[error("no non-breaking prefix resource for language '{code}'")]
    UnsupportedLanguage {
        /// The language code without a resource
        code: String,
    },

    /// A caller-supplied prefix file could not be read
    #[error("failed to read non-breaking prefix file '{path}': {source}")]
    PrefixFile {
        /// The path that failed to open
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The detection time budget ran out
    #[error(transparent)]
    Timeout(#[from] CoreError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, SplitterError>;
