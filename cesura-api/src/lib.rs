//! Multilingual sentence splitting with non-breaking prefix lexicons
//!
//! Cesura splits natural-language text into sentences using the
//! heuristic, rule-based algorithm of Koehn & Schroeder: Unicode-aware
//! pattern passes find the unambiguous breaks, and a per-language list
//! of non-breaking prefixes decides the ambiguous period cases
//! (abbreviations, initials, ordinals, dotted acronyms).
//!
//! ```
//! use cesura_api::SentenceSplitter;
//!
//! let splitter = SentenceSplitter::new("en")?;
//! let sentences = splitter.split("This is a paragraph. It contains several sentences.")?;
//! assert_eq!(
//!     sentences,
//!     vec!["This is a paragraph.", "It contains several sentences."]
//! );
//! # Ok::<(), cesura_api::SplitterError>(())
//! ```
//!
//! Prefix resources for 23 languages are embedded at compile time; a
//! custom list can be supplied as a file or as raw lines through
//! [`SentenceSplitter::builder`].

#![warn(missing_docs)]

pub mod error;
mod language;
mod splitter;

// Re-export key types
pub use cesura_core::{Boundary, CoreError, PrefixKind, PrefixLexicon};
pub use error::{Result, SplitterError};
pub use language::available_languages;
pub use splitter::{SentenceSplitter, SentenceSplitterBuilder};

/// Split `text` into sentences for a language in one call
///
/// Builds a throwaway [`SentenceSplitter`]; when splitting more than one
/// text, construct the splitter once instead so the prefix resource is
/// not reparsed per call.
pub fn split_text_into_sentences(text: &str, language: &str) -> Result<Vec<String>> {
    let splitter = SentenceSplitter::new(language)?;
    splitter.split(text)
}

/// Split `text` with prefixes loaded from a caller-supplied file
pub fn split_text_into_sentences_with_prefix_file(
    text: &str,
    language: &str,
    prefix_file: impl AsRef<std::path::Path>,
) -> Result<Vec<String>> {
    let splitter = SentenceSplitter::with_prefix_file(language, prefix_file)?;
    splitter.split(text)
}
