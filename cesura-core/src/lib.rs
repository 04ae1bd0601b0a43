//! Core algorithm for rule-based sentence boundary detection
//!
//! This crate implements the Koehn & Schroeder splitting heuristics: a set
//! of Unicode-aware pattern passes that find unambiguous sentence breaks,
//! followed by a token walk that consults a lexicon of non-breaking
//! prefixes to decide the ambiguous period cases.
//!
//! The crate is deliberately I/O-free. Callers hand in the text, a
//! [`PrefixLexicon`] they built or loaded elsewhere, and an optional time
//! budget; they get back boundary offsets or ready-made sentence strings.

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod lexicon;
mod patterns;
pub mod segmenter;
pub mod types;

pub use engine::detect_boundaries;
pub use error::CoreError;
pub use lexicon::{PrefixKind, PrefixLexicon};
pub use segmenter::split_at_boundaries;
pub use types::Boundary;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
