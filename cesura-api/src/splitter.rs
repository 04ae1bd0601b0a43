//! Sentence splitter and its builder

use crate::error::{Result, SplitterError};
use crate::language;
use cesura_core::{detect_boundaries, split_at_boundaries, Boundary, PrefixLexicon};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Text-to-sentence splitter using the Koehn & Schroeder heuristics
///
/// A splitter owns the non-breaking prefix lexicon for one language (or
/// one caller-supplied prefix source) and an optional per-call time
/// budget. It keeps no other state: every call is a pure function of the
/// input text and the lexicon, so a splitter can be shared read-only
/// across threads.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    lexicon: PrefixLexicon,
    timeout: Option<Duration>,
}

impl SentenceSplitter {
    /// Create a splitter for a language with an embedded prefix resource
    pub fn new(language: &str) -> Result<Self> {
        Self::builder().language(language).build()
    }

    /// Create a splitter that loads its prefixes from a file
    pub fn with_prefix_file(language: &str, path: impl AsRef<Path>) -> Result<Self> {
        Self::builder()
            .language(language)
            .prefix_file(path.as_ref())
            .build()
    }

    /// Create a builder
    pub fn builder() -> SentenceSplitterBuilder {
        SentenceSplitterBuilder::default()
    }

    /// The lexicon this splitter consults
    pub fn lexicon(&self) -> &PrefixLexicon {
        &self.lexicon
    }

    /// The configured detection time budget, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Detect sentence boundaries in `text`
    ///
    /// Returns strictly increasing offsets, each marking the first
    /// character of a new sentence; offset 0 is never included.
    pub fn boundaries(&self, text: &str) -> Result<Vec<Boundary>> {
        let boundaries = detect_boundaries(text, &self.lexicon, self.timeout)?;
        debug!(
            boundaries = boundaries.len(),
            bytes = text.len(),
            "detected sentence boundaries"
        );
        Ok(boundaries)
    }

    /// Split text into whitespace-normalized sentences
    ///
    /// Runs of two or more whitespace characters collapse to a single
    /// space and each sentence is trimmed. An absent (`None`) input is
    /// tolerated: it logs one warning and yields no sentences.
    pub fn split<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<Vec<String>> {
        self.split_inner(text.into(), true)
    }

    /// Split text into raw sentence slices
    ///
    /// No normalization is applied; concatenating the returned sentences
    /// reproduces the input text exactly.
    pub fn split_raw<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<Vec<String>> {
        self.split_inner(text.into(), false)
    }

    fn split_inner(&self, text: Option<&str>, strip_whitespace: bool) -> Result<Vec<String>> {
        let Some(text) = text else {
            warn!("input text is absent; returning no sentences");
            return Ok(Vec::new());
        };
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let boundaries = self.boundaries(text)?;
        Ok(split_at_boundaries(text, &boundaries, strip_whitespace))
    }
}

/// Builder for [`SentenceSplitter`]
///
/// The language code is always required and validated. The prefix source
/// defaults to the embedded resource for that code; a prefix file or
/// explicit prefix lines take precedence, in that order of preference
/// (lines win over a file when both are given).
#[derive(Debug, Default)]
pub struct SentenceSplitterBuilder {
    language: Option<String>,
    prefix_file: Option<PathBuf>,
    prefix_lines: Option<Vec<String>>,
    timeout: Option<Duration>,
}

impl SentenceSplitterBuilder {
    /// Set the ISO 639-1 language code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Load non-breaking prefixes from a file instead of the embedded
    /// resource
    pub fn prefix_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefix_file = Some(path.into());
        self
    }

    /// Supply non-breaking prefix lines directly
    pub fn prefix_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Bound the wall-clock cost of each detection call
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the splitter
    pub fn build(self) -> Result<SentenceSplitter> {
        let code = self.language.unwrap_or_default();
        if !language::is_valid_code(&code) {
            return Err(SplitterError::InvalidLanguage { code });
        }

        let lexicon = if let Some(lines) = self.prefix_lines {
            PrefixLexicon::from_lines(lines)
        } else if let Some(path) = self.prefix_file {
            let raw = fs::read_to_string(&path).map_err(|source| SplitterError::PrefixFile {
                path: path.display().to_string(),
                source,
            })?;
            PrefixLexicon::from_lines(raw.lines())
        } else {
            language::builtin_lexicon(&code)
                .cloned()
                .ok_or(SplitterError::UnsupportedLanguage { code })?
        };

        Ok(SentenceSplitter {
            lexicon,
            timeout: self.timeout,
        })
    }
}
