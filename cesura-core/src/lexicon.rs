//! Non-breaking prefix lexicon
//!
//! A prefix lexicon maps abbreviation strings ("Dr", "etc", "No") to the
//! rule that governs them. The engine consults it when a token ends in a
//! period to decide whether that period closes a sentence.

use std::collections::HashMap;

/// Marker that tags a prefix line as numeric-only in resource files
const NUMERIC_ONLY_MARKER: &str = "#NUMERIC_ONLY#";

/// How a non-breaking prefix suppresses sentence breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixKind {
    /// Never break after this prefix when it directly precedes a period
    #[default]
    Default,
    /// Only suppress the break when the next token starts with a digit,
    /// e.g. "No. 6" or "Art. 12"
    NumericOnly,
}

/// Lookup table of non-breaking prefixes
///
/// Keys are matched exactly and case-sensitively against the word part of
/// a period-terminated token. The table is built once and then only read;
/// a later entry for the same key replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct PrefixLexicon {
    entries: HashMap<String, PrefixKind>,
}

impl PrefixLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from raw resource lines
    ///
    /// Each line is either blank, a `#` comment, or a prefix optionally
    /// followed by the `#NUMERIC_ONLY#` marker and/or a trailing comment.
    /// The marker is recognized anywhere on the line before comments are
    /// stripped; whitespace around the prefix is ignored.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for line in lines {
            let line = line.as_ref();

            let kind = if line.contains(NUMERIC_ONLY_MARKER) {
                PrefixKind::NumericOnly
            } else {
                PrefixKind::Default
            };

            // Everything from the first '#' on is comment, marker included.
            let prefix = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };
            let prefix = prefix.trim();

            if prefix.is_empty() {
                continue;
            }

            lexicon.insert(prefix, kind);
        }
        lexicon
    }

    /// Add a single prefix, replacing any earlier entry for the same key
    pub fn insert(&mut self, prefix: impl Into<String>, kind: PrefixKind) {
        self.entries.insert(prefix.into(), kind);
    }

    /// Look up the kind recorded for a prefix
    pub fn kind(&self, prefix: &str) -> Option<PrefixKind> {
        self.entries.get(prefix).copied()
    }

    /// Number of prefixes in the lexicon
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no prefixes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_prefixes() {
        let lexicon = PrefixLexicon::from_lines(["Dr", "Mr", "etc"]);
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.kind("Dr"), Some(PrefixKind::Default));
        assert_eq!(lexicon.kind("etc"), Some(PrefixKind::Default));
        assert_eq!(lexicon.kind("Prof"), None);
    }

    #[test]
    fn recognizes_numeric_only_marker() {
        let lexicon = PrefixLexicon::from_lines(["No #NUMERIC_ONLY#", "Nos"]);
        assert_eq!(lexicon.kind("No"), Some(PrefixKind::NumericOnly));
        assert_eq!(lexicon.kind("Nos"), Some(PrefixKind::Default));
    }

    #[test]
    fn strips_comments_and_blank_lines() {
        let lexicon = PrefixLexicon::from_lines([
            "# header comment",
            "",
            "   ",
            "Dr # a title",
            "#NUMERIC_ONLY# ignored without a prefix",
        ]);
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.kind("Dr"), Some(PrefixKind::Default));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let lexicon = PrefixLexicon::from_lines(["  Prof  "]);
        assert_eq!(lexicon.kind("Prof"), Some(PrefixKind::Default));
    }

    #[test]
    fn last_duplicate_wins() {
        let lexicon = PrefixLexicon::from_lines(["No", "No #NUMERIC_ONLY#"]);
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.kind("No"), Some(PrefixKind::NumericOnly));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let lexicon = PrefixLexicon::from_lines(["Dr"]);
        assert_eq!(lexicon.kind("dr"), None);
    }
}
