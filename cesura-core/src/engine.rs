//! Boundary detection engine
//!
//! Detection runs in two stages over the original, unmodified text:
//!
//! 1. Structural passes: four patterns that recognize unambiguous
//!    sentence-break signatures (non-period terminators, ellipses, and
//!    terminator/quote combinations). Each pass scans the whole text; a
//!    match whose byte range overlaps an earlier recorded match is
//!    dropped so a single punctuation run never yields two breaks.
//! 2. Period disambiguation: every adjacent pair of whitespace-delimited
//!    tokens is inspected. A left token ending in a period run breaks
//!    before a sentence-starter-shaped right token unless the lexicon
//!    knows the word part as a non-breaking prefix, the token is shaped
//!    like a dotted acronym, or a numeric-only prefix precedes a
//!    digit-led token.

use crate::error::CoreError;
use crate::lexicon::{PrefixKind, PrefixLexicon};
use crate::patterns;
use crate::types::Boundary;
use std::collections::BTreeSet;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Token pairs walked between budget checks in the disambiguation stage
const BUDGET_CHECK_INTERVAL: usize = 256;

/// Detect sentence boundaries in `text`
///
/// Returns the boundaries in strictly increasing offset order, without
/// duplicates. Offset 0 is never a boundary. When `budget` is given and
/// runs out mid-scan, the call fails with [`CoreError::BudgetExceeded`]
/// and no partial result is returned.
pub fn detect_boundaries(
    text: &str,
    lexicon: &PrefixLexicon,
    budget: Option<Duration>,
) -> Result<Vec<Boundary>, CoreError> {
    let clock = BudgetClock::start(budget);
    clock.check()?;

    let mut ledger = BreakLedger::default();
    structural_passes(text, &mut ledger, &clock)?;
    period_disambiguation(text, lexicon, &mut ledger, &clock)?;

    Ok(resolve_offsets(text, &ledger.offsets))
}

/// Wall-clock budget for a single detection call
struct BudgetClock {
    started: Instant,
    budget: Option<Duration>,
}

impl BudgetClock {
    fn start(budget: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    fn check(&self) -> Result<(), CoreError> {
        match self.budget {
            Some(budget) if self.started.elapsed() >= budget => Err(CoreError::BudgetExceeded {
                budget_ms: budget.as_millis() as u64,
            }),
            _ => Ok(()),
        }
    }
}

/// Bookkeeping for recorded breaks
///
/// Structural passes record the byte range their match covered along
/// with the break offset; overlap is judged against those ranges, not
/// against the offsets alone.
#[derive(Debug, Default)]
struct BreakLedger {
    spans: Vec<Range<usize>>,
    offsets: BTreeSet<usize>,
}

impl BreakLedger {
    fn overlaps(&self, range: &Range<usize>) -> bool {
        self.spans
            .iter()
            .any(|span| span.start < range.end && range.start < span.end)
    }

    fn record_span(&mut self, span: Range<usize>, offset: usize) {
        self.spans.push(span);
        self.offsets.insert(offset);
    }

    fn record_offset(&mut self, offset: usize) {
        self.offsets.insert(offset);
    }

    fn has_offset(&self, offset: usize) -> bool {
        self.offsets.contains(&offset)
    }
}

/// Stage 1: run the four structural patterns in fixed order
fn structural_passes(
    text: &str,
    ledger: &mut BreakLedger,
    clock: &BudgetClock,
) -> Result<(), CoreError> {
    let passes = [
        &*patterns::NON_PERIOD_TERMINATOR,
        &*patterns::ELLIPSIS,
        &*patterns::CLOSED_TERMINATOR,
        &*patterns::OPENED_STARTER,
    ];

    for pass in passes {
        clock.check()?;
        for caps in pass.captures_iter(text) {
            let (Some(whole), Some(starter)) = (caps.get(0), caps.get(2)) else {
                continue;
            };
            let range = whole.range();
            if !ledger.overlaps(&range) {
                ledger.record_span(range, starter.start());
            }
        }
    }
    Ok(())
}

/// Stage 2: walk token bigrams and decide the remaining period cases
fn period_disambiguation(
    text: &str,
    lexicon: &PrefixLexicon,
    ledger: &mut BreakLedger,
    clock: &BudgetClock,
) -> Result<(), CoreError> {
    let mut tokens = patterns::TOKEN.find_iter(text).peekable();
    let mut pairs_walked = 0usize;

    while let Some(left) = tokens.next() {
        let Some(right) = tokens.peek().copied() else {
            break;
        };

        pairs_walked += 1;
        if pairs_walked % BUDGET_CHECK_INTERVAL == 0 {
            clock.check()?;
        }

        let offset = right.start();
        if ledger.has_offset(offset) {
            continue;
        }

        // Only tokens ending in a period run are break candidates.
        let Some(caps) = patterns::TRAILING_PERIODS.captures(left.as_str()) else {
            continue;
        };
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let starting_punct = caps.get(2).map_or("", |m| m.as_str());

        if is_known_abbreviation(lexicon, prefix, starting_punct) {
            continue;
        }
        if patterns::ACRONYM.is_match(left.as_str()) {
            continue;
        }
        if !patterns::SENTENCE_STARTER.is_match(right.as_str()) {
            continue;
        }
        if is_numeric_reference(lexicon, prefix, starting_punct, right.as_str()) {
            continue;
        }

        ledger.record_offset(offset);
    }
    Ok(())
}

/// A bare word part the lexicon lists as an always-non-breaking prefix
fn is_known_abbreviation(lexicon: &PrefixLexicon, prefix: &str, starting_punct: &str) -> bool {
    !prefix.is_empty()
        && starting_punct.is_empty()
        && lexicon.kind(prefix) == Some(PrefixKind::Default)
}

/// A numeric-only prefix directly followed by a digit-led token
fn is_numeric_reference(
    lexicon: &PrefixLexicon,
    prefix: &str,
    starting_punct: &str,
    next_token: &str,
) -> bool {
    !prefix.is_empty()
        && starting_punct.is_empty()
        && lexicon.kind(prefix) == Some(PrefixKind::NumericOnly)
        && patterns::DIGIT_START.is_match(next_token)
}

/// Pair every recorded byte offset with its character offset
fn resolve_offsets(text: &str, offsets: &BTreeSet<usize>) -> Vec<Boundary> {
    let mut boundaries = Vec::with_capacity(offsets.len());
    if offsets.is_empty() {
        return boundaries;
    }
    for (char_offset, (byte_offset, _)) in text.char_indices().enumerate() {
        if offsets.contains(&byte_offset) {
            boundaries.push(Boundary::new(byte_offset, char_offset));
        }
    }
    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_overlap_uses_match_ranges() {
        let mut ledger = BreakLedger::default();
        ledger.record_span(4..10, 7);

        assert!(ledger.overlaps(&(8..12)));
        assert!(ledger.overlaps(&(0..5)));
        assert!(!ledger.overlaps(&(10..14)));
        assert!(!ledger.overlaps(&(0..4)));
    }

    #[test]
    fn zero_budget_fails_immediately() {
        let lexicon = PrefixLexicon::new();
        let err = detect_boundaries("One. Two.", &lexicon, Some(Duration::ZERO))
            .expect_err("zero budget must trip");
        assert!(matches!(err, CoreError::BudgetExceeded { budget_ms: 0 }));
    }

    #[test]
    fn no_budget_never_trips() {
        let lexicon = PrefixLexicon::new();
        let boundaries = detect_boundaries("One. Two.", &lexicon, None).unwrap();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].byte_offset, 5);
    }

    #[test]
    fn multibyte_text_pairs_byte_and_char_offsets() {
        let lexicon = PrefixLexicon::new();
        let text = "Früh? Ja.";
        let boundaries = detect_boundaries(text, &lexicon, None).unwrap();
        assert_eq!(boundaries.len(), 1);
        // 'ü' is two bytes wide, so byte and char offsets diverge.
        assert_eq!(boundaries[0].byte_offset, 7);
        assert_eq!(boundaries[0].char_offset, 6);
    }
}
