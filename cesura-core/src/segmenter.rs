//! Sentence assembly from boundary offsets

use crate::patterns;
use crate::types::Boundary;

/// Slice `text` into sentences at the given boundaries
///
/// Boundaries must be sorted ascending and lie inside the text, as
/// produced by [`crate::detect_boundaries`]. With `strip_whitespace`
/// off, the returned slices concatenate back to `text` byte for byte.
/// With it on, every run of two or more whitespace characters inside a
/// sentence collapses to a single space and the sentence is trimmed.
pub fn split_at_boundaries(
    text: &str,
    boundaries: &[Boundary],
    strip_whitespace: bool,
) -> Vec<String> {
    let mut sentences = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;

    for boundary in boundaries {
        sentences.push(&text[start..boundary.byte_offset]);
        start = boundary.byte_offset;
    }
    sentences.push(&text[start..]);

    if strip_whitespace {
        sentences
            .into_iter()
            .map(|sentence| {
                patterns::WHITESPACE_RUN
                    .replace_all(sentence, " ")
                    .trim()
                    .to_string()
            })
            .collect()
    } else {
        sentences.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(offsets: &[(usize, usize)]) -> Vec<Boundary> {
        offsets
            .iter()
            .map(|&(byte, ch)| Boundary::new(byte, ch))
            .collect()
    }

    #[test]
    fn raw_slices_reassemble_the_text() {
        let text = "Hey.  Now.";
        let sentences = split_at_boundaries(text, &boundaries(&[(6, 6)]), false);
        assert_eq!(sentences, vec!["Hey.  ", "Now."]);
        assert_eq!(sentences.concat(), text);
    }

    #[test]
    fn stripping_collapses_and_trims() {
        let text = "Hey.  Now\tthen.";
        let sentences = split_at_boundaries(text, &boundaries(&[(6, 6)]), true);
        assert_eq!(sentences, vec!["Hey.", "Now\tthen."]);
    }

    #[test]
    fn internal_runs_collapse_to_one_space() {
        let sentences = split_at_boundaries("A  B   C", &[], true);
        assert_eq!(sentences, vec!["A B C"]);
    }

    #[test]
    fn no_boundaries_yields_single_sentence() {
        let sentences = split_at_boundaries("Just one.", &[], false);
        assert_eq!(sentences, vec!["Just one."]);
    }
}
