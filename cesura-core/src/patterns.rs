//! Compiled pattern set for the boundary engine
//!
//! All character classes are Unicode-aware: `\p{Lu}`/`\p{Lo}` cover
//! uppercase and unicased scripts, `\p{Pi}`/`\p{Pf}` cover typographic
//! quotation marks, and the inverted Spanish marks are included with the
//! opening punctuation explicitly.

use regex::Regex;
use std::sync::LazyLock;

/// Pass 1: non-period terminator (?!) followed by a sentence starter
pub(crate) static NON_PERIOD_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([?!]) +(['"(\[¿¡\p{Pi}]*[\p{Lu}\p{Lo}])"#)
        .expect("non-period terminator pattern compiles")
});

/// Pass 2: multi-dot ellipsis followed by a sentence starter
pub(crate) static ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\.\.+) +(['"(\[¿¡\p{Pi}]*[\p{Lu}\p{Lo}])"#).expect("ellipsis pattern compiles")
});

/// Pass 3: terminator closed by quote/bracket punctuation, then a starter
pub(crate) static CLOSED_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([?!.][ ]*['")\]\p{Pf}]+) +(['"(\[¿¡\p{Pi}]*[ ]*[\p{Lu}\p{Lo}])"#)
        .expect("closed terminator pattern compiles")
});

/// Pass 4: bare terminator followed by opening punctuation and a starter
///
/// Narrower starter class than the other passes: the original rule set
/// requires at least one quote-like opener here and does not count '('.
pub(crate) static OPENED_STARTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([?!.]) +(['"\[¿¡\p{Pi}]+[ ]*[\p{Lu}\p{Lo}])"#)
        .expect("opened starter pattern compiles")
});

/// Trailing period run at the end of a token, with its word part and any
/// closing punctuation between the two captured separately
pub(crate) static TRAILING_PERIODS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w.\-]*)(['")\]%\p{Pf}]*)(\.+)$"#).expect("trailing period pattern compiles")
});

/// Acronym-shaped token: a period, letters, and a final period run
/// (".NATO.", "U.S.A.")
pub(crate) static ACRONYM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.[\p{Lu}\p{Lo}\-]+\.+$"#).expect("acronym pattern compiles")
});

/// Token that looks like the start of a new sentence: optional opening
/// punctuation, then an uppercase-class letter or a digit
pub(crate) static SENTENCE_STARTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[ ]*['"(\[¿¡\p{Pi}]*[ ]*[\p{Lu}\p{Lo}0-9]"#)
        .expect("sentence starter pattern compiles")
});

/// Token that starts with an ASCII digit
pub(crate) static DIGIT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]").expect("digit start pattern compiles"));

/// Non-whitespace token scanner
pub(crate) static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("token pattern compiles"));

/// Run of two or more whitespace characters
pub(crate) static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace run pattern compiles"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_classes_cover_unicode_quotes() {
        assert!(NON_PERIOD_TERMINATOR.is_match("¿Qué? «Sí»"));
        assert!(CLOSED_TERMINATOR.is_match("kalibriert.» Danach"));
        assert!(OPENED_STARTER.is_match("frases. «Mas"));
    }

    #[test]
    fn trailing_periods_splits_word_and_punct() {
        let caps = TRAILING_PERIODS.captures("etc.").unwrap();
        assert_eq!(&caps[1], "etc");
        assert_eq!(&caps[2], "");
        assert_eq!(&caps[3], ".");

        assert!(
            TRAILING_PERIODS.captures("foo.)").is_none(),
            "no trailing period run after ')'"
        );

        let caps = TRAILING_PERIODS.captures("(bar).").unwrap();
        assert_eq!(&caps[1], "bar");
        assert_eq!(&caps[2], ")");
        assert_eq!(&caps[3], ".");
    }

    #[test]
    fn acronym_matches_dotted_capitals() {
        assert!(ACRONYM.is_match(".NATO."));
        assert!(ACRONYM.is_match("U.S.A."));
        assert!(!ACRONYM.is_match("etc."));
    }

    #[test]
    fn starter_requires_upper_or_digit() {
        assert!(SENTENCE_STARTER.is_match("Now"));
        assert!(SENTENCE_STARTER.is_match("(Baz"));
        assert!(SENTENCE_STARTER.is_match("1."));
        assert!(SENTENCE_STARTER.is_match("\u{201C}Quoted"));
        assert!(!SENTENCE_STARTER.is_match("lower"));
        assert!(!SENTENCE_STARTER.is_match(".NATO."));
        assert!(!SENTENCE_STARTER.is_match("(«"));
    }
}
