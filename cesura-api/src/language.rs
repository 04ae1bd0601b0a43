//! Embedded per-language prefix resources
//!
//! Prefix lists live under `configs/non_breaking_prefixes/` at the
//! workspace root, one line-oriented UTF-8 file per ISO 639-1 code, and
//! are compiled into the binary. Parsing happens once, on first access.

use cesura_core::PrefixLexicon;
use std::collections::HashMap;
use std::sync::OnceLock;

static PREFIX_LEXICONS: OnceLock<HashMap<&'static str, PrefixLexicon>> = OnceLock::new();

macro_rules! embed_prefix_list {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_PREFIX_LISTS: &[(&str, &str)] = &[
    embed_prefix_list!("ca", "../../configs/non_breaking_prefixes/ca.txt"),
    embed_prefix_list!("cs", "../../configs/non_breaking_prefixes/cs.txt"),
    embed_prefix_list!("da", "../../configs/non_breaking_prefixes/da.txt"),
    embed_prefix_list!("de", "../../configs/non_breaking_prefixes/de.txt"),
    embed_prefix_list!("el", "../../configs/non_breaking_prefixes/el.txt"),
    embed_prefix_list!("en", "../../configs/non_breaking_prefixes/en.txt"),
    embed_prefix_list!("es", "../../configs/non_breaking_prefixes/es.txt"),
    embed_prefix_list!("fi", "../../configs/non_breaking_prefixes/fi.txt"),
    embed_prefix_list!("fr", "../../configs/non_breaking_prefixes/fr.txt"),
    embed_prefix_list!("hu", "../../configs/non_breaking_prefixes/hu.txt"),
    embed_prefix_list!("it", "../../configs/non_breaking_prefixes/it.txt"),
    embed_prefix_list!("lt", "../../configs/non_breaking_prefixes/lt.txt"),
    embed_prefix_list!("lv", "../../configs/non_breaking_prefixes/lv.txt"),
    embed_prefix_list!("nl", "../../configs/non_breaking_prefixes/nl.txt"),
    embed_prefix_list!("no", "../../configs/non_breaking_prefixes/no.txt"),
    embed_prefix_list!("pl", "../../configs/non_breaking_prefixes/pl.txt"),
    embed_prefix_list!("pt", "../../configs/non_breaking_prefixes/pt.txt"),
    embed_prefix_list!("ro", "../../configs/non_breaking_prefixes/ro.txt"),
    embed_prefix_list!("ru", "../../configs/non_breaking_prefixes/ru.txt"),
    embed_prefix_list!("sk", "../../configs/non_breaking_prefixes/sk.txt"),
    embed_prefix_list!("sl", "../../configs/non_breaking_prefixes/sl.txt"),
    embed_prefix_list!("sv", "../../configs/non_breaking_prefixes/sv.txt"),
    embed_prefix_list!("tr", "../../configs/non_breaking_prefixes/tr.txt"),
];

fn lexicons() -> &'static HashMap<&'static str, PrefixLexicon> {
    PREFIX_LEXICONS.get_or_init(|| {
        EMBEDDED_PREFIX_LISTS
            .iter()
            .map(|&(code, raw)| (code, PrefixLexicon::from_lines(raw.lines())))
            .collect()
    })
}

/// Look up the embedded lexicon for a language code
pub(crate) fn builtin_lexicon(code: &str) -> Option<&'static PrefixLexicon> {
    lexicons().get(code)
}

/// Whether `code` is a well-formed 2-letter lowercase language code
pub(crate) fn is_valid_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}

/// Language codes with an embedded prefix resource, sorted
pub fn available_languages() -> Vec<&'static str> {
    let mut codes: Vec<_> = lexicons().keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_iso_639_1_shape() {
        assert!(is_valid_code("en"));
        assert!(is_valid_code("xx"));
        assert!(!is_valid_code("EN"));
        assert!(!is_valid_code("eng"));
        assert!(!is_valid_code("e"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("/etc/passwd"));
    }

    #[test]
    fn embedded_resources_parse_non_empty() {
        for (code, _) in EMBEDDED_PREFIX_LISTS {
            let lexicon = builtin_lexicon(code).expect("embedded lexicon exists");
            assert!(!lexicon.is_empty(), "prefix list for '{code}' is empty");
        }
    }

    #[test]
    fn available_languages_is_sorted_and_complete() {
        let languages = available_languages();
        assert_eq!(languages.len(), EMBEDDED_PREFIX_LISTS.len());
        assert!(languages.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(languages.contains(&"en"));
        assert!(languages.contains(&"de"));
    }

    #[test]
    fn unknown_code_has_no_lexicon() {
        assert!(builtin_lexicon("xx").is_none());
        assert!(builtin_lexicon("zz").is_none());
    }
}
