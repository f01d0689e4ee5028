//! Word lists for the helper
//!
//! A default dictionary is embedded in the binary; custom lists are loaded from
//! plain text files with [`loader::load_from_file`].

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{Dictionary, LoadError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_no_duplicates() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_contains_common_openers() {
        let dictionary = Dictionary::embedded();
        for opener in ["crane", "slate", "arose", "raise"] {
            let word = crate::core::Word::new(opener).unwrap();
            assert!(dictionary.contains(&word), "missing '{opener}'");
        }
    }
}
