//! Isogram dictionaries
//!
//! Provides the embedded dictionary compiled into the binary and the index that
//! groups a dictionary by word length.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{ISOGRAMS, ISOGRAMS_COUNT};
pub use index::WordIndex;
pub use loader::LoadError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ABSOLUTE_MAX_LENGTH, ABSOLUTE_MIN_LENGTH, is_isogram, is_lowercase};

    #[test]
    fn isograms_count_matches_const() {
        assert_eq!(ISOGRAMS.len(), ISOGRAMS_COUNT);
    }

    #[test]
    fn isograms_are_valid_words() {
        for &word in ISOGRAMS {
            assert!(
                (ABSOLUTE_MIN_LENGTH..=ABSOLUTE_MAX_LENGTH).contains(&word.len()),
                "Word '{word}' has an unsupported length"
            );
            assert!(is_lowercase(word), "Word '{word}' contains non-lowercase chars");
            assert!(is_isogram(word), "Word '{word}' repeats a letter");
        }
    }

    #[test]
    fn isograms_cover_every_length() {
        let index = loader::index_from_slice(ISOGRAMS).unwrap();
        for length in ABSOLUTE_MIN_LENGTH..=ABSOLUTE_MAX_LENGTH {
            assert!(
                index.dictionary_size(length) > 0,
                "No embedded isograms of length {length}"
            );
        }
        assert_eq!(index.bounds().min(), ABSOLUTE_MIN_LENGTH);
        assert_eq!(index.bounds().max(), ABSOLUTE_MAX_LENGTH);
    }

    #[test]
    fn isograms_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ISOGRAMS.iter().collect();
        assert_eq!(unique.len(), ISOGRAMS.len());
    }
}
