//! Dictionary of isograms grouped by length

use super::loader::LoadError;
use crate::core::{ABSOLUTE_MAX_LENGTH, ABSOLUTE_MIN_LENGTH, LengthBounds};
use rustc_hash::FxHashMap;

/// Words grouped by their length
///
/// Built once from raw lines and read-only afterwards. Every stored word has exactly
/// the length it is filed under. Words are not checked for repeated letters or case;
/// guesses are validated when they are played instead.
#[derive(Debug, Clone)]
pub struct WordIndex {
    words: FxHashMap<usize, Vec<String>>,
    bounds: LengthBounds,
}

impl WordIndex {
    /// Build an index from candidate lines
    ///
    /// Surrounding whitespace is trimmed. Lines shorter than
    /// [`ABSOLUTE_MIN_LENGTH`] or longer than [`ABSOLUTE_MAX_LENGTH`] are skipped,
    /// and the bounds are the shortest and longest lengths that remain.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoUsableContent`] if no line has a supported length.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::wordlists::WordIndex;
    ///
    /// let index = WordIndex::from_lines(["plan", "cat", "ox", "planet"]).unwrap();
    /// assert_eq!(index.words(4), ["plan"]);
    /// assert_eq!(index.bounds().min(), 3);
    /// assert_eq!(index.bounds().max(), 6);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        let mut shortest: Option<usize> = None;
        let mut longest: Option<usize> = None;

        for line in lines {
            let word = line.as_ref().trim();
            let length = word.len();
            if !(ABSOLUTE_MIN_LENGTH..=ABSOLUTE_MAX_LENGTH).contains(&length) {
                continue;
            }

            words.entry(length).or_default().push(word.to_string());
            shortest = Some(shortest.map_or(length, |s| s.min(length)));
            longest = Some(longest.map_or(length, |l| l.max(length)));
        }

        match (shortest, longest) {
            (Some(min), Some(max)) => Ok(Self {
                words,
                bounds: LengthBounds::new(min, max),
            }),
            _ => Err(LoadError::NoUsableContent),
        }
    }

    /// Words of exactly `length` letters, in load order
    ///
    /// Returns an empty slice for lengths with no words.
    #[must_use]
    pub fn words(&self, length: usize) -> &[String] {
        self.words.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Number of words of exactly `length` letters
    #[must_use]
    pub fn dictionary_size(&self, length: usize) -> usize {
        self.words(length).len()
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Shortest and longest word lengths present
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> LengthBounds {
        self.bounds
    }
}
