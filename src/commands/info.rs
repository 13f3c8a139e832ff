//! Dictionary summary command

use crate::core::{LengthBounds, max_tries};
use crate::wordlists::WordIndex;

/// Words and try budget for one word length
#[derive(Debug, Clone, Copy)]
pub struct LengthInfo {
    pub length: usize,
    pub words: usize,
    pub max_tries: u32,
}

/// Summary of a loaded dictionary
#[derive(Debug, Clone)]
pub struct DictionaryInfo {
    pub source: String,
    pub total_words: usize,
    pub bounds: LengthBounds,
    pub lengths: Vec<LengthInfo>,
}

/// Summarize `index`, labelled with where it was loaded from
#[must_use]
pub fn dictionary_info(index: &WordIndex, source: &str) -> DictionaryInfo {
    let bounds = index.bounds();
    let lengths = bounds
        .lengths()
        .map(|length| LengthInfo {
            length,
            words: index.dictionary_size(length),
            max_tries: max_tries(length),
        })
        .collect();

    DictionaryInfo {
        source: source.to_string(),
        total_words: index.total_words(),
        bounds,
        lengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_length_in_bounds() {
        let index = WordIndex::from_lines(["cat", "dog", "crane", "planet"]).unwrap();
        let info = dictionary_info(&index, "test");

        assert_eq!(info.source, "test");
        assert_eq!(info.total_words, 4);
        assert_eq!(info.bounds, LengthBounds::new(3, 6));

        let rows: Vec<_> = info
            .lengths
            .iter()
            .map(|l| (l.length, l.words, l.max_tries))
            .collect();
        assert_eq!(rows, vec![(3, 2, 5), (4, 0, 8), (5, 1, 10), (6, 1, 15)]);
    }
}
