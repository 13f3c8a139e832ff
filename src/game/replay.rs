//! Choices offered after a round ends

/// What to do after a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    /// New hidden word of the same length
    DifferentWord,
    /// Pick a new word length
    DifferentLength,
    /// Replay the same hidden word (only after a loss)
    SameWord,
    Quit,
}

impl ReplayChoice {
    /// Parse a menu response from its first character
    ///
    /// `1` different word, `2` different length, `3` same word, `q`/`Q` quit.
    /// The same word can only be replayed after losing, so `3` is rejected when
    /// `won` is true. Returns `None` for anything else so the menu can ask again.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::game::ReplayChoice;
    ///
    /// assert_eq!(ReplayChoice::parse("1", false), Some(ReplayChoice::DifferentWord));
    /// assert_eq!(ReplayChoice::parse("3", true), None);
    /// assert_eq!(ReplayChoice::parse("quit", true), Some(ReplayChoice::Quit));
    /// ```
    #[must_use]
    pub fn parse(response: &str, won: bool) -> Option<Self> {
        match response.trim().chars().next()? {
            '1' => Some(Self::DifferentWord),
            '2' => Some(Self::DifferentLength),
            '3' if !won => Some(Self::SameWord),
            'q' | 'Q' => Some(Self::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(ReplayChoice::parse("1", true), Some(ReplayChoice::DifferentWord));
        assert_eq!(ReplayChoice::parse("2", true), Some(ReplayChoice::DifferentLength));
        assert_eq!(ReplayChoice::parse("3", false), Some(ReplayChoice::SameWord));
        assert_eq!(ReplayChoice::parse("Q", false), Some(ReplayChoice::Quit));
        assert_eq!(ReplayChoice::parse("q", true), Some(ReplayChoice::Quit));
    }

    #[test]
    fn same_word_refused_after_win() {
        assert_eq!(ReplayChoice::parse("3", true), None);
    }

    #[test]
    fn only_first_character_counts() {
        assert_eq!(ReplayChoice::parse("12", false), Some(ReplayChoice::DifferentWord));
        assert_eq!(ReplayChoice::parse("  2 please", false), Some(ReplayChoice::DifferentLength));
    }

    #[test]
    fn unknown_responses_ask_again() {
        assert_eq!(ReplayChoice::parse("", false), None);
        assert_eq!(ReplayChoice::parse("   ", false), None);
        assert_eq!(ReplayChoice::parse("4", false), None);
        assert_eq!(ReplayChoice::parse("yes", false), None);
    }
}
