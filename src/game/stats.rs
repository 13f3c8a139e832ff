//! Results across rounds

use tracing::info;

/// Win/loss record for every round played in this run
///
/// Owned by the caller and updated once per finished round through
/// [`GameStats::record_result`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    total_games: u32,
    games_won: u32,
    current_winning_streak: u32,
    current_losing_streak: u32,
    best_winning_streak: u32,
    worst_losing_streak: u32,
    won_last_game: bool,
}

impl GameStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a finished round
    ///
    /// Streaks only move when the outcome repeats the previous one: the matching
    /// streak grows by one and the opposite streak is broken. A result that
    /// differs from the last one only flips [`GameStats::won_last_game`], so a win
    /// straight after a loss does not start a winning streak. A fresh record counts
    /// as following a loss.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::game::GameStats;
    ///
    /// let mut stats = GameStats::new();
    /// stats.record_result(false);
    /// stats.record_result(true);
    /// assert_eq!(stats.current_winning_streak(), 0);
    /// assert_eq!(stats.current_losing_streak(), 1);
    ///
    /// stats.record_result(true);
    /// assert_eq!(stats.current_winning_streak(), 1);
    /// assert_eq!(stats.current_losing_streak(), 0);
    /// assert_eq!(stats.worst_losing_streak(), 1);
    /// ```
    pub fn record_result(&mut self, won: bool) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
        }

        if won == self.won_last_game {
            if won {
                self.current_winning_streak += 1;
                self.current_losing_streak = 0;
                self.best_winning_streak =
                    self.best_winning_streak.max(self.current_winning_streak);
            } else {
                self.current_losing_streak += 1;
                self.current_winning_streak = 0;
                self.worst_losing_streak =
                    self.worst_losing_streak.max(self.current_losing_streak);
            }
        }

        self.won_last_game = won;
        info!(
            won,
            total_games = self.total_games,
            games_won = self.games_won,
            winning_streak = self.current_winning_streak,
            losing_streak = self.current_losing_streak,
            "recorded round"
        );
    }

    #[inline]
    #[must_use]
    pub const fn total_games(&self) -> u32 {
        self.total_games
    }

    #[inline]
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    #[inline]
    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.total_games - self.games_won
    }

    #[inline]
    #[must_use]
    pub const fn current_winning_streak(&self) -> u32 {
        self.current_winning_streak
    }

    #[inline]
    #[must_use]
    pub const fn current_losing_streak(&self) -> u32 {
        self.current_losing_streak
    }

    #[inline]
    #[must_use]
    pub const fn best_winning_streak(&self) -> u32 {
        self.best_winning_streak
    }

    #[inline]
    #[must_use]
    pub const fn worst_losing_streak(&self) -> u32 {
        self.worst_losing_streak
    }

    #[inline]
    #[must_use]
    pub const fn won_last_game(&self) -> bool {
        self.won_last_game
    }

    /// Percentage of rounds won, rounded down (0 before any round)
    #[must_use]
    pub const fn win_percentage(&self) -> u32 {
        if self.total_games == 0 {
            0
        } else {
            100 * self.games_won / self.total_games
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all(results: &[bool]) -> GameStats {
        let mut stats = GameStats::new();
        for &won in results {
            stats.record_result(won);
        }
        stats
    }

    #[test]
    fn empty_stats() {
        let stats = GameStats::new();
        assert_eq!(stats.total_games(), 0);
        assert_eq!(stats.win_percentage(), 0);
        assert!(!stats.won_last_game());
    }

    #[test]
    fn totals_and_percentage() {
        let stats = record_all(&[true, false, true]);
        assert_eq!(stats.total_games(), 3);
        assert_eq!(stats.games_won(), 2);
        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.win_percentage(), 66);
    }

    #[test]
    fn first_loss_starts_losing_streak() {
        let stats = record_all(&[false]);
        assert_eq!(stats.current_losing_streak(), 1);
        assert_eq!(stats.worst_losing_streak(), 1);
    }

    #[test]
    fn first_win_does_not_start_streak() {
        let stats = record_all(&[true]);
        assert_eq!(stats.current_winning_streak(), 0);
        assert_eq!(stats.best_winning_streak(), 0);
        assert!(stats.won_last_game());
    }

    #[test]
    fn consecutive_wins_extend_streak() {
        let stats = record_all(&[true, true, true]);
        assert_eq!(stats.current_winning_streak(), 2);
        assert_eq!(stats.current_losing_streak(), 0);
        assert_eq!(stats.best_winning_streak(), 2);
        assert!(stats.won_last_game());
    }

    #[test]
    fn isolated_win_after_loss_leaves_streaks() {
        let stats = record_all(&[false, true]);
        assert_eq!(stats.current_winning_streak(), 0);
        assert_eq!(stats.current_losing_streak(), 1);
        assert_eq!(stats.worst_losing_streak(), 1);
        assert!(stats.won_last_game());
    }

    #[test]
    fn repeated_win_breaks_losing_streak() {
        let stats = record_all(&[false, false, true, true]);
        assert_eq!(stats.current_winning_streak(), 1);
        assert_eq!(stats.current_losing_streak(), 0);
        assert_eq!(stats.worst_losing_streak(), 2);
    }

    #[test]
    fn repeated_loss_breaks_winning_streak() {
        let stats = record_all(&[true, true, true, false]);
        assert_eq!(stats.current_winning_streak(), 2);
        assert_eq!(stats.current_losing_streak(), 0);

        let stats = record_all(&[true, true, true, false, false]);
        assert_eq!(stats.current_winning_streak(), 0);
        assert_eq!(stats.current_losing_streak(), 1);
        assert_eq!(stats.best_winning_streak(), 2);
        assert!(!stats.won_last_game());
    }

    #[test]
    fn records_keep_their_maximum() {
        let stats = record_all(&[false, false, false, true, true, true, false, false, true]);
        assert_eq!(stats.worst_losing_streak(), 3);
        assert_eq!(stats.best_winning_streak(), 2);
        assert_eq!(stats.current_winning_streak(), 0);
        assert_eq!(stats.current_losing_streak(), 1);
    }
}
