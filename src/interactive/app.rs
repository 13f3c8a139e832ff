//! TUI application state and logic

use crate::core::{BullCowCount, LengthStatus};
use crate::game::{Game, GameSession, GameStats, ReplayChoice};
use crate::output::formatters::{guess_status_message, length_status_message, pluralize};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub stats: GameStats,
    pub session: Option<GameSession>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    WordLength,
    Guess,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub try_number: u32,
    pub guess: String,
    pub count: BullCowCount,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self::with_stats(game, GameStats::new())
    }

    /// Create the app continuing an existing record
    #[must_use]
    pub fn with_stats(game: Game, stats: GameStats) -> Self {
        let bounds = game.bounds();

        Self {
            game,
            stats,
            session: None,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the isogram: a word with no repeating letters."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!(
                        "Choose a word length between {} and {}.",
                        bounds.min(),
                        bounds.max()
                    ),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::WordLength,
            should_quit: false,
        }
    }

    /// Submit the input buffer in the current mode
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary has no words for the chosen length.
    pub fn submit_input(&mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input_buffer);

        match self.input_mode {
            InputMode::WordLength => self.handle_word_length(&input)?,
            InputMode::Guess => self.handle_guess(&input),
            InputMode::RoundOver => {}
        }

        Ok(())
    }

    /// Validate a requested word length and start a round with it
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary has no words for the chosen length.
    pub fn handle_word_length(&mut self, input: &str) -> Result<()> {
        let status = self.game.check_word_length(input);

        if let LengthStatus::Ok(length) = status {
            self.start_round(length)?;
        } else if let Some(problem) = length_status_message(status, self.game.bounds()) {
            self.add_message(&problem, MessageStyle::Error);
        }

        Ok(())
    }

    /// Draw a new hidden word of `length` letters
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary has no words of that length.
    pub fn start_round(&mut self, length: usize) -> Result<()> {
        let session = self.game.new_session(length)?;
        self.begin(session);
        Ok(())
    }

    fn begin(&mut self, session: GameSession) {
        let length = session.hidden_word_length();
        self.add_message(
            &format!(
                "New {length} letter isogram chosen from {} words. {} tries to find it!",
                self.game.dictionary_size(length),
                session.max_tries()
            ),
            MessageStyle::Info,
        );

        self.session = Some(session);
        self.history.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::Guess;
    }

    /// Validate and score a guess, ending the round when it is won or lost
    pub fn handle_guess(&mut self, guess: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let status = session.check_guess(guess);
        if let Some(problem) = guess_status_message(status, session.hidden_word_length()) {
            self.add_message(&problem, MessageStyle::Error);
            return;
        }

        let try_number = session.current_try();
        let count = session.submit_valid_guess(guess);
        let over = session.is_over();

        self.history.push(HistoryEntry {
            try_number,
            guess: guess.to_string(),
            count,
        });

        if over {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let won = session.is_won();
        let under_par = session.turns_under_par();
        self.stats.record_result(won);
        self.input_mode = InputMode::RoundOver;

        match under_par {
            Some(0) => self.add_message("🎉 You won, right on par!", MessageStyle::Success),
            Some(turns) => self.add_message(
                &format!("🎉 You won with {} under par!", pluralize(turns, "turn")),
                MessageStyle::Success,
            ),
            None => self.add_message("Sorry, you ran out of tries.", MessageStyle::Error),
        }

        let menu = if won {
            "1: different word | 2: different length | q: quit"
        } else {
            "1: different word | 2: different length | 3: same word | q: quit"
        };
        self.add_message(menu, MessageStyle::Info);
    }

    /// Act on the choice made after a round
    ///
    /// # Errors
    ///
    /// Returns an error if a new hidden word cannot be drawn.
    pub fn handle_replay(&mut self, choice: ReplayChoice) -> Result<()> {
        match choice {
            ReplayChoice::SameWord => {
                if let Some(mut session) = self.session.take() {
                    session.reset();
                    self.add_message("Same word again. Good luck!", MessageStyle::Info);
                    self.session = Some(session);
                    self.history.clear();
                    self.input_mode = InputMode::Guess;
                }
            }
            ReplayChoice::DifferentWord => {
                if let Some(length) = self.session.as_ref().map(GameSession::hidden_word_length) {
                    self.start_round(length)?;
                }
            }
            ReplayChoice::DifferentLength => {
                let bounds = self.game.bounds();
                self.session = None;
                self.history.clear();
                self.input_mode = InputMode::WordLength;
                self.add_message(
                    &format!(
                        "Choose a word length between {} and {}.",
                        bounds.min(),
                        bounds.max()
                    ),
                    MessageStyle::Info,
                );
            }
            ReplayChoice::Quit => self.should_quit = true,
        }

        Ok(())
    }

    /// Handle a key pressed on the round-over menu
    ///
    /// # Errors
    ///
    /// Returns an error if a new hidden word cannot be drawn.
    pub fn handle_menu_key(&mut self, key: char) -> Result<()> {
        let won = self.session.as_ref().is_some_and(GameSession::is_won);

        match ReplayChoice::parse(&key.to_string(), won) {
            Some(choice) => self.handle_replay(choice),
            None => {
                self.add_message("Please choose an option from the menu.", MessageStyle::Error);
                Ok(())
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the record of every round played.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a hidden word cannot be drawn.
pub fn run_tui(app: App) -> Result<GameStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<GameStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) if app.input_mode == InputMode::RoundOver => {
                    app.handle_menu_key(c)?;
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_input()?;
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordIndex;

    fn single_word_app() -> App {
        let index = WordIndex::from_lines(["cat", "plan"]).unwrap();
        App::new(Game::with_seed(index, 5))
    }

    fn last_message(app: &App) -> &Message {
        app.messages.last().unwrap()
    }

    #[test]
    fn starts_asking_for_length() {
        let app = single_word_app();
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(app.session.is_none());
        assert!(app.messages[1].text.contains("between 3 and 4"));
    }

    #[test]
    fn invalid_length_stays_in_length_mode() {
        let mut app = single_word_app();
        app.handle_word_length("seven").unwrap();
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert_eq!(last_message(&app).text, "Please enter a number.");
        assert_eq!(last_message(&app).style, MessageStyle::Error);

        app.handle_word_length("8").unwrap();
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(last_message(&app).text.contains("between 3 and 4"));
    }

    #[test]
    fn valid_length_starts_round() {
        let mut app = single_word_app();
        app.input_buffer = "4".to_string();
        app.submit_input().unwrap();

        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.input_buffer.is_empty());
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.hidden_word_length(), 4);
        assert!(last_message(&app).text.contains("8 tries"));
    }

    #[test]
    fn rejected_guess_not_recorded() {
        let mut app = single_word_app();
        app.start_round(4).unwrap();
        app.handle_guess("PLAN");

        assert!(app.history.is_empty());
        assert_eq!(last_message(&app).text, "Please enter all lowercase letters.");
        assert_eq!(app.session.as_ref().unwrap().current_try(), 1);
    }

    #[test]
    fn guesses_build_history_until_win() {
        let mut app = single_word_app();
        app.start_round(4).unwrap();
        app.handle_guess("apln");
        app.handle_guess("plan");

        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[0].try_number, 1);
        assert_eq!(app.history[0].count, BullCowCount::new(1, 3));
        assert_eq!(app.history[1].count, BullCowCount::new(4, 0));
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_won(), 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("6 turns under par"))
        );
    }

    #[test]
    fn loss_then_same_word() {
        let mut app = single_word_app();
        app.start_round(3).unwrap();
        for _ in 0..5 {
            app.handle_guess("dog");
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_lost(), 1);

        app.handle_menu_key('3').unwrap();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.history.is_empty());
        assert_eq!(app.session.as_ref().unwrap().current_try(), 1);
        assert_eq!(app.session.as_ref().unwrap().hidden_word(), "cat");
    }

    #[test]
    fn same_word_refused_after_win() {
        let mut app = single_word_app();
        app.start_round(3).unwrap();
        app.handle_guess("cat");
        app.handle_menu_key('3').unwrap();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(last_message(&app).style, MessageStyle::Error);
    }

    #[test]
    fn different_word_and_length() {
        let mut app = single_word_app();
        app.start_round(3).unwrap();
        app.handle_guess("cat");

        app.handle_menu_key('1').unwrap();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.session.as_ref().unwrap().hidden_word_length(), 3);

        app.handle_guess("cat");
        app.handle_menu_key('2').unwrap();
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(app.session.is_none());
        assert_eq!(app.stats.total_games(), 2);
        assert_eq!(app.stats.current_winning_streak(), 1);
    }

    #[test]
    fn quit_from_menu() {
        let mut app = single_word_app();
        app.start_round(3).unwrap();
        app.handle_guess("cat");
        app.handle_menu_key('q').unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = single_word_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
