//! TUI rendering with ratatui
//!
//! Layout: header, round and history on the left, record and messages on the
//! right, input box and status bar at the bottom.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{bull_cow_squares, create_progress_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Round and history
            Constraint::Percentage(40), // Record and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS & COWS 🐄 - Guess the Isogram")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Round info
            Constraint::Min(5),    // History
        ])
        .split(area);

    render_round(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_round(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Round ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(session) = app.session.as_ref() else {
        let bounds = app.game.bounds();
        let paragraph = Paragraph::new(vec![
            Line::from("No round in progress."),
            Line::from(format!(
                "Pick a word length between {} and {}.",
                bounds.min(),
                bounds.max()
            )),
        ])
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let length = session.hidden_word_length();
    let max_tries = session.max_tries();
    let used = max_tries - session.tries_remaining();
    let tries_bar = create_progress_bar(f64::from(used), f64::from(max_tries), 20);

    let outcome = if session.is_won() {
        Span::styled(
            "Solved!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if session.is_over() {
        Span::styled(
            "Out of tries",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("Try {} of {max_tries}", session.current_try()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let content = vec![
        Line::from(vec![Span::raw("Status:      "), outcome]),
        Line::from(format!("Letters:     {length}")),
        Line::from(format!("Tries used:  [{tries_bar}] {used}/{max_tries}")),
        Line::from(format!(
            "Dictionary:  {} words",
            app.game.dictionary_size(length)
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let length = app
        .session
        .as_ref()
        .map_or(0, |session| session.hidden_word_length());

    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let style = if entry.count.is_perfect(length) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}: ", entry.try_number),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<8}", entry.guess.to_uppercase()),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(bull_cow_squares(entry.count, length)),
                Span::raw(format!(
                    "  {} bulls, {} cows",
                    entry.count.bulls, entry.count.cows
                )),
            ]))
        })
        .collect();

    let history = List::new(history_items).block(
        Block::default()
            .title(" Guesses (🟩 bull  🟨 cow) ")
            .borders(Borders::ALL),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Length(7), // Streaks
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_record(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(stats.win_percentage().min(100) as u16)
        .label(format!(
            "{}% | {} won of {}",
            stats.win_percentage(),
            stats.games_won(),
            stats.total_games()
        ));

    f.render_widget(gauge, area);
}

fn render_record(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;

    let content = vec![
        Line::from(format!("Games lost:            {}", stats.games_lost())),
        Line::from(format!(
            "Current winning streak: {}",
            stats.current_winning_streak()
        )),
        Line::from(format!(
            "Current losing streak:  {}",
            stats.current_losing_streak()
        )),
        Line::from(format!(
            "Best winning streak:    {}",
            stats.best_winning_streak()
        )),
        Line::from(format!(
            "Worst losing streak:    {}",
            stats.worst_losing_streak()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Record ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let won = app.session.as_ref().is_some_and(|session| session.is_won());

    let (title, content, color) = match app.input_mode {
        InputMode::WordLength => (
            " Enter Word Length | Enter to confirm ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Guess => (
            " Enter Your Guess (lowercase isogram) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver if won => (
            " 🎉 CONGRATULATIONS! 🎉 | 1: new word  2: new length  q: quit ",
            "",
            Color::Green,
        ),
        InputMode::RoundOver => (
            " Round over | 1: new word  2: new length  3: same word  q: quit ",
            "",
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::WordLength => "Mode: Choosing length",
        InputMode::Guess => "Mode: Guessing",
        InputMode::RoundOver => "Mode: Round over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let words_text = format!("Dictionary: {} words", app.game.index().total_words());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help = Paragraph::new("Esc / Ctrl-C: Quit | Enter: Submit | Backspace: Delete")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::wordlists::WordIndex;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let index = WordIndex::from_lines(["cat", "plan"]).unwrap();
        App::new(Game::with_seed(index, 11))
    }

    #[test]
    fn renders_length_prompt() {
        let screen = render(&app());
        assert!(screen.contains("No round in progress."));
        assert!(screen.contains("Mode: Choosing length"));
    }

    #[test]
    fn renders_round_and_history() {
        let mut app = app();
        app.start_round(4).unwrap();
        app.handle_guess("apln");

        let screen = render(&app);
        assert!(screen.contains("Try 2 of 8"));
        assert!(screen.contains("APLN"));
        assert!(screen.contains("1 bulls, 3 cows"));
        assert!(screen.contains("Mode: Guessing"));
    }

    #[test]
    fn renders_round_over() {
        let mut app = app();
        app.start_round(3).unwrap();
        app.handle_guess("cat");

        let screen = render(&app);
        assert!(screen.contains("Solved!"));
        assert!(screen.contains("CONGRATULATIONS"));
        assert!(screen.contains("100% | 1 won of 1"));
    }
}
