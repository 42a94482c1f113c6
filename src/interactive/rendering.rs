//! TUI rendering with ratatui
//!
//! Layout and widgets for the number baseball screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{DIGIT_COUNT, SECRET_SPACE};
use crate::output::formatters::score_to_emoji;
use crate::output::locale::{MessageKey, attempts_text, score_text};
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
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("⚾ {}", app.lang.text(MessageKey::Title)))
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

/// Guesses so far, newest on top
fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|turn| {
            let color = if turn.score.is_perfect() {
                Color::Green
            } else if turn.score.is_out() {
                Color::DarkGray
            } else {
                Color::Yellow
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", turn.attempt),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    turn.guess.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(score_to_emoji(turn.score)),
                Span::raw("  "),
                Span::styled(score_text(app.lang, turn.score), Style::default().fg(color)),
            ]))
        })
        .collect();

    let title = format!(
        " {}: {} ",
        app.lang.text(MessageKey::Attempts),
        app.game.attempts()
    );
    let history = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Length(5), // Rules
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_rules(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (SECRET_SPACE as f64).log2();
    let remaining = app.candidates_count();
    let bits_gained = total_bits - (remaining.max(1) as f64).log2();
    let progress_pct = (bits_gained / total_bits * 100.0).clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {remaining} candidates"
        ));

    f.render_widget(gauge, area);
}

fn render_rules(f: &mut Frame, app: &App, area: Rect) {
    let rules = Paragraph::new(app.lang.text(MessageKey::Instructions))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(rules, area);
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
    let lang = app.lang;
    let prompt;
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => {
            prompt = format!(
                " {} {} | r: new game  s: share  q: quit ",
                lang.text(MessageKey::GameOverTitle),
                attempts_text(lang, app.game.attempts())
            );
            (prompt.as_str(), String::new(), Color::Green)
        }
        InputMode::ConfirmReset => (
            lang.text(MessageKey::ConfirmReset),
            String::new(),
            Color::Magenta,
        ),
        InputMode::Guessing => {
            prompt = format!(" {} ", lang.text(MessageKey::InputPrompt));
            let slots = format!(
                "{}{}",
                app.input_buffer,
                "_".repeat(DIGIT_COUNT.saturating_sub(app.input_buffer.len()))
            );
            (prompt.as_str(), slots, Color::Yellow)
        }
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
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(45),
        ])
        .split(area);

    let lang = Paragraph::new(format!("Lang: {}", app.lang)).alignment(Alignment::Center);
    f.render_widget(lang, chunks[0]);

    let stats = &app.stats;
    let stats_text = match (stats.average_attempts(), stats.best) {
        (Some(avg), Some(best)) => format!(
            "Won: {}/{} | Avg: {avg:.1} | Best: {best}",
            stats.games_won, stats.games_played
        ),
        _ => format!("Won: {}/{}", stats.games_won, stats.games_played),
    };
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Enter: Submit | ?: Hint | r: Reset | l: Lang | q: Quit",
        InputMode::ConfirmReset => "y: Yes | n: No",
        InputMode::WinCelebration => "r: New Game | s: Share | l: Lang | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEngine;
    use crate::output::locale::Language;
    use crate::solver::{HybridStrategy, Solver, StrategyType};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_title_and_prompt() {
        let app = App::new(
            GameEngine::seeded(1),
            Solver::new(StrategyType::Hybrid(HybridStrategy::default())),
            Language::English,
        );
        let text = screen(&app);

        assert!(text.contains("Number Baseball"));
        assert!(text.contains("Enter 3 digits"));
        assert!(text.contains("720 candidates"));
    }

    #[test]
    fn renders_guesses_in_history() {
        let mut app = App::new(
            GameEngine::seeded(1),
            Solver::new(StrategyType::Hybrid(HybridStrategy::default())),
            Language::English,
        );
        let guess = if app.game.secret().to_string() == "987" { "789" } else { "987" };
        app.input_buffer = guess.to_string();
        app.submit();

        let text = screen(&app);
        assert!(text.contains(guess));
        assert!(text.contains("Attempts: 1"));
    }
}
