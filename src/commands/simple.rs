//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Reads guesses and commands from any
//! `BufRead` and writes to any `Write`, so the whole loop runs under test.

use crate::core::{GameEngine, GameState, Guess, Score};
use crate::output::formatters::score_to_emoji;
use crate::output::locale::{
    Language, MessageKey, attempts_text, score_text, share_text, submit_error_message,
};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// What happened during a simple-mode session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_started: u32,
    pub games_won: u32,
}

/// Run the simple interactive mode until `quit` or end of input
///
/// Commands: `new`/`reset` start over (asking first if a game is in
/// progress), `hint` asks the solver, `lang` switches language, `quit` exits.
/// Anything else is submitted as a guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, S, I, O>(
    engine: &mut GameEngine<R>,
    solver: &Solver<S>,
    mut lang: Language,
    mut input: I,
    mut out: O,
) -> Result<SessionSummary>
where
    R: Rng,
    S: Strategy,
    I: BufRead,
    O: Write,
{
    let mut summary = SessionSummary::default();

    print_banner(&mut out, lang)?;

    let mut game = engine.start_game();
    let mut history: Vec<(Guess, Score)> = Vec::new();
    summary.games_started += 1;

    loop {
        write!(out, "{}: ", lang.text(MessageKey::InputPrompt))?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(out, "\n{}", lang.text(MessageKey::Goodbye))?;
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 {}\n", lang.text(MessageKey::Goodbye))?;
                break;
            }
            "new" | "n" | "reset" => {
                if in_progress(&game) {
                    writeln!(out, "{}", lang.text(MessageKey::ConfirmReset))?;
                    let answer = read_line(&mut input)?.unwrap_or_default();
                    if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
                        continue;
                    }
                }

                game = engine.reset_game();
                history.clear();
                summary.games_started += 1;
                writeln!(out, "\n🔄 {}\n", lang.text(MessageKey::NewGame))?;
            }
            "hint" | "h" | "?" => print_hint(&mut out, lang, &game, solver, &history)?,
            "lang" | "l" => {
                lang = lang.toggled();
                debug!(%lang, "language switched");
                print_banner(&mut out, lang)?;
            }
            _ => match game.submit_guess(&line) {
                Ok(turn) => {
                    history.push((turn.guess, turn.score));
                    writeln!(
                        out,
                        "  {}. {} {} {}",
                        turn.attempt.to_string().bright_black(),
                        turn.guess.to_string().bright_white().bold(),
                        score_to_emoji(turn.score),
                        styled_score(lang, turn.score)
                    )?;

                    if game.is_over() {
                        summary.games_won += 1;
                        print_celebration(&mut out, lang, &game, &history)?;
                    }
                }
                Err(err) => {
                    writeln!(out, "❌ {}", submit_error_message(lang, err).red())?;
                }
            },
        }
    }

    Ok(summary)
}

/// A started game with at least one guess and no win yet
const fn in_progress(game: &GameState) -> bool {
    game.attempts() > 0 && !game.is_over()
}

fn styled_score(lang: Language, score: Score) -> String {
    let text = score_text(lang, score);
    if score.is_perfect() {
        text.green().bold().to_string()
    } else if score.is_out() {
        text.bright_black().to_string()
    } else {
        text.yellow().to_string()
    }
}

fn print_banner(out: &mut impl Write, lang: Language) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "  ⚾ {}", lang.text(MessageKey::Title).bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", lang.text(MessageKey::Instructions))?;
    writeln!(out, "Commands: new, hint, lang, quit\n")?;
    Ok(())
}

fn print_hint<S: Strategy>(
    out: &mut impl Write,
    lang: Language,
    game: &GameState,
    solver: &Solver<S>,
    history: &[(Guess, Score)],
) -> Result<()> {
    if game.is_over() {
        writeln!(out, "{}", lang.text(MessageKey::AlertGameOver))?;
        return Ok(());
    }

    match solver.next_guess(history) {
        Some(guess) => writeln!(
            out,
            "💡 {} {} ({})",
            lang.text(MessageKey::Hint),
            guess.to_string().bright_yellow().bold(),
            solver.count_candidates(history)
        )?,
        None => writeln!(out, "{}", lang.text(MessageKey::NoHint))?,
    }
    Ok(())
}

fn print_celebration(
    out: &mut impl Write,
    lang: Language,
    game: &GameState,
    history: &[(Guess, Score)],
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "  {}",
        lang.text(MessageKey::GameOverTitle).bright_green().bold()
    )?;
    writeln!(out, "  {}", lang.text(MessageKey::GameOverMsg))?;
    writeln!(
        out,
        "  {} {}",
        lang.text(MessageKey::GameOverAttempts),
        attempts_text(lang, game.attempts()).bright_cyan().bold()
    )?;

    writeln!(out)?;
    for (i, (guess, score)) in history.iter().enumerate() {
        writeln!(out, "    {}. {guess} {}", i + 1, score_to_emoji(*score))?;
    }

    writeln!(out, "\n  {}", share_text(lang, game.attempts()))?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
