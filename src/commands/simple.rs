//! Simple interactive CLI mode
//!
//! Line-based game without TUI. The timer is checked every time a line arrives, so
//! an answer typed after the deadline costs a life and is discarded.

use crate::engine::{Clock, GuessOutcome, RoundEngine, RoundState, Tick};
use crate::output::formatters::{lives_hearts, used_letters_text};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<C: Clock>(engine: &mut RoundEngine<C>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(engine, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple mode over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn run_simple_with<C, R, W>(
    engine: &mut RoundEngine<C>,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Hangman - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Level: {}", engine.level())?;
    writeln!(
        out,
        "You have {} seconds to guess each letter and {} lives.",
        engine.round_time().as_secs(),
        engine.max_lives()
    )?;
    writeln!(out, "Type 'quit' to exit the game.\n")?;

    loop {
        let round = engine.start_round();

        while engine.state() == RoundState::InProgress {
            writeln!(out, "Time remaining: {:.1} seconds", engine.time_remaining_secs())?;
            writeln!(
                out,
                "Lives remaining: {} {}",
                engine.lives(),
                lives_hearts(engine.lives(), engine.max_lives()).as_str().red()
            )?;
            writeln!(out, "Used letters: {}", used_letters_text(&engine.guessed_letters()))?;
            writeln!(out, "{}", engine.render_mask().as_str().bold())?;

            let Some(line) = get_user_input(input, out, "Guess a letter")? else {
                writeln!(out, "\nGame ended.")?;
                return Ok(());
            };

            if let Tick::TimedOut { .. } = engine.tick(round) {
                writeln!(out, "\n{}", "⏰ Time's up! You lose a life.".yellow())?;
                writeln!(out)?;
                continue;
            }

            let guess = line.to_lowercase();
            if guess == "quit" {
                writeln!(out, "\nGame ended.")?;
                return Ok(());
            }

            match engine.guess(&guess) {
                GuessOutcome::Correct => writeln!(out, "{}", "✓ Correct guess!".green())?,
                GuessOutcome::Incorrect => writeln!(out, "{}", "✗ Incorrect guess!".red())?,
                GuessOutcome::Rejected => {
                    let mut chars = guess.chars();
                    let repeated = match (chars.next(), chars.next()) {
                        (Some(c), None) => engine.has_guessed(c),
                        _ => false,
                    };
                    if repeated {
                        writeln!(out, "You already guessed that letter.")?;
                    } else {
                        writeln!(out, "Please enter a single letter.")?;
                    }
                }
            }
            writeln!(out)?;
        }

        let secret = engine.revealed_secret().unwrap_or_default();
        if engine.state() == RoundState::Won {
            writeln!(
                out,
                "\n🎉 {} {}",
                "Congratulations! You guessed the word:".bright_green().bold(),
                secret.bright_white().bold()
            )?;
        } else {
            writeln!(
                out,
                "\n💀 {} {}",
                "Game over! The word was:".red().bold(),
                secret.bright_white().bold()
            )?;
        }

        match get_user_input(input, out, "Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => writeln!(out, "\n🔄 New round started!\n")?,
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
