//! Interactive guess loop.
//!
//! Reads one guess per line and says whether it is valid. An empty line or the
//! end of input ends the session.

use std::io::{self, BufRead, Write};

use cowguess_core::{is_valid_guess, validate_guess};

pub const PROMPT: &str = "Enter a 4-digit number. All digits must be unique > ";

const REJECTED: &str = "is not a number with 4 unique digits";

/// Counts of what was entered during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub guesses: usize,
    pub valid: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    explain: bool,
}

impl Session {
    /// `explain` adds the reason to every rejection.
    pub fn new(explain: bool) -> Self {
        Self { explain }
    }

    /// The line without its terminator. Other whitespace is part of the guess.
    fn strip_line_ending(line: &str) -> &str {
        let line = line.strip_suffix('\n').unwrap_or(line);
        line.strip_suffix('\r').unwrap_or(line)
    }

    fn verdict(&self, guess: &str) -> String {
        if !self.explain {
            return if is_valid_guess(guess) {
                format!("{guess} is valid")
            } else {
                format!("{guess} {REJECTED}")
            };
        }
        match validate_guess(guess) {
            Ok(_) => format!("{guess} is valid"),
            Err(err) => format!("{guess} {REJECTED} ({err})"),
        }
    }

    /// Prompt, read and answer until an empty line or end of input.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        output: &mut W,
    ) -> io::Result<SessionStats> {
        writeln!(output, "You can test any input string manually")?;
        writeln!(output, "To stop testing, press ENTER")?;
        writeln!(output, "{}", "-".repeat(39))?;

        let mut stats = SessionStats::default();
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            let guess = Self::strip_line_ending(&line);
            if guess.is_empty() {
                break;
            }

            let message = self.verdict(guess);
            stats.guesses += 1;
            if is_valid_guess(guess) {
                stats.valid += 1;
            }
            writeln!(output, "{message}")?;
            writeln!(output)?;
        }

        tracing::debug!(guesses = stats.guesses, valid = stats.valid, "session ended");
        Ok(stats)
    }
}
