//! Guess validation.
//!
//! A guess is valid when it is exactly four ASCII digits and no digit appears
//! twice. Validation is the conjunction of two independent checks: a length and
//! digit-class pattern, and the duplicate-character detector.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::detector::DuplicateDetector;

/// Exactly four ASCII digits, anchored at both ends.
const FOUR_DIGITS_PATTERN: &str = r"^[0-9]{4}$";

/// Number of digits in a guess.
pub const GUESS_LEN: usize = 4;

static FOUR_DIGITS: OnceLock<Option<Regex>> = OnceLock::new();

/// Why an input is not a valid guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("expected 4 characters, got {0}")]
    WrongLength(usize),

    #[error("'{0}' is not a digit")]
    NotADigit(char),

    #[error("digit '{0}' is used more than once")]
    RepeatedDigit(char),
}

/// A validated guess: four distinct ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess(String);

impl Guess {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> [u8; GUESS_LEN] {
        let mut digits = [0; GUESS_LEN];
        for (slot, byte) in digits.iter_mut().zip(self.0.bytes()) {
            *slot = byte - b'0';
        }
        digits
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_guess(s)
    }
}

/// Length-and-digit-class check: exactly four characters, each `0`-`9`.
pub fn is_four_digits(input: &str) -> bool {
    let regex = FOUR_DIGITS.get_or_init(|| match Regex::new(FOUR_DIGITS_PATTERN) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::error!(error = %err, "failed to compile digit pattern");
            None
        }
    });
    match regex {
        Some(regex) => regex.is_match(input),
        None => input.len() == GUESS_LEN && input.bytes().all(|b| b.is_ascii_digit()),
    }
}

/// Returns true iff `input` is four ASCII digits with no digit repeated.
///
/// Never fails: malformed input is simply not valid.
pub fn is_valid_guess(input: &str) -> bool {
    is_four_digits(input) && !DuplicateDetector::default().has_duplicate(input)
}

/// Like [`is_valid_guess`], but says which rule the input broke.
pub fn validate_guess(input: &str) -> Result<Guess, GuessError> {
    if !is_four_digits(input) {
        let len = input.chars().count();
        if len != GUESS_LEN {
            return Err(GuessError::WrongLength(len));
        }
        let bad = input
            .chars()
            .find(|c| !c.is_ascii_digit())
            .unwrap_or_default();
        return Err(GuessError::NotADigit(bad));
    }

    if DuplicateDetector::default().has_duplicate(input) {
        let repeated = input
            .char_indices()
            .find(|&(i, c)| input[i + c.len_utf8()..].contains(c))
            .map(|(_, c)| c)
            .unwrap_or_default();
        return Err(GuessError::RepeatedDigit(repeated));
    }

    Ok(Guess(input.to_string()))
}
