//! Duplicate-character detection.
//!
//! Three interchangeable strategies answer the same question: does any
//! character occur at two or more positions of a string? Two are expressed as
//! backtracking patterns, one as a plain scan. They are kept distinct so the
//! harness can benchmark them against each other.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use fancy_regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capture a character, skip any gap, then look ahead for the same character.
const BACKREFERENCE_PATTERN: &str = r"(?s)(.).*(?=\1)";

/// Same search with a named group and a named back-reference.
const NAMED_GROUP_PATTERN: &str = r"(?s)(?<dupe>.).*\k<dupe>";

/// The engine default is one million steps; long repetitive input can need more.
const BACKTRACK_LIMIT: usize = 100_000_000;

static BACKREFERENCE: OnceLock<Option<Regex>> = OnceLock::new();
static NAMED_GROUP: OnceLock<Option<Regex>> = OnceLock::new();

/// A strategy for deciding whether a string repeats any character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateDetector {
    /// `(.).*(?=\1)`: positional back-reference inside a lookahead.
    PatternBackreference,
    /// `(?<dupe>.).*\k<dupe>`: named capture reference.
    PatternNamedGroup,
    /// Compare each character's position with its first occurrence.
    IterativeScan,
}

/// Broad implementation family of a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectorFamily {
    Pattern,
    Iterative,
}

impl fmt::Display for DetectorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::Iterative => write!(f, "iterative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown detector '{0}' (expected one of: pattern-backreference, pattern-named-group, iterative-scan)"
)]
pub struct ParseDetectorError(pub String);

impl DuplicateDetector {
    /// Every detector, in the order they are registered and reported.
    pub const ALL: [DuplicateDetector; 3] = [
        DuplicateDetector::PatternBackreference,
        DuplicateDetector::PatternNamedGroup,
        DuplicateDetector::IterativeScan,
    ];

    /// Stable identifier used in reports, config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::PatternBackreference => "pattern-backreference",
            Self::PatternNamedGroup => "pattern-named-group",
            Self::IterativeScan => "iterative-scan",
        }
    }

    /// Source of the pattern this detector searches with, if it uses one.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            Self::PatternBackreference => Some(BACKREFERENCE_PATTERN),
            Self::PatternNamedGroup => Some(NAMED_GROUP_PATTERN),
            Self::IterativeScan => None,
        }
    }

    pub fn family(self) -> DetectorFamily {
        match self {
            Self::PatternBackreference | Self::PatternNamedGroup => DetectorFamily::Pattern,
            Self::IterativeScan => DetectorFamily::Iterative,
        }
    }

    /// Returns true if at least one character of `input` occurs more than once.
    ///
    /// Total over all strings. If the pattern engine gives up (backtracking
    /// limit) the answer comes from the iterative scan instead.
    pub fn has_duplicate(self, input: &str) -> bool {
        match self {
            Self::PatternBackreference => {
                pattern_match(&BACKREFERENCE, BACKREFERENCE_PATTERN, input)
            }
            Self::PatternNamedGroup => pattern_match(&NAMED_GROUP, NAMED_GROUP_PATTERN, input),
            Self::IterativeScan => !every_char_is_unique(input),
        }
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::PatternNamedGroup
    }
}

impl fmt::Display for DuplicateDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DuplicateDetector {
    type Err = ParseDetectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|detector| detector.name() == s)
            .ok_or_else(|| ParseDetectorError(s.to_string()))
    }
}

/// True iff every character sits at its own first occurrence.
///
/// `all` stops at the first position that fails.
fn every_char_is_unique(input: &str) -> bool {
    input
        .char_indices()
        .all(|(index, ch)| input.find(ch) == Some(index))
}

fn compiled(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &'static str,
) -> Option<&'static Regex> {
    cell.get_or_init(|| {
        match RegexBuilder::new(pattern)
            .backtrack_limit(BACKTRACK_LIMIT)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::error!(pattern, error = %err, "failed to compile duplicate pattern");
                None
            }
        }
    })
    .as_ref()
}

fn pattern_match(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &'static str,
    input: &str,
) -> bool {
    let Some(regex) = compiled(cell, pattern) else {
        return !every_char_is_unique(input);
    };
    match regex.is_match(input) {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!(
                pattern,
                input_len = input.len(),
                error = %err,
                "pattern match aborted, falling back to iterative scan"
            );
            !every_char_is_unique(input)
        }
    }
}
