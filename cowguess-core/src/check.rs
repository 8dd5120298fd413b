//! Known-answer self-check run before benchmarking.

use serde::{Deserialize, Serialize};

use crate::detector::DuplicateDetector;

/// Inputs with a known answer to "does it repeat a character?".
pub const KNOWN_CASES: [(&str, bool); 9] = [
    ("1234", false),
    ("1231", true),
    ("1214", true),
    ("1134", true),
    ("1224", true),
    ("1232", true),
    ("1233", true),
    ("abba", true),
    ("abcd", false),
];

/// One detector's answer for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorAnswer {
    pub detector: DuplicateDetector,
    pub found_duplicate: bool,
}

/// Every detector's answer for one input, against the expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCheck {
    pub input: String,
    pub expected: bool,
    pub answers: Vec<DetectorAnswer>,
}

impl CaseCheck {
    /// True when every detector gave the expected answer.
    pub fn passed(&self) -> bool {
        self.answers.iter().all(|a| a.found_duplicate == self.expected)
    }
}

pub fn check_case(input: &str, expected: bool) -> CaseCheck {
    let answers = DuplicateDetector::ALL
        .into_iter()
        .map(|detector| DetectorAnswer {
            detector,
            found_duplicate: detector.has_duplicate(input),
        })
        .collect();

    CaseCheck {
        input: input.to_string(),
        expected,
        answers,
    }
}

pub fn run_self_check() -> Vec<CaseCheck> {
    KNOWN_CASES
        .iter()
        .map(|&(input, expected)| check_case(input, expected))
        .collect()
}
