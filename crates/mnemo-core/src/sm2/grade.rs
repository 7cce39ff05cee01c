//! The six-point SM-2 recall grade scale.

use serde::{Deserialize, Serialize};

use crate::error::{MnemoError, Result};

/// Lowest grade that counts as a successful recall
pub const PASSING_GRADE: ReviewGrade = ReviewGrade::Hard;

/// Quality of a recall attempt, as assigned by the reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum ReviewGrade {
    /// Complete blackout
    Blackout = 0,
    /// Wrong answer, but recognised once shown
    Incorrect = 1,
    /// Wrong answer that felt easy to recall once shown
    Familiar = 2,
    /// Correct with serious difficulty
    Hard = 3,
    /// Correct after some hesitation
    Good = 4,
    /// Instant, perfect recall
    Perfect = 5,
}

impl ReviewGrade {
    /// Every grade, lowest first
    pub const ALL: [ReviewGrade; 6] = [
        ReviewGrade::Blackout,
        ReviewGrade::Incorrect,
        ReviewGrade::Familiar,
        ReviewGrade::Hard,
        ReviewGrade::Good,
        ReviewGrade::Perfect,
    ];

    /// Convert a raw integer grade, rejecting anything outside 0-5
    pub fn from_i64(value: i64) -> Result<Self> {
        match value {
            0 => Ok(ReviewGrade::Blackout),
            1 => Ok(ReviewGrade::Incorrect),
            2 => Ok(ReviewGrade::Familiar),
            3 => Ok(ReviewGrade::Hard),
            4 => Ok(ReviewGrade::Good),
            5 => Ok(ReviewGrade::Perfect),
            other => Err(MnemoError::InvalidGrade(other)),
        }
    }

    /// Numeric value on the 0-5 scale
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Whether this grade resets the repetition streak
    pub fn is_lapse(self) -> bool {
        self < PASSING_GRADE
    }

    /// Distance from a perfect grade (`5 - q` in the SM-2 formulas)
    pub(crate) fn shortfall(self) -> f64 {
        f64::from(ReviewGrade::Perfect.value() - self.value())
    }

    /// Convert to string representation
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewGrade::Blackout => "blackout",
            ReviewGrade::Incorrect => "incorrect",
            ReviewGrade::Familiar => "familiar",
            ReviewGrade::Hard => "hard",
            ReviewGrade::Good => "good",
            ReviewGrade::Perfect => "perfect",
        }
    }
}

impl TryFrom<i64> for ReviewGrade {
    type Error = MnemoError;

    fn try_from(value: i64) -> Result<Self> {
        ReviewGrade::from_i64(value)
    }
}

impl From<ReviewGrade> for u8 {
    fn from(grade: ReviewGrade) -> Self {
        grade.value()
    }
}

impl std::fmt::Display for ReviewGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::str::FromStr for ReviewGrade {
    type Err = MnemoError;

    /// Accepts either the digit or the grade name ("3", "hard")
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return ReviewGrade::from_i64(n);
        }
        ReviewGrade::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MnemoError::InvalidGradeName(trimmed.to_string()))
    }
}
