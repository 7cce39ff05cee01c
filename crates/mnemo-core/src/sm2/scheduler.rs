//! SM-2 review scheduler

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::grade::ReviewGrade;
use super::state::{CardMemoryState, DEFAULT_EASE_FACTOR, MINIMUM_EASE_FACTOR};
use crate::error::{MnemoError, Result};

// ============================================================================
// CONFIG
// ============================================================================

/// Tunable constants of the SM-2 discipline
///
/// The defaults are the published SM-2 values. Changing them produces a
/// different scheduler, not a smoother one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    /// Ease factor assigned to new items
    pub initial_ease_factor: f64,
    /// Lower bound applied after every ease update
    pub minimum_ease_factor: f64,
    /// Interval after the first successful review
    pub first_interval_days: u32,
    /// Interval after the second consecutive successful review
    pub second_interval_days: u32,
    /// Optional upper bound on exponential growth; `None` follows SM-2 without limit
    pub maximum_interval_days: Option<u32>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_ease_factor: DEFAULT_EASE_FACTOR,
            minimum_ease_factor: MINIMUM_EASE_FACTOR,
            first_interval_days: 1,
            second_interval_days: 6,
            maximum_interval_days: None,
        }
    }
}

impl SchedulerConfig {
    /// Parse a JSON document; missing fields fall back to the defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SchedulerConfig = serde_json::from_str(json)
            .map_err(|e| MnemoError::InvalidConfig(format!("Malformed scheduler config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the constants describe a usable scheduler
    pub fn validate(&self) -> Result<()> {
        if !self.minimum_ease_factor.is_finite() || self.minimum_ease_factor < MINIMUM_EASE_FACTOR {
            return Err(MnemoError::InvalidConfig(format!(
                "minimumEaseFactor must be at least {}, got {}",
                MINIMUM_EASE_FACTOR, self.minimum_ease_factor
            )));
        }
        if !self.initial_ease_factor.is_finite()
            || self.initial_ease_factor < self.minimum_ease_factor
        {
            return Err(MnemoError::InvalidConfig(format!(
                "initialEaseFactor {} is below minimumEaseFactor {}",
                self.initial_ease_factor, self.minimum_ease_factor
            )));
        }
        if self.first_interval_days == 0 || self.second_interval_days == 0 {
            return Err(MnemoError::InvalidConfig(
                "first and second intervals must be at least one day".to_string(),
            ));
        }
        if let Some(cap) = self.maximum_interval_days {
            if cap < self.first_interval_days.max(self.second_interval_days) {
                return Err(MnemoError::InvalidConfig(format!(
                    "maximumIntervalDays {} is shorter than the fixed intervals",
                    cap
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// What a single review decided
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    /// New interval in days
    pub interval_days: u32,
    /// Ease factor after the review
    pub ease_factor: f64,
    /// Day the item comes due again
    pub next_review_date: NaiveDate,
}

/// Outcome of each possible grade, computed without touching the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewResults {
    outcomes: [ReviewOutcome; 6],
}

impl PreviewResults {
    /// Outcome the given grade would produce
    pub fn get(&self, grade: ReviewGrade) -> &ReviewOutcome {
        &self.outcomes[grade.value() as usize]
    }

    /// Grade/outcome pairs, lowest grade first
    pub fn iter(&self) -> impl Iterator<Item = (ReviewGrade, &ReviewOutcome)> {
        ReviewGrade::ALL.into_iter().zip(self.outcomes.iter())
    }
}

// ============================================================================
// SCHEDULER
// ============================================================================

/// Computes the next interval and ease factor for a graded review
#[derive(Debug, Clone, Default)]
pub struct ReviewScheduler {
    config: SchedulerConfig,
}

impl ReviewScheduler {
    /// Scheduler with the standard SM-2 constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler with custom constants
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get current configuration
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Fresh state for a new item, using the configured starting ease
    pub fn new_state(&self, today: NaiveDate) -> CardMemoryState {
        CardMemoryState::with_ease(today, self.config.initial_ease_factor)
    }

    /// Apply a raw 0-5 grade reviewed on `today`
    ///
    /// An out-of-range grade fails with [`MnemoError::InvalidGrade`] and
    /// leaves `state` untouched.
    pub fn review(
        &self,
        state: &mut CardMemoryState,
        grade: i64,
        today: NaiveDate,
    ) -> Result<ReviewOutcome> {
        let grade = ReviewGrade::from_i64(grade)?;
        Ok(self.review_grade(state, grade, today))
    }

    /// Apply an already validated grade reviewed on `today`
    pub fn review_grade(
        &self,
        state: &mut CardMemoryState,
        grade: ReviewGrade,
        today: NaiveDate,
    ) -> ReviewOutcome {
        state.last_review_date = today;

        if grade.is_lapse() {
            state.repetition_number = 0;
            state.interval_days = 1;
        } else {
            state.ease_factor = self.next_ease_factor(state.ease_factor, grade);
            state.interval_days = match state.repetition_number {
                0 => self.config.first_interval_days,
                1 => self.config.second_interval_days,
                _ => self.grown_interval(state.interval_days, state.ease_factor),
            };
            state.repetition_number = state.repetition_number.saturating_add(1);
        }

        state.next_review_date = add_days(today, state.interval_days);

        tracing::debug!(
            grade = grade.value(),
            repetition = state.repetition_number,
            interval_days = state.interval_days,
            ease_factor = state.ease_factor,
            "Card reviewed"
        );

        ReviewOutcome {
            interval_days: state.interval_days,
            ease_factor: state.ease_factor,
            next_review_date: state.next_review_date,
        }
    }

    /// What every grade would do if the item were reviewed on `today`
    pub fn preview(&self, state: &CardMemoryState, today: NaiveDate) -> PreviewResults {
        let outcomes = ReviewGrade::ALL.map(|grade| {
            let mut scratch = state.clone();
            self.review_grade(&mut scratch, grade, today)
        });
        PreviewResults { outcomes }
    }

    /// SM-2 ease update, floored at the configured minimum
    pub fn next_ease_factor(&self, ease_factor: f64, grade: ReviewGrade) -> f64 {
        let q = grade.shortfall();
        let updated = ease_factor + (0.1 - q * (0.08 + q * 0.02));
        updated.max(self.config.minimum_ease_factor)
    }

    fn grown_interval(&self, previous: u32, ease_factor: f64) -> u32 {
        // Float-to-int `as` saturates at u32::MAX; dates past the calendar saturate in add_days.
        let grown = (f64::from(previous) * ease_factor).floor() as u32;
        grown.clamp(1, self.config.maximum_interval_days.unwrap_or(u32::MAX))
    }
}

fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or_else(|| {
            tracing::warn!(%date, days, "Review date out of calendar range, saturating");
            NaiveDate::MAX
        })
}

// ============================================================================
// TESTS
// ============================================================================
