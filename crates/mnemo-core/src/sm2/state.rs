//! Per-item scheduling memory

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ease factor every new item starts with
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Floor the ease factor never drops below
pub const MINIMUM_EASE_FACTOR: f64 = 1.3;

/// Scheduling state of exactly one learnable item
///
/// Only [`ReviewScheduler`](super::ReviewScheduler) mutates this; everything
/// else reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMemoryState {
    /// Consecutive successful reviews since the last lapse
    pub repetition_number: u32,
    /// Days until the next scheduled review (always >= 1)
    pub interval_days: u32,
    /// How quickly the interval grows on success (always >= 1.3)
    pub ease_factor: f64,
    /// Day of the most recent review (creation day before the first one)
    pub last_review_date: NaiveDate,
    /// `last_review_date + interval_days`
    pub next_review_date: NaiveDate,
}

impl CardMemoryState {
    /// Fresh state for an item first seen on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self::with_ease(today, DEFAULT_EASE_FACTOR)
    }

    /// Fresh state with a custom starting ease factor
    pub fn with_ease(today: NaiveDate, ease_factor: f64) -> Self {
        Self {
            repetition_number: 0,
            interval_days: 1,
            ease_factor,
            last_review_date: today,
            next_review_date: today,
        }
    }

    /// Whether the item should be reviewed on `on`
    pub fn is_due(&self, on: NaiveDate) -> bool {
        self.next_review_date <= on
    }

    /// Days from `on` until the next review; negative when overdue
    pub fn days_until_due(&self, on: NaiveDate) -> i64 {
        (self.next_review_date - on).num_days()
    }

    /// Days since the last review, clamped at zero
    pub fn elapsed_days(&self, on: NaiveDate) -> i64 {
        (on - self.last_review_date).num_days().max(0)
    }
}
