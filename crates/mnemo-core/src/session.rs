//! Review Session
//!
//! Replays an ordered sequence of grades against one card and records every
//! scheduling decision. Each review depends on the state left by the one
//! before it, so grades are applied strictly in order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sm2::{CardMemoryState, ReviewGrade, ReviewScheduler};

/// When each replayed review takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTiming {
    /// Every review happens on the same day
    Fixed(NaiveDate),
    /// Each review happens on the day the previous one scheduled
    OnSchedule,
}

/// One scheduling decision in the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Grade given at this review
    pub grade: ReviewGrade,
    /// Interval scheduled by this review
    pub interval_days: u32,
    /// Ease factor after this review
    pub ease_factor: f64,
    /// Day the review happened
    pub reviewed_on: NaiveDate,
    /// Day the next review is due
    pub next_review_date: NaiveDate,
}

/// Aggregate view of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Reviews recorded
    pub reviews: usize,
    /// Reviews graded below 3
    pub lapses: usize,
    /// Interval after the last review
    pub final_interval_days: u32,
    /// Ease factor after the last review
    pub final_ease_factor: f64,
    /// When the card is next due
    pub next_review_date: NaiveDate,
}

/// Drives a [`ReviewScheduler`] over one card's state
#[derive(Debug)]
pub struct ReviewSession<'a> {
    scheduler: &'a ReviewScheduler,
    state: CardMemoryState,
    history: Vec<ReviewRecord>,
}

impl<'a> ReviewSession<'a> {
    /// Start a session over an existing state
    pub fn new(scheduler: &'a ReviewScheduler, state: CardMemoryState) -> Self {
        Self {
            scheduler,
            state,
            history: Vec::new(),
        }
    }

    /// Start a session over a brand-new card created on `today`
    pub fn starting_on(scheduler: &'a ReviewScheduler, today: NaiveDate) -> Self {
        Self::new(scheduler, scheduler.new_state(today))
    }

    /// Apply one raw grade on `today`
    pub fn review(&mut self, grade: i64, today: NaiveDate) -> Result<&ReviewRecord> {
        let grade = ReviewGrade::from_i64(grade)?;
        Ok(self.apply(grade, today))
    }

    /// Apply a whole grade sequence
    ///
    /// All grades are validated up front; if any is out of range nothing is
    /// applied and the history is unchanged. Returns the records added.
    pub fn replay(&mut self, grades: &[i64], timing: ReviewTiming) -> Result<&[ReviewRecord]> {
        let grades = grades
            .iter()
            .map(|&g| ReviewGrade::from_i64(g))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.replay_grades(&grades, timing))
    }

    /// Apply an already validated grade sequence
    pub fn replay_grades(&mut self, grades: &[ReviewGrade], timing: ReviewTiming) -> &[ReviewRecord] {
        let start = self.history.len();
        for &grade in grades {
            let today = match timing {
                ReviewTiming::Fixed(day) => day,
                ReviewTiming::OnSchedule => self.state.next_review_date,
            };
            self.apply(grade, today);
        }
        &self.history[start..]
    }

    fn apply(&mut self, grade: ReviewGrade, today: NaiveDate) -> &ReviewRecord {
        let outcome = self.scheduler.review_grade(&mut self.state, grade, today);
        self.history.push(ReviewRecord {
            grade,
            interval_days: outcome.interval_days,
            ease_factor: outcome.ease_factor,
            reviewed_on: today,
            next_review_date: outcome.next_review_date,
        });
        &self.history[self.history.len() - 1]
    }

    /// Current card state
    pub fn state(&self) -> &CardMemoryState {
        &self.state
    }

    /// Every record so far, in call order
    pub fn history(&self) -> &[ReviewRecord] {
        &self.history
    }

    /// Review and lapse counts plus the card's current schedule
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            reviews: self.history.len(),
            lapses: self.history.iter().filter(|r| r.grade.is_lapse()).count(),
            final_interval_days: self.state.interval_days,
            final_ease_factor: self.state.ease_factor,
            next_review_date: self.state.next_review_date,
        }
    }

    /// End the session, handing back the final state and its history
    pub fn into_parts(self) -> (CardMemoryState, Vec<ReviewRecord>) {
        (self.state, self.history)
    }
}
