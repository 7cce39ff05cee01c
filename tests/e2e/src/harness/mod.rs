//! Review Test Harness
//!
//! Provides a scheduler pinned to a fixed calendar:
//! - Deterministic start date (no wall-clock reads)
//! - Replay helpers returning final state and history
//! - Invariant checks applied after every review

use chrono::{Duration, NaiveDate};
use mnemo_core::{
    CardMemoryState, ReviewRecord, ReviewScheduler, ReviewSession, ReviewTiming, SchedulerConfig,
};

/// Lowest ease factor the standard scheduler may ever produce
pub const EASE_FLOOR: f64 = 1.3;

/// Scheduler plus the day every replay starts on
///
/// # Example
///
/// ```rust,ignore
/// let harness = ReviewHarness::new();
/// let (state, history) = harness.replay_fixed(&[3, 4, 5]);
/// harness.assert_history_invariants(&history);
/// ```
pub struct ReviewHarness {
    /// Scheduler under test
    pub scheduler: ReviewScheduler,
    /// First review day of every replay
    pub start: NaiveDate,
}

impl Default for ReviewHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewHarness {
    /// Standard SM-2 scheduler starting on 2026-01-01
    pub fn new() -> Self {
        Self {
            scheduler: ReviewScheduler::new(),
            start: Self::default_start(),
        }
    }

    /// Harness over a custom scheduler config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            scheduler: ReviewScheduler::with_config(config).expect("valid test config"),
            start: Self::default_start(),
        }
    }

    fn default_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date")
    }

    /// Fresh card state created on the start day
    pub fn fresh_state(&self) -> CardMemoryState {
        self.scheduler.new_state(self.start)
    }

    /// Replay with every review on the start day
    pub fn replay_fixed(&self, grades: &[i64]) -> (CardMemoryState, Vec<ReviewRecord>) {
        self.replay(grades, ReviewTiming::Fixed(self.start))
    }

    /// Replay with each review on the previously scheduled day
    pub fn replay_on_schedule(&self, grades: &[i64]) -> (CardMemoryState, Vec<ReviewRecord>) {
        self.replay(grades, ReviewTiming::OnSchedule)
    }

    fn replay(&self, grades: &[i64], timing: ReviewTiming) -> (CardMemoryState, Vec<ReviewRecord>) {
        let mut session = ReviewSession::starting_on(&self.scheduler, self.start);
        session.replay(grades, timing).expect("valid grades");
        session.into_parts()
    }

    /// Assert the state invariants that must hold after any review
    pub fn assert_state_invariants(&self, state: &CardMemoryState) {
        let floor = self.scheduler.config().minimum_ease_factor;
        assert!(
            state.ease_factor >= floor,
            "ease {} fell below {}",
            state.ease_factor,
            floor
        );
        assert!(state.interval_days >= 1, "interval dropped to zero");
        assert_eq!(
            state.next_review_date,
            state.last_review_date + Duration::days(i64::from(state.interval_days)),
            "next review date out of step with interval"
        );
    }

    /// Assert per-record invariants over a whole history
    pub fn assert_history_invariants(&self, history: &[ReviewRecord]) {
        let floor = self.scheduler.config().minimum_ease_factor;
        for record in history {
            assert!(record.ease_factor >= floor);
            assert!(record.interval_days >= 1);
            assert_eq!(
                record.next_review_date,
                record.reviewed_on + Duration::days(i64::from(record.interval_days))
            );
        }
    }
}
