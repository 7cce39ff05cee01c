//! # Mnemo Core
//!
//! Memory twin engine for study items. Models how a single learnable item is
//! remembered, reviewed and forgotten:
//!
//! - **SM-2 Scheduling**: repetition count, ease factor and the 1 / 6 / exponential
//!   interval tiers of the SuperMemo-2 discipline
//! - **Forgetting Curve**: exponential retention `R = e^(-t/S)`
//! - **Lag Effect**: review gain `r * e^(1 - r)` peaking at the optimal interval
//! - **Reminder Agent**: threshold-triggered reviews that grow stability over time
//!
//! Nothing in this crate reads the wall clock. Every operation that needs
//! "today" takes it as a parameter, so replays are deterministic.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mnemo_core::{CardMemoryState, ReviewScheduler};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
//! let scheduler = ReviewScheduler::new();
//! let mut state = CardMemoryState::new(today);
//!
//! let outcome = scheduler.review(&mut state, 4, today).unwrap();
//! assert_eq!(outcome.interval_days, 1);
//! assert_eq!(state.next_review_date, today.succ_opt().unwrap());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod card;
pub mod decay;
pub mod error;
pub mod session;
pub mod sm2;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use card::Card;

pub use error::{MnemoError, Result};

// SM-2 scheduling
pub use sm2::{
    CardMemoryState, PreviewResults, ReviewGrade, ReviewOutcome, ReviewScheduler, SchedulerConfig,
    PASSING_GRADE,
};

// Decay curves and reminder simulation
pub use decay::{
    days_until_retention, retention, review_gain, sample_gain, sample_retention, CurvePoint,
    DailyRetention, ForgettingTrace, ReminderAgent, ReminderConfig, RetentionEvent,
};

// Session driver
pub use session::{ReviewRecord, ReviewSession, ReviewTiming, SessionSummary};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Card, CardMemoryState, MnemoError, Result, ReviewGrade, ReviewScheduler, ReviewSession,
        ReviewTiming, SchedulerConfig,
    };

    pub use crate::decay::{retention, review_gain};
}
