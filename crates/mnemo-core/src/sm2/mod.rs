//! SM-2 (SuperMemo-2) Review Scheduling Module
//!
//! Classic spaced repetition as popularised by SuperMemo and Anki.
//!
//! Reference: https://super-memory.com/english/ol/sm2.htm
//!
//! ## Core Formulas:
//! - Ease update: EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at 1.3
//! - Interval: I(1) = 1, I(2) = 6, I(n) = floor(I(n-1) * EF')
//! - Lapse (q < 3): repetition streak and interval reset, EF untouched

mod grade;
mod scheduler;
mod state;

pub use grade::{ReviewGrade, PASSING_GRADE};
pub use scheduler::{PreviewResults, ReviewOutcome, ReviewScheduler, SchedulerConfig};
pub use state::CardMemoryState;
