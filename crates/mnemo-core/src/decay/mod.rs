//! Decay Module - Forgetting curves and review timing
//!
//! - Exponential retention: R(t) = e^(-t/S)
//! - Lag-effect review gain: G(t) = r * e^(1 - r), r = t / optimal interval
//! - Reminder agent that re-reviews whenever retention crosses a threshold

mod agent;
mod curve;

pub use agent::{DailyRetention, ForgettingTrace, ReminderAgent, ReminderConfig, RetentionEvent};
pub use curve::{
    days_until_retention, retention, review_gain, sample_gain, sample_retention, CurvePoint,
};
