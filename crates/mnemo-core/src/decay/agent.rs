//! Reminder Agent
//!
//! Day-by-day simulation of a single memory decaying along `e^(-t/S)`.
//! With the agent enabled, a reminder fires as soon as retention falls below
//! the threshold: retention snaps back to 1.0, the clock restarts and the
//! stability is multiplied by the learning rate, so gaps between reminders
//! widen over time.

use serde::{Deserialize, Serialize};

use super::curve::retention;
use crate::error::{MnemoError, Result};

// ============================================================================
// CONFIG
// ============================================================================

/// Parameters of the simulated learner and agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReminderConfig {
    /// Number of simulated days
    pub days: u32,
    /// Stability (days) after the first exposure
    pub initial_stability: f64,
    /// Stability multiplier applied on every reminder
    pub learning_rate: f64,
    /// Retention level that triggers a reminder
    pub reminder_threshold: f64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            days: 60,
            initial_stability: 1.0,
            learning_rate: 2.0,
            reminder_threshold: 0.85,
        }
    }
}

impl ReminderConfig {
    /// Check parameter domains
    pub fn validate(&self) -> Result<()> {
        if !self.initial_stability.is_finite() || self.initial_stability <= 0.0 {
            return Err(MnemoError::parameter("initial_stability", self.initial_stability));
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 1.0 {
            return Err(MnemoError::parameter("learning_rate", self.learning_rate));
        }
        if !(self.reminder_threshold > 0.0 && self.reminder_threshold < 1.0) {
            return Err(MnemoError::parameter("reminder_threshold", self.reminder_threshold));
        }
        Ok(())
    }
}

// ============================================================================
// TRACE
// ============================================================================

/// What happened on a simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetentionEvent {
    /// Memory left alone
    None,
    /// Agent pinged the learner, who reviewed
    Reminder,
}

/// Retention on one simulated day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRetention {
    /// Day index, counted from 0
    pub day: u32,
    /// Retention recorded for the day
    pub retention: f64,
    /// Whether a reminder fired on this day
    pub event: RetentionEvent,
    /// Stability in effect at the end of the day
    pub stability: f64,
}

/// Full simulation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgettingTrace {
    /// Whether the agent was active
    pub with_agent: bool,
    /// One entry per simulated day, in order
    pub days: Vec<DailyRetention>,
}

impl ForgettingTrace {
    /// Number of reminders the agent sent
    pub fn reminders_sent(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.event == RetentionEvent::Reminder)
            .count()
    }

    /// Retention on the last simulated day (1.0 for an empty run)
    pub fn final_retention(&self) -> f64 {
        self.days.last().map_or(1.0, |d| d.retention)
    }

    /// Days on which reminders fired, in order
    pub fn reminder_days(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|d| d.event == RetentionEvent::Reminder)
            .map(|d| d.day)
            .collect()
    }
}

// ============================================================================
// AGENT
// ============================================================================

/// Threshold-triggered reminder policy
#[derive(Debug, Clone)]
pub struct ReminderAgent {
    config: ReminderConfig,
}

impl Default for ReminderAgent {
    fn default() -> Self {
        Self {
            config: ReminderConfig::default(),
        }
    }
}

impl ReminderAgent {
    /// Agent with the default learner
    pub fn new() -> Self {
        Self::default()
    }

    /// Agent with custom parameters
    pub fn with_config(config: ReminderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get current configuration
    pub fn config(&self) -> &ReminderConfig {
        &self.config
    }

    /// Run the day-by-day simulation
    pub fn simulate(&self, with_agent: bool) -> Result<ForgettingTrace> {
        let mut stability = self.config.initial_stability;
        let mut since_review: u32 = 0;
        let mut days = Vec::with_capacity(self.config.days as usize);

        for day in 0..self.config.days {
            let mut current = retention(f64::from(since_review), stability)?;
            let mut event = RetentionEvent::None;

            if with_agent && current < self.config.reminder_threshold {
                current = 1.0;
                since_review = 0;
                stability *= self.config.learning_rate;
                event = RetentionEvent::Reminder;
            } else {
                since_review += 1;
            }

            days.push(DailyRetention {
                day,
                retention: current,
                event,
                stability,
            });
        }

        let trace = ForgettingTrace { with_agent, days };
        tracing::debug!(
            with_agent,
            reminders = trace.reminders_sent(),
            final_retention = trace.final_retention(),
            "Reminder simulation finished"
        );
        Ok(trace)
    }

    /// Run with and without the agent, returning `(natural, with_agent)`
    pub fn compare(&self) -> Result<(ForgettingTrace, ForgettingTrace)> {
        Ok((self.simulate(false)?, self.simulate(true)?))
    }
}
