//! Flashcard - a learnable item and its scheduling memory

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sm2::{CardMemoryState, ReviewOutcome, ReviewScheduler};

/// A study item with a question side, an answer side and its SM-2 state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Subject or deck the card belongs to
    pub topic: String,
    /// Prompt shown to the learner
    pub front: String,
    /// Expected answer
    pub back: String,
    /// Day the card was created
    pub created_on: NaiveDate,
    /// Scheduling memory
    pub memory: CardMemoryState,
}

impl Card {
    /// Create a card first seen on `today` with the scheduler's starting state
    pub fn new(
        scheduler: &ReviewScheduler,
        topic: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            topic: topic.into(),
            front: front.into(),
            back: back.into(),
            created_on: today,
            memory: scheduler.new_state(today),
        }
    }

    /// Grade a recall attempt made on `today`
    pub fn review(
        &mut self,
        scheduler: &ReviewScheduler,
        grade: i64,
        today: NaiveDate,
    ) -> Result<ReviewOutcome> {
        scheduler.review(&mut self.memory, grade, today)
    }

    /// Whether the card should be shown on `on`
    pub fn is_due(&self, on: NaiveDate) -> bool {
        self.memory.is_due(on)
    }
}
