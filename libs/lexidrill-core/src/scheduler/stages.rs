//! Stage-based ease-factor scheduler.
//!
//! Items climb a fixed ladder of short learning steps; graduating from the
//! last step moves them to day-granularity review where the interval grows
//! by the ease factor on every successful recall. Any failure sends the
//! item back to the start, due immediately.

use super::{interval_duration, ReviewScheduler, MIN_EASE_FACTOR};
use crate::types::VocabItem;
use chrono::{DateTime, Duration, Utc};

/// Ease-factor scheduler with configurable learning steps.
#[derive(Debug, Clone)]
pub struct StageScheduler {
    /// Number of learning steps before an item graduates to review.
    pub learning_steps: u32,
    /// Due delay between learning steps, in minutes.
    pub short_interval_minutes: i64,
    /// First review interval on graduation, in days.
    pub graduating_interval_days: f64,
    /// Ease factor assigned on graduation.
    pub initial_ease: f64,
}

impl Default for StageScheduler {
    fn default() -> Self {
        Self {
            learning_steps: 8,
            short_interval_minutes: 10,
            graduating_interval_days: 1.0,
            initial_ease: 2.5,
        }
    }
}

impl ReviewScheduler for StageScheduler {
    fn name(&self) -> &'static str {
        "stages"
    }

    fn schedule(&self, item: &VocabItem, success: bool, now: DateTime<Utc>) -> VocabItem {
        let mut next = item.clone();

        if !success {
            // Lapse from any state: back to the start, due immediately.
            next.learning_stage = 0;
            next.interval_days = 0.0;
            next.next_review = now;
            return next;
        }

        if item.learning_stage < self.learning_steps {
            next.learning_stage = item.learning_stage + 1;
            if next.learning_stage == self.learning_steps {
                // Graduation: switch to day-granularity review.
                next.interval_days = self.graduating_interval_days;
                next.ease_factor = self.initial_ease;
                next.next_review = now + interval_duration(next.interval_days);
            } else {
                next.next_review = now + Duration::minutes(self.short_interval_minutes);
            }
        } else {
            next.ease_factor = item.ease_factor.max(MIN_EASE_FACTOR);
            next.interval_days = item.interval_days * next.ease_factor;
            next.next_review = now + interval_duration(next.interval_days);
        }

        next
    }
}
