//! Spaced-repetition scheduling for vocabulary items.

pub mod day_table;
pub mod stages;

use chrono::{DateTime, Duration, Utc};

use crate::types::VocabItem;

/// Floor for an item's ease factor.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// A review scheduling policy.
///
/// `schedule` is a pure, total transform: every `(state, success)` pair maps
/// to a defined next state, and persisting the result is the caller's job.
pub trait ReviewScheduler: Send + Sync {
    /// Policy identifier.
    fn name(&self) -> &'static str;

    /// Compute the item's state after one evaluated review.
    fn schedule(&self, item: &VocabItem, success: bool, now: DateTime<Utc>) -> VocabItem;
}

/// Get a scheduling policy by name. `stages` is the default policy.
pub fn get_scheduler(name: &str) -> Option<Box<dyn ReviewScheduler>> {
    match name {
        "stages" => Some(Box::new(stages::StageScheduler::default())),
        "day_table" => Some(Box::new(day_table::DayTableScheduler::default())),
        _ => None,
    }
}

/// Fractional days as a chrono duration.
pub(crate) fn interval_duration(days: f64) -> Duration {
    Duration::seconds((days * 86_400.0) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedulers_resolve_by_name() {
        assert_eq!(get_scheduler("stages").unwrap().name(), "stages");
        assert_eq!(get_scheduler("day_table").unwrap().name(), "day_table");
        assert!(get_scheduler("fsrs").is_none());
    }

    #[test]
    fn fractional_days_convert_to_seconds() {
        assert_eq!(interval_duration(1.0), Duration::days(1));
        assert_eq!(interval_duration(2.5), Duration::hours(60));
    }
}
