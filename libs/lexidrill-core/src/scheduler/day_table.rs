//! Fixed day-table scheduler.
//!
//! A simpler alternative policy: four stages with fixed day intervals and
//! no ease factor. Kept selectable behind [`super::get_scheduler`]; the
//! stage-based ease-factor policy is the default.

use super::{interval_duration, ReviewScheduler};
use crate::types::VocabItem;
use chrono::{DateTime, Utc};

/// Four-stage scheduler with a fixed interval per stage.
#[derive(Debug, Clone)]
pub struct DayTableScheduler {
    /// Review interval in days for stages 1 through 4.
    pub intervals: [f64; 4],
}

impl Default for DayTableScheduler {
    fn default() -> Self {
        Self {
            intervals: [1.0, 2.0, 4.0, 7.0],
        }
    }
}

impl ReviewScheduler for DayTableScheduler {
    fn name(&self) -> &'static str {
        "day_table"
    }

    fn schedule(&self, item: &VocabItem, success: bool, now: DateTime<Utc>) -> VocabItem {
        let mut next = item.clone();

        if !success {
            next.learning_stage = 0;
            next.interval_days = 0.0;
            next.next_review = now;
            return next;
        }

        let max_stage = self.intervals.len() as u32;
        next.learning_stage = (item.learning_stage + 1).min(max_stage);
        next.interval_days = self.intervals[(next.learning_stage - 1) as usize];
        next.next_review = now + interval_duration(next.interval_days);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 13, 12, 0, 0).unwrap()
    }

    #[test]
    fn intervals_follow_the_table() {
        let scheduler = DayTableScheduler::default();
        let mut item = VocabItem::new(1, 1, "Baum", "дерево", now());

        for days in [1.0, 2.0, 4.0, 7.0] {
            item = scheduler.schedule(&item, true, now());
            assert_eq!(item.interval_days, days);
            assert_eq!(
                item.next_review,
                now() + Duration::days(days as i64)
            );
        }
    }

    #[test]
    fn stage_caps_at_the_last_table_entry() {
        let scheduler = DayTableScheduler::default();
        let mut item = VocabItem::new(1, 1, "Baum", "дерево", now());
        for _ in 0..10 {
            item = scheduler.schedule(&item, true, now());
        }
        assert_eq!(item.learning_stage, 4);
        assert_eq!(item.interval_days, 7.0);
    }

    #[test]
    fn failure_resets_to_start() {
        let scheduler = DayTableScheduler::default();
        let mut item = VocabItem::new(1, 1, "Baum", "дерево", now());
        for _ in 0..3 {
            item = scheduler.schedule(&item, true, now());
        }

        let item = scheduler.schedule(&item, false, now());
        assert_eq!(item.learning_stage, 0);
        assert_eq!(item.interval_days, 0.0);
        assert_eq!(item.next_review, now());
    }
}
