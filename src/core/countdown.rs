//! core/countdown.rs
//! Remaining-time math for the countdown screen.

use chrono::{DateTime, Local};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// One countdown reading, already split into display units.
/// Components are never negative; sub-second remainders are floored away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Splits a positive millisecond difference into display units.
    pub fn from_millis(diff: i64) -> Self {
        Self {
            days: diff / MS_PER_DAY,
            hours: diff / MS_PER_HOUR % 24,
            minutes: diff / MS_PER_MINUTE % 60,
            seconds: diff / MS_PER_SECOND % 60,
        }
    }
}

/// Time left until `target`, or `None` once the target has been reached.
/// A target in the past never yields negative components; it yields `None`
/// on the very first computation.
pub fn remaining(target: DateTime<Local>, now: DateTime<Local>) -> Option<TimeLeft> {
    let diff = (target - now).num_milliseconds();
    (diff > 0).then(|| TimeLeft::from_millis(diff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn splits_one_of_each_unit() {
        // 1 day, 1 hour, 1 minute, 1 second, 1 ms
        let left = TimeLeft::from_millis(90_061_001);
        assert_eq!(
            left,
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn floors_sub_second_remainders() {
        assert_eq!(TimeLeft::from_millis(999).seconds, 0);
        assert_eq!(TimeLeft::from_millis(1_000).seconds, 1);
        assert_eq!(TimeLeft::from_millis(1_999).seconds, 1);
    }

    #[test]
    fn recombines_to_whole_seconds() {
        for diff in [
            1i64,
            999,
            1_000,
            59_999,
            60_000,
            3_599_999,
            3_600_000,
            86_399_999,
            86_400_000,
            90_061_001,
            123_456_789,
        ] {
            let left = TimeLeft::from_millis(diff);
            let back = left.days * MS_PER_DAY
                + left.hours * MS_PER_HOUR
                + left.minutes * MS_PER_MINUTE
                + left.seconds * MS_PER_SECOND;
            assert_eq!(back, diff / 1_000 * 1_000, "diff = {diff}");
        }
    }

    #[test]
    fn units_stay_in_range() {
        for diff in (1..500_000_000i64).step_by(7_919_333) {
            let left = TimeLeft::from_millis(diff);
            assert!((0..24).contains(&left.hours));
            assert!((0..60).contains(&left.minutes));
            assert!((0..60).contains(&left.seconds));
            assert!(left.days >= 0);
        }
    }

    #[test]
    fn future_target_has_time_left() {
        let now = Local::now();
        let left = remaining(now + TimeDelta::milliseconds(90_061_001), now);
        assert_eq!(
            left,
            Some(TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            })
        );
    }

    #[test]
    fn past_target_completes_immediately() {
        let now = Local::now();
        assert_eq!(remaining(now - TimeDelta::milliseconds(5), now), None);
    }

    #[test]
    fn exact_target_counts_as_complete() {
        let now = Local::now();
        assert_eq!(remaining(now, now), None);
    }
}
