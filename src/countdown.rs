//! # Submission Countdown
//!
//! Time left until the configured deadline, split into days, hours, minutes
//! and seconds for the `/timer` reply.

use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// `now` is at or after the deadline.
    Passed,
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl TimerStatus {
    pub fn at(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = deadline.signed_duration_since(now);
        if diff <= chrono::Duration::zero() {
            return TimerStatus::Passed;
        }

        // Sub-second remainders are truncated.
        let total = diff.num_seconds();
        TimerStatus::Remaining {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn content(&self) -> String {
        match self {
            TimerStatus::Passed => "⚠️ The submission deadline has passed.".to_string(),
            TimerStatus::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => format!(
                "⏳ Time left for submissions: **{}d {}h {}m {}s**",
                days, hours, minutes, seconds
            ),
        }
    }
}
