use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Whole days, hours and minutes left until a deadline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub total_millis: u64,
}

impl TimeRemaining {
    pub fn is_passed(&self) -> bool {
        self.total_millis == 0
    }
}

/// A fixed instant the site counts down to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    pub title: String,
    pub target: DateTime<FixedOffset>,
    /// Show the time of day next to the date.
    pub show_time: bool,
}
