use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar window rendered by the grid.
///
/// `today` is always the wall-clock date of the render pass; it is stored here
/// only so a single pass sees one consistent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub since: NaiveDate,
    pub today: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(since: NaiveDate, today: NaiveDate) -> Self {
        Self { since, today }
    }

    /// Range from `since` up to the local wall-clock date.
    #[must_use]
    pub fn through_today(since: NaiveDate) -> Self {
        Self::new(since, Local::now().date_naive())
    }

    /// A range whose start lies after its end renders nothing.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.since > self.today
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.since && date <= self.today
    }

    /// Number of days in the window, zero when empty.
    #[must_use]
    pub fn day_count(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        usize::try_from((self.today - self.since).num_days() + 1).unwrap_or(0)
    }

    /// Same window start re-anchored on a fresh wall-clock date.
    #[must_use]
    pub fn refreshed(self) -> Self {
        Self::through_today(self.since)
    }
}
