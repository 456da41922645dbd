use std::fmt::{self, Display};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Hash, Clone, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Day {
    day_index: usize,
    date: DateTime<Utc>,
}

impl Day {
    pub fn new(day_index: usize, date: DateTime<Utc>) -> Self {
        Day { day_index, date }
    }

    pub fn date(&self) -> &DateTime<Utc> {
        &self.date
    }

    pub fn day_index(&self) -> usize {
        self.day_index
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.date_naive())
    }
}

/// Lazy, finite enumeration of instants from `start` (inclusive) to `end`
/// (exclusive) in fixed-size steps. Cloning restarts the sequence.
#[derive(Clone, Debug)]
pub struct DaySteps {
    cursor: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

impl DaySteps {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::with_step(start, end, Duration::days(1))
    }

    pub fn with_step(start: DateTime<Utc>, end: DateTime<Utc>, step: Duration) -> Self {
        DaySteps {
            cursor: start,
            end,
            step,
        }
    }
}

impl Iterator for DaySteps {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        // A non-positive step would never reach `end`.
        if self.step <= Duration::zero() || self.cursor >= self.end {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.cursor + self.step;
        Some(current)
    }
}
