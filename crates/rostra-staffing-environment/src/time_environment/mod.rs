pub mod day;

use anyhow::{ensure, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use self::day::DaySteps;

pub const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Half-open window `[start, end)` that all availability math is evaluated
/// against. Callers supply UTC-normalized instants; nothing below this type
/// performs a timezone conversion.
#[derive(Eq, PartialEq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        ensure!(
            start < end,
            "a time window has to have a positive duration"
        );
        Ok(TimeWindow { start, end })
    }

    pub fn start(&self) -> &DateTime<Utc> {
        &self.start
    }

    pub fn end(&self) -> &DateTime<Utc> {
        &self.end
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant < self.end
    }

    /// Clips `[start, end)` to this window. `None` when the two ranges do
    /// not overlap.
    pub fn clip(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Option<TimeWindow> {
        let clipped_start = self.start.max(start);
        let clipped_end = self.end.min(end);
        (clipped_start < clipped_end).then(|| TimeWindow {
            start: clipped_start,
            end: clipped_end,
        })
    }

    pub fn days(&self) -> DaySteps {
        DaySteps::new(self.start, self.end)
    }

    /// Offset of `instant` from the window start in whole days. `None` when
    /// the instant falls outside the window.
    pub fn day_offset(&self, instant: &DateTime<Utc>) -> Option<usize> {
        if !self.contains(instant) {
            return None;
        }
        let elapsed = instant.signed_duration_since(self.start).num_milliseconds();
        Some((elapsed / MILLISECONDS_PER_DAY) as usize)
    }

    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    pub fn business_day_count(&self) -> usize {
        self.days().filter(is_business_day).count()
    }
}

/// Saturday and Sunday (UTC) are not staffable; everything else is.
pub fn is_business_day(date: &DateTime<Utc>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of days in `month` of `year`, leap years included, computed as the
/// day before the first of the following month. `None` for month outside
/// 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_of_next.pred_opt()?.day())
}
