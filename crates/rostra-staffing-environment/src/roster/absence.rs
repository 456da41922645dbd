use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// A time-bounded, possibly weekday-filtered, possibly partial reduction in
/// a member's availability. Records are immutable inputs; the engine never
/// mutates them.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Absence {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: AbsenceKind,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbsenceKind {
    /// Recurring partial unavailability, constrained to specific weekdays
    /// within the record's range.
    Planned {
        days_of_week: HashSet<Weekday>,
        #[serde(default = "full_percent_away")]
        percent_away: f64,
    },
    /// Applies to every day in the record's range.
    Vacation {
        #[serde(default = "full_percent_away")]
        percent_away: f64,
    },
}

fn full_percent_away() -> f64 {
    1.0
}

impl Absence {
    pub fn vacation(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Absence {
            start_time,
            end_time,
            kind: AbsenceKind::Vacation {
                percent_away: full_percent_away(),
            },
        }
    }

    pub fn planned(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        days_of_week: impl IntoIterator<Item = Weekday>,
        percent_away: f64,
    ) -> Self {
        Absence {
            start_time,
            end_time,
            kind: AbsenceKind::Planned {
                days_of_week: days_of_week.into_iter().collect(),
                percent_away,
            },
        }
    }

    /// Records with `end_time <= start_time` are treated as no-ops by every
    /// consumer instead of failing the surrounding computation.
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn is_vacation(&self) -> bool {
        matches!(self.kind, AbsenceKind::Vacation { .. })
    }

    pub fn percent_away(&self) -> f64 {
        match &self.kind {
            AbsenceKind::Planned { percent_away, .. } => *percent_away,
            AbsenceKind::Vacation { percent_away } => *percent_away,
        }
    }

    /// Whether the record reduces availability on the day of `instant`,
    /// assuming the instant lies inside the record's range.
    pub fn applies_on(&self, instant: &DateTime<Utc>) -> bool {
        match &self.kind {
            AbsenceKind::Vacation { .. } => true,
            AbsenceKind::Planned { days_of_week, .. } => days_of_week.contains(&instant.weekday()),
        }
    }

    /// Date-level overlap: whether the record's span covers the calendar day
    /// of `instant`. Used by the dashboard's unavailable-today flag, which
    /// counts a vacation's final day as blocked even late in the afternoon.
    pub fn covers_date(&self, instant: &DateTime<Utc>) -> bool {
        let date = instant.date_naive();
        self.start_time.date_naive() <= date && date <= self.end_time.date_naive()
    }
}
