use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use rostra_configuration::StaffingOptions;
use rostra_contracts::MonthlyAvailabilitySummary;
use rostra_staffing_environment::project::Project;
use rostra_staffing_environment::roster::absence::Absence;
use rostra_staffing_environment::time_environment::TimeWindow;

use crate::availability::AvailabilityProfile;

const MONTHS_PER_YEAR: u32 = 12;

/// Year view for one member: a business-day-weighted availability figure per
/// month, the distinct calendar days booked as vacation, and project
/// utilization over the forward horizon starting at `now`.
pub fn monthly_summaries(
    year: i32,
    absences: &[Absence],
    projects: &[Project],
    now: DateTime<Utc>,
    options: &StaffingOptions,
) -> MonthlyAvailabilitySummary {
    let mut monthly_availability = Vec::with_capacity(MONTHS_PER_YEAR as usize);
    let mut vacation_days: BTreeSet<NaiveDate> = BTreeSet::new();

    for month in 1..=MONTHS_PER_YEAR {
        let Some(window) = month_window(year, month) else {
            monthly_availability.push(0.0);
            continue;
        };
        let mut profile = AvailabilityProfile::baseline(&window);
        let report = profile.apply_absences(absences);
        vacation_days.extend(report.vacation_days);
        monthly_availability.push(profile.average_availability());
    }

    MonthlyAvailabilitySummary {
        monthly_availability,
        vacation_days: vacation_days.len(),
        project_utilization: project_utilization(
            now,
            options.utilization_horizon_days,
            projects,
        ),
    }
}

/// Fraction of the next `horizon_days` days on which any active, non-draft
/// project window (inclusive bounds) contains the day. Non-positive horizons
/// report 0.0 rather than raising.
pub fn project_utilization(now: DateTime<Utc>, horizon_days: i64, projects: &[Project]) -> f64 {
    if horizon_days <= 0 {
        return 0.0;
    }

    let mut utilized = 0_usize;
    for offset in 0..horizon_days {
        let day = now + Duration::days(offset);
        if projects.iter().any(|project| project.is_active_at(&day)) {
            utilized += 1;
        }
    }
    utilized as f64 / horizon_days as f64
}

fn month_window(year: i32, month: u32) -> Option<TimeWindow> {
    let start = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
    let (next_year, next_month) = if month == MONTHS_PER_YEAR {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()?;
    TimeWindow::new(start, end).ok()
}
