use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{event, Level};

use rostra_staffing_environment::roster::absence::Absence;
use rostra_staffing_environment::time_environment::day::Day;
use rostra_staffing_environment::time_environment::{is_business_day, TimeWindow};

/// Per-day availability curve over a window. Business days start at the
/// full 1.0 baseline, weekends at 0.0; absences subtract from there and the
/// result is floored at 0.0 however many records stack on one day.
#[derive(Clone, PartialEq, Debug)]
pub struct AvailabilityProfile {
    window: TimeWindow,
    per_day: Vec<f64>,
}

/// What an overlay pass observed while applying absences, beyond the curve
/// itself.
#[derive(Clone, Default, Debug)]
pub struct OverlayReport {
    /// Calendar days a vacation record pulled below the full baseline, each
    /// counted once no matter how many records target it.
    pub vacation_days: BTreeSet<NaiveDate>,
}

impl AvailabilityProfile {
    /// All-available baseline for the window: 1.0 on business days, 0.0 on
    /// weekends.
    pub fn baseline(window: &TimeWindow) -> Self {
        let per_day = window
            .days()
            .map(|date| if is_business_day(&date) { 1.0 } else { 0.0 })
            .collect();
        AvailabilityProfile {
            window: window.clone(),
            per_day,
        }
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn per_day(&self) -> &[f64] {
        &self.per_day
    }

    pub fn day_fractions(&self) -> impl Iterator<Item = (Day, f64)> + '_ {
        self.window
            .days()
            .zip(self.per_day.iter())
            .enumerate()
            .map(|(index, (date, fraction))| (Day::new(index, date), *fraction))
    }

    /// Applies one member's absence records to the curve, day by day,
    /// clipped to the window. Records entirely outside the window are
    /// no-ops; partially overlapping records only touch the overlapping
    /// days; ill-formed records are skipped. Overlapping absences compound
    /// by subtraction, never below 0.0.
    pub fn apply_absences(&mut self, absences: &[Absence]) -> OverlayReport {
        let mut report = OverlayReport::default();

        for absence in absences {
            if !absence.is_well_formed() {
                event!(
                    Level::DEBUG,
                    start = %absence.start_time,
                    end = %absence.end_time,
                    "skipping malformed absence record"
                );
                continue;
            }
            let Some(clipped) = self.window.clip(absence.start_time, absence.end_time) else {
                continue;
            };

            let percent_away = absence.percent_away();
            for instant in clipped.days() {
                if !absence.applies_on(&instant) {
                    continue;
                }
                let Some(index) = self.window.day_offset(&instant) else {
                    continue;
                };
                let current = self.per_day[index];
                if absence.is_vacation() && current == 1.0 && percent_away > 0.0 {
                    report.vacation_days.insert(instant.date_naive());
                }
                self.per_day[index] = (current - percent_away).max(0.0);
            }
        }

        report
    }

    /// Business-day-weighted mean of the curve. Weekend entries never count;
    /// a window without a single business day reports the raw sum instead of
    /// dividing by zero, which comes out as 0.0.
    pub fn average_availability(&self) -> f64 {
        let mut sum = 0.0;
        let mut business_days = 0_usize;
        for (date, fraction) in self.window.days().zip(self.per_day.iter()) {
            if is_business_day(&date) {
                sum += fraction;
                business_days += 1;
            }
        }
        sum / business_days.max(1) as f64
    }
}
