pub mod availability;
pub mod fit;
pub mod ranking;
pub mod team;
pub mod traits;
pub mod year;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::instrument;

use rostra_configuration::StaffingOptions;
use rostra_contracts::{
    CandidateFit, MonthlyAvailabilitySummary, SkillAggregationRow, SkillSort,
};
use rostra_staffing_environment::roster::skill::SkillId;
use rostra_staffing_environment::roster::Member;
use rostra_staffing_environment::time_environment::TimeWindow;
use rostra_staffing_environment::StaffingEnvironment;

/// Request-scoped scoring facade: options in, pure computations out. Owns no
/// shared state and reads no clock; "now" is always an explicit argument, so
/// two calls with identical inputs return identical outputs.
#[derive(Clone, Default, Debug)]
pub struct StaffingEngine {
    options: StaffingOptions,
}

impl StaffingEngine {
    pub fn new(options: StaffingOptions) -> Self {
        StaffingEngine { options }
    }

    pub fn options(&self) -> &StaffingOptions {
        &self.options
    }

    /// Fit indicators for already-selected members: the full roster ranked,
    /// nothing truncated.
    #[instrument(skip(self, environment))]
    pub fn existing_member_fit(
        &self,
        environment: &StaffingEnvironment,
        window: &TimeWindow,
        required_skills: &BTreeSet<SkillId>,
        filter: Option<&str>,
    ) -> Vec<CandidateFit> {
        ranking::rank_candidates(&environment.roster, window, required_skills, filter)
    }

    /// Proposes new candidates: the configured number of best fits over the
    /// (optionally filtered) roster.
    #[instrument(skip(self, environment))]
    pub fn suggested_members(
        &self,
        environment: &StaffingEnvironment,
        window: &TimeWindow,
        required_skills: &BTreeSet<SkillId>,
        filter: Option<&str>,
    ) -> Vec<CandidateFit> {
        ranking::suggest_candidates(
            &environment.roster,
            window,
            required_skills,
            filter,
            self.options.suggestion_limit,
        )
    }

    /// Year view for one member: monthly availability, vacation days, and
    /// forward project utilization from `now`.
    #[instrument(skip(self, environment, member))]
    pub fn year_overview(
        &self,
        environment: &StaffingEnvironment,
        member: &Member,
        year: i32,
        now: DateTime<Utc>,
    ) -> MonthlyAvailabilitySummary {
        year::monthly_summaries(
            year,
            &member.absences,
            environment.projects_for(&member.id),
            now,
            &self.options,
        )
    }

    /// Dashboard skill rows with the unavailable-today overlay.
    #[instrument(skip(self, environment))]
    pub fn team_skill_overview(
        &self,
        environment: &StaffingEnvironment,
        sort: SkillSort,
        now: DateTime<Utc>,
    ) -> Vec<SkillAggregationRow> {
        team::aggregate_team_skills(environment, sort, now)
    }
}
