use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use rostra_staffing_environment::roster::skill::{SkillAssignment, SkillId};
use rostra_staffing_environment::roster::{Member, MemberId};
use rostra_staffing_environment::time_environment::TimeWindow;

/// Scoring result for one candidate against one (window, required skills)
/// request. Ephemeral: rebuilt on every request, never persisted.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CandidateFit {
    pub member: Member,
    pub covered_skills: Vec<SkillAssignment>,
    pub average_availability: f64,
    pub fit: f64,
}

/// Year view for one member: one business-day-weighted availability figure
/// per month, the distinct vacation days booked, and forward project
/// utilization.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MonthlyAvailabilitySummary {
    pub monthly_availability: Vec<f64>,
    pub vacation_days: usize,
    pub project_utilization: f64,
}

/// One dashboard row: a skill aggregated over the team roster, with the
/// unavailable-today overlay applied to its holders.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SkillAggregationRow {
    pub skill_id: SkillId,
    pub total_strength: f64,
    pub holder_count: usize,
    pub unavailable_count: usize,
    pub last_modified: DateTime<Utc>,
}

/// The dashboard's orderings over the same aggregated rows.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SkillSort {
    Top,
    Newest,
    All,
}

impl SkillSort {
    /// Parses the query-string form used by the dashboard endpoints.
    pub fn from_request(value: &str) -> Result<Self, ContractError> {
        value
            .parse()
            .map_err(|_| ContractError::UnknownSkillSort(value.to_owned()))
    }
}

/// Request envelope handed over by the external API layer.
#[derive(PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "request_type", rename_all = "snake_case")]
pub enum StaffingRequest {
    ExistingMemberFit {
        window: TimeWindow,
        required_skills: BTreeSet<SkillId>,
        filter: Option<String>,
    },
    SuggestedMembers {
        window: TimeWindow,
        required_skills: BTreeSet<SkillId>,
        filter: Option<String>,
    },
    YearOverview {
        member_id: MemberId,
        year: i32,
    },
    TeamSkills {
        sort: SkillSort,
    },
}

#[derive(PartialEq, Debug, Serialize)]
#[serde(tag = "response_type", rename_all = "snake_case")]
pub enum StaffingResponse {
    ExistingMemberFit(Vec<CandidateFit>),
    SuggestedMembers(Vec<CandidateFit>),
    YearOverview(MonthlyAvailabilitySummary),
    TeamSkills(Vec<SkillAggregationRow>),
}

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("unknown skill sort order: {0}")]
    UnknownSkillSort(String),
}
