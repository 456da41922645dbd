use std::collections::BTreeSet;

use itertools::Itertools;

use rostra_contracts::CandidateFit;
use rostra_staffing_environment::roster::skill::SkillId;
use rostra_staffing_environment::roster::Member;
use rostra_staffing_environment::time_environment::TimeWindow;

use crate::availability::AvailabilityProfile;
use crate::fit::{covered_skills, fit_score, skill_coverage};

/// Scores one member against a window and required skill set.
pub fn score_member(
    member: &Member,
    window: &TimeWindow,
    required: &BTreeSet<SkillId>,
) -> CandidateFit {
    let mut profile = AvailabilityProfile::baseline(window);
    profile.apply_absences(&member.absences);
    let average_availability = profile.average_availability();
    let coverage = skill_coverage(member, required);

    CandidateFit {
        member: member.clone(),
        covered_skills: covered_skills(member, required),
        average_availability,
        fit: fit_score(coverage, average_availability),
    }
}

/// Ranks the roster by fit, best first, returning a fresh vector and leaving
/// the roster untouched. The sort is stable, so equal scores keep their
/// roster order. The optional name/job-title filter runs before scoring, so
/// any downstream truncation sees only the filtered set.
pub fn rank_candidates(
    roster: &[Member],
    window: &TimeWindow,
    required: &BTreeSet<SkillId>,
    filter: Option<&str>,
) -> Vec<CandidateFit> {
    roster
        .iter()
        .filter(|member| filter.map_or(true, |needle| member.matches_filter(needle)))
        .map(|member| score_member(member, window, required))
        .sorted_by(|a, b| b.fit.total_cmp(&a.fit))
        .collect()
}

/// The suggestion view: the full ranking truncated to the `limit` best
/// candidates.
pub fn suggest_candidates(
    roster: &[Member],
    window: &TimeWindow,
    required: &BTreeSet<SkillId>,
    filter: Option<&str>,
    limit: usize,
) -> Vec<CandidateFit> {
    let mut ranked = rank_candidates(roster, window, required, filter);
    ranked.truncate(limit);
    ranked
}
