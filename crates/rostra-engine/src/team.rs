use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use rostra_contracts::{SkillAggregationRow, SkillSort};
use rostra_staffing_environment::roster::skill::SkillId;
use rostra_staffing_environment::roster::MemberId;
use rostra_staffing_environment::StaffingEnvironment;

struct SkillAccumulator<'a> {
    total_strength: f64,
    holders: HashSet<&'a MemberId>,
    last_modified: DateTime<Utc>,
}

/// Per-skill aggregation over the roster with the unavailable-today overlay.
/// Rows are accumulated in skill-id order so identical inputs always produce
/// identical output, whatever ordering is requested on top.
pub fn aggregate_team_skills(
    environment: &StaffingEnvironment,
    sort: SkillSort,
    now: DateTime<Utc>,
) -> Vec<SkillAggregationRow> {
    let mut per_skill: BTreeMap<&SkillId, SkillAccumulator> = BTreeMap::new();

    for member in &environment.roster {
        for assignment in &member.skills {
            let accumulator =
                per_skill
                    .entry(&assignment.skill_id)
                    .or_insert_with(|| SkillAccumulator {
                        total_strength: 0.0,
                        holders: HashSet::new(),
                        last_modified: assignment.modified_at,
                    });
            accumulator.total_strength += assignment.strength;
            accumulator.holders.insert(&member.id);
            accumulator.last_modified = accumulator.last_modified.max(assignment.modified_at);
        }
    }

    let unavailable = unavailable_members(environment, now);

    let mut rows: Vec<SkillAggregationRow> = per_skill
        .into_iter()
        .map(|(skill_id, accumulator)| SkillAggregationRow {
            skill_id: skill_id.clone(),
            total_strength: accumulator.total_strength,
            holder_count: accumulator.holders.len(),
            unavailable_count: accumulator
                .holders
                .iter()
                .filter(|id| unavailable.contains(**id))
                .count(),
            last_modified: accumulator.last_modified,
        })
        .collect();

    match sort {
        SkillSort::Top => rows.sort_by(|a, b| b.total_strength.total_cmp(&a.total_strength)),
        SkillSort::Newest => rows.sort_by(|a, b| b.last_modified.cmp(&a.last_modified)),
        SkillSort::All => {}
    }

    rows
}

/// Members unavailable at `now`: staffed on an active non-draft project, or
/// away on an absence whose span covers today and whose kind applies to
/// today's weekday.
fn unavailable_members<'a>(
    environment: &'a StaffingEnvironment,
    now: DateTime<Utc>,
) -> HashSet<&'a MemberId> {
    environment
        .roster
        .iter()
        .filter(|member| {
            let on_active_project = environment
                .projects_for(&member.id)
                .iter()
                .any(|project| project.is_active_at(&now));
            let absent_today = member.absences.iter().any(|absence| {
                absence.is_well_formed() && absence.covers_date(&now) && absence.applies_on(&now)
            });
            on_active_project || absent_today
        })
        .map(|member| &member.id)
        .collect()
}
