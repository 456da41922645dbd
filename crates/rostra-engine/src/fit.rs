use std::collections::BTreeSet;

use rostra_staffing_environment::roster::skill::{SkillAssignment, SkillId};
use rostra_staffing_environment::roster::Member;

/// Fraction of the required skills the member holds. Skill identity is
/// opaque; matching is exact. An empty requirement set carries no positive
/// signal and scores 0.0.
pub fn skill_coverage(member: &Member, required: &BTreeSet<SkillId>) -> f64 {
    let held = member.skill_ids();
    let covered = required.iter().filter(|id| held.contains(id)).count();
    covered as f64 / required.len().max(1) as f64
}

/// The member's assignments for skills the request asks for, in the order
/// they appear on the member.
pub fn covered_skills(member: &Member, required: &BTreeSet<SkillId>) -> Vec<SkillAssignment> {
    member
        .skills
        .iter()
        .filter(|assignment| required.contains(&assignment.skill_id))
        .cloned()
        .collect()
}

/// Coverage times average availability. Both factors live in [0, 1], so the
/// product does too, and only candidates strong on both axes score high: a
/// fully-skilled member on vacation the whole window and a fully-available
/// member without the skills both land near zero.
pub fn fit_score(coverage: f64, average_availability: f64) -> f64 {
    coverage * average_availability
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    use rostra_staffing_environment::roster::MemberId;

    use super::*;

    fn modified_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn member_with_skills(skills: &[&str]) -> Member {
        Member::new(MemberId::new("m-1"), "Ada", "Engineer").with_skills(
            skills
                .iter()
                .map(|id| SkillAssignment::new(SkillId::new(*id), 3.0, modified_at()))
                .collect(),
        )
    }

    fn required(ids: &[&str]) -> BTreeSet<SkillId> {
        ids.iter().map(|id| SkillId::new(*id)).collect()
    }

    #[test]
    fn test_coverage_of_empty_requirement_is_zero() {
        let member = member_with_skills(&["rust", "sql"]);

        assert_eq!(skill_coverage(&member, &required(&[])), 0.0);
    }

    #[test]
    fn test_coverage_is_one_iff_required_skills_are_a_subset() {
        let member = member_with_skills(&["rust", "sql", "graphql"]);

        assert_eq!(skill_coverage(&member, &required(&["rust", "sql"])), 1.0);
        assert!(skill_coverage(&member, &required(&["rust", "cobol"])) < 1.0);
    }

    #[test]
    fn test_partial_coverage() {
        let member = member_with_skills(&["rust"]);

        assert_eq!(
            skill_coverage(&member, &required(&["rust", "sql", "graphql", "docker"])),
            0.25
        );
    }

    #[test]
    fn test_unknown_required_skills_are_dropped_silently() {
        let member = member_with_skills(&[]);

        assert_eq!(skill_coverage(&member, &required(&["rust"])), 0.0);
    }

    #[test]
    fn test_covered_skills_keeps_member_order() {
        let member = member_with_skills(&["sql", "rust", "graphql"]);

        let covered = covered_skills(&member, &required(&["rust", "sql"]));

        let ids: Vec<_> = covered
            .iter()
            .map(|assignment| assignment.skill_id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["sql", "rust"]);
    }

    proptest! {
        #[test]
        fn property_fit_stays_in_unit_interval(
            coverage in 0.0_f64..=1.0,
            availability in 0.0_f64..=1.0,
        ) {
            let fit = fit_score(coverage, availability);
            prop_assert!((0.0..=1.0).contains(&fit));
        }

        /// Raising either factor while holding the other fixed never lowers
        /// the score.
        #[test]
        fn property_fit_is_monotone_in_each_factor(
            coverage in 0.0_f64..=1.0,
            availability_low in 0.0_f64..=1.0,
            availability_high in 0.0_f64..=1.0,
        ) {
            let (low, high) = if availability_low <= availability_high {
                (availability_low, availability_high)
            } else {
                (availability_high, availability_low)
            };
            prop_assert!(fit_score(coverage, low) <= fit_score(coverage, high));
            prop_assert!(fit_score(low, coverage) <= fit_score(high, coverage));
        }
    }
}
