pub mod absence;
pub mod skill;

use std::collections::HashSet;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use self::absence::Absence;
use self::skill::{SkillAssignment, SkillId};

/// Opaque member identifier, owned by the external user directory.
#[derive(Eq, PartialEq, Hash, Clone, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        MemberId(id.into())
    }
}

impl Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A staffable person as read from the user directory, carrying the absence
/// records and skill assignments the scoring request was assembled with.
/// Read-only to the engine; every derived value is built fresh per request.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub job_title: String,
    pub skills: Vec<SkillAssignment>,
    pub absences: Vec<Absence>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, job_title: impl Into<String>) -> Self {
        Member {
            id,
            name: name.into(),
            job_title: job_title.into(),
            skills: Vec::new(),
            absences: Vec::new(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<SkillAssignment>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_absences(mut self, absences: Vec<Absence>) -> Self {
        self.absences = absences;
        self
    }

    pub fn skill_ids(&self) -> HashSet<&SkillId> {
        self.skills
            .iter()
            .map(|assignment| &assignment.skill_id)
            .collect()
    }

    /// Case-insensitive substring match over name and job title, used as
    /// the pre-scoring roster filter.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.job_title.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_filter_is_case_insensitive() {
        let member = Member::new(MemberId::new("m-1"), "Ada Lovelace", "Backend Engineer");

        assert!(member.matches_filter("ada"));
        assert!(member.matches_filter("LOVELACE"));
        assert!(member.matches_filter("backend"));
        assert!(!member.matches_filter("designer"));
    }

    #[test]
    fn test_skill_ids_deduplicates() {
        use chrono::TimeZone;
        use chrono::Utc;

        let modified_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let member = Member::new(MemberId::new("m-1"), "Ada", "Engineer").with_skills(vec![
            SkillAssignment::new(SkillId::new("rust"), 3.0, modified_at),
            SkillAssignment::new(SkillId::new("rust"), 5.0, modified_at),
        ]);

        assert_eq!(member.skill_ids().len(), 1);
    }
}
