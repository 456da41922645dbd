use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Hash, Clone, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The slice of a project the engine reads: its staffing window and whether
/// it is still a draft. Drafts never make anyone unavailable or utilized.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub draft: bool,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        draft: bool,
    ) -> Self {
        Project {
            id: ProjectId(id.into()),
            start_time,
            end_time,
            draft,
        }
    }

    /// Inclusive on both bounds; a project still staffs its final day.
    pub fn is_active_at(&self, instant: &DateTime<Utc>) -> bool {
        !self.draft && self.start_time <= *instant && *instant <= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_is_active_at_inclusive_bounds() {
        let project = Project::new("p-1", utc(2024, 1, 1), utc(2024, 1, 5), false);

        assert!(project.is_active_at(&utc(2024, 1, 1)));
        assert!(project.is_active_at(&utc(2024, 1, 5)));
        assert!(!project.is_active_at(&utc(2024, 1, 6)));
    }

    #[test]
    fn test_draft_projects_are_never_active() {
        let project = Project::new("p-1", utc(2024, 1, 1), utc(2024, 1, 5), true);

        assert!(!project.is_active_at(&utc(2024, 1, 3)));
    }
}
