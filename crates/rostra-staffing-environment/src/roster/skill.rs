use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque skill identifier. Matching is by identity, never by semantic
/// similarity.
#[derive(Eq, PartialEq, Hash, Clone, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        SkillId(id.into())
    }
}

impl Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A skill held by a member, with the self-assigned strength and the last
/// time the assignment was touched (drives the dashboard's "newest"
/// ordering).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SkillAssignment {
    pub skill_id: SkillId,
    pub strength: f64,
    pub modified_at: DateTime<Utc>,
}

impl SkillAssignment {
    pub fn new(skill_id: SkillId, strength: f64, modified_at: DateTime<Utc>) -> Self {
        SkillAssignment {
            skill_id,
            strength,
            modified_at,
        }
    }
}
