pub mod project;
pub mod roster;
pub mod time_environment;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use self::project::Project;
use self::roster::{Member, MemberId};

/// Snapshot of everything the scoring engine reads: the candidate roster and
/// each member's project assignments. Callers fetch a consistent snapshot
/// before invoking the engine; the engine itself performs no I/O and never
/// mutates the snapshot.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct StaffingEnvironment {
    pub roster: Vec<Member>,
    pub projects: HashMap<MemberId, Vec<Project>>,
}

impl StaffingEnvironment {
    pub fn builder() -> StaffingEnvironmentBuilder {
        StaffingEnvironmentBuilder::default()
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.roster.iter().find(|member| &member.id == id)
    }

    pub fn projects_for(&self, id: &MemberId) -> &[Project] {
        self.projects.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Default)]
pub struct StaffingEnvironmentBuilder {
    roster: Option<Vec<Member>>,
    projects: Option<HashMap<MemberId, Vec<Project>>>,
}

impl StaffingEnvironmentBuilder {
    pub fn build(self) -> StaffingEnvironment {
        StaffingEnvironment {
            roster: self.roster.unwrap_or_default(),
            projects: self.projects.unwrap_or_default(),
        }
    }

    pub fn roster(mut self, roster: Vec<Member>) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.roster.get_or_insert_with(Vec::new).push(member);
        self
    }

    pub fn projects(mut self, projects: HashMap<MemberId, Vec<Project>>) -> Self {
        self.projects = Some(projects);
        self
    }

    pub fn assign_project(mut self, id: MemberId, project: Project) -> Self {
        self.projects
            .get_or_insert_with(HashMap::new)
            .entry(id)
            .or_default()
            .push(project);
        self
    }
}
