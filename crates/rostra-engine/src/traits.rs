use std::collections::HashMap;

use anyhow::Result;
use mockall::automock;
use tracing::{event, Level};

use rostra_staffing_environment::project::Project;
use rostra_staffing_environment::roster::absence::Absence;
use rostra_staffing_environment::roster::{Member, MemberId};
use rostra_staffing_environment::time_environment::TimeWindow;
use rostra_staffing_environment::StaffingEnvironment;

/// Person-directory lookup owned by the surrounding application. `Ok(None)`
/// marks an orphaned reference; `Err` is a collaborator failure.
#[automock]
pub trait MemberDirectory {
    fn resolve(&self, id: &MemberId) -> Result<Option<Member>>;
}

/// Absence records per member, restricted to a window.
#[automock]
pub trait AbsenceSource {
    fn absences_for(
        &self,
        ids: &[MemberId],
        window: &TimeWindow,
    ) -> Result<HashMap<MemberId, Vec<Absence>>>;
}

/// Active-project windows per member, for the unavailability and utilization
/// overlays.
#[automock]
pub trait ProjectSource {
    fn projects_for(&self, ids: &[MemberId]) -> Result<HashMap<MemberId, Vec<Project>>>;
}

/// Builds a scoring snapshot from the collaborators. Ids the directory
/// cannot resolve are dropped from the roster rather than failing the whole
/// request; collaborator errors propagate untouched.
pub fn assemble_environment(
    ids: &[MemberId],
    window: &TimeWindow,
    directory: &dyn MemberDirectory,
    absence_source: &dyn AbsenceSource,
    project_source: &dyn ProjectSource,
) -> Result<StaffingEnvironment> {
    let mut absences = absence_source.absences_for(ids, window)?;
    let projects = project_source.projects_for(ids)?;

    let mut roster = Vec::with_capacity(ids.len());
    for id in ids {
        match directory.resolve(id)? {
            Some(mut member) => {
                if let Some(records) = absences.remove(id) {
                    member.absences = records;
                }
                roster.push(member);
            }
            None => {
                event!(Level::WARN, member_id = %id, "dropping unresolved roster member");
            }
        }
    }

    Ok(StaffingEnvironment::builder()
        .roster(roster)
        .projects(projects)
        .build())
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate;

    use super::*;

    fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn window() -> TimeWindow {
        TimeWindow::new(utc(2024, 1, 1), utc(2024, 2, 1)).unwrap()
    }

    fn empty_sources() -> (MockAbsenceSource, MockProjectSource) {
        let mut absence_source = MockAbsenceSource::new();
        absence_source
            .expect_absences_for()
            .returning(|_, _| Ok(HashMap::new()));
        let mut project_source = MockProjectSource::new();
        project_source
            .expect_projects_for()
            .returning(|_| Ok(HashMap::new()));
        (absence_source, project_source)
    }

    #[test]
    fn test_unresolved_members_are_dropped() {
        let ids = vec![MemberId::new("known"), MemberId::new("orphan")];

        let mut directory = MockMemberDirectory::new();
        directory
            .expect_resolve()
            .with(predicate::eq(MemberId::new("known")))
            .returning(|id| Ok(Some(Member::new(id.clone(), "Ada", "Engineer"))));
        directory
            .expect_resolve()
            .with(predicate::eq(MemberId::new("orphan")))
            .returning(|_| Ok(None));
        let (absence_source, project_source) = empty_sources();

        let environment = assemble_environment(
            &ids,
            &window(),
            &directory,
            &absence_source,
            &project_source,
        )
        .unwrap();

        assert_eq!(environment.roster.len(), 1);
        assert_eq!(environment.roster[0].id, MemberId::new("known"));
    }

    #[test]
    fn test_absences_are_attached_to_their_member() {
        let ids = vec![MemberId::new("m-1")];

        let mut directory = MockMemberDirectory::new();
        directory
            .expect_resolve()
            .returning(|id| Ok(Some(Member::new(id.clone(), "Ada", "Engineer"))));
        let mut absence_source = MockAbsenceSource::new();
        absence_source.expect_absences_for().returning(|ids, _| {
            Ok(HashMap::from([(
                ids[0].clone(),
                vec![Absence::vacation(utc(2024, 1, 8), utc(2024, 1, 13))],
            )]))
        });
        let mut project_source = MockProjectSource::new();
        project_source
            .expect_projects_for()
            .returning(|_| Ok(HashMap::new()));

        let environment = assemble_environment(
            &ids,
            &window(),
            &directory,
            &absence_source,
            &project_source,
        )
        .unwrap();

        assert_eq!(environment.roster[0].absences.len(), 1);
    }

    #[test]
    fn test_collaborator_failures_propagate_untouched() {
        let ids = vec![MemberId::new("m-1")];

        let directory = MockMemberDirectory::new();
        let mut absence_source = MockAbsenceSource::new();
        absence_source
            .expect_absences_for()
            .returning(|_, _| Err(anyhow!("directory unreachable")));
        let project_source = MockProjectSource::new();

        let result = assemble_environment(
            &ids,
            &window(),
            &directory,
            &absence_source,
            &project_source,
        );

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("directory unreachable"));
    }
}
