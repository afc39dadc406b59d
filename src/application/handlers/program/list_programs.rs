//! ListProgramsHandler - query handler for the upcoming program listing.

use std::sync::Arc;

use crate::domain::foundation::{today, AuthenticatedMember, DomainError};
use crate::domain::program::{CoachProgram, ProgramEnrollment};
use crate::ports::ProgramRepository;

/// Query for upcoming programs plus the caller's own enrollments.
#[derive(Debug, Clone)]
pub struct ListProgramsQuery {
    pub member: AuthenticatedMember,
}

/// Result of the program listing query.
#[derive(Debug, Clone)]
pub struct ListProgramsResult {
    /// Programs on or after today, ordered by date then time slot.
    pub programs: Vec<CoachProgram>,

    /// The caller's enrollments, so the listing can mark which programs
    /// the member already joined.
    pub enrollments: Vec<ProgramEnrollment>,
}

/// Handler feeding the member-facing program browser.
pub struct ListProgramsHandler {
    programs: Arc<dyn ProgramRepository>,
}

impl ListProgramsHandler {
    pub fn new(programs: Arc<dyn ProgramRepository>) -> Self {
        Self { programs }
    }

    pub async fn handle(&self, query: ListProgramsQuery) -> Result<ListProgramsResult, DomainError> {
        let programs = self.programs.list_from(today()).await?;
        let enrollments = self
            .programs
            .list_enrollments(&query.member.account)
            .await?;
        Ok(ListProgramsResult {
            programs,
            enrollments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgramRepository;
    use crate::domain::foundation::{MemberAccount, MemberRole};
    use chrono::Duration;

    fn member(account: &str) -> AuthenticatedMember {
        AuthenticatedMember::new(
            MemberAccount::new(account).unwrap(),
            "Alice",
            MemberRole::Member,
        )
    }

    fn program_on(date: chrono::NaiveDate) -> CoachProgram {
        CoachProgram::new(
            "City Arena",
            "1 Arena Road",
            date,
            "19:00-21:00",
            40_000,
            8,
            "Lin",
            "0912-345-678",
            "beginner",
        )
    }

    #[tokio::test]
    async fn listing_drops_past_programs_and_scopes_enrollments() {
        let upcoming = program_on(today() + Duration::days(5));
        let past = program_on(today() - Duration::days(1));
        let own =
            ProgramEnrollment::for_program(MemberAccount::new("Alice@1234ab").unwrap(), &upcoming);
        let other =
            ProgramEnrollment::for_program(MemberAccount::new("Bobby@1234ab").unwrap(), &upcoming);

        let repo = Arc::new(
            InMemoryProgramRepository::new()
                .with_program(upcoming.clone())
                .with_program(past)
                .with_enrollment(own)
                .with_enrollment(other),
        );
        let handler = ListProgramsHandler::new(repo);

        let result = handler
            .handle(ListProgramsQuery {
                member: member("Alice@1234ab"),
            })
            .await
            .unwrap();

        assert_eq!(result.programs.len(), 1);
        assert_eq!(result.programs[0].id, upcoming.id);
        assert_eq!(result.enrollments.len(), 1);
        assert_eq!(
            result.enrollments[0].member_account.as_str(),
            "Alice@1234ab"
        );
    }
}
