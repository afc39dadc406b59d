//! CancelProgramHandler - command handler for withdrawing a published program.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AuthenticatedMember, DomainError, ErrorCode, ProgramId};
use crate::ports::ProgramRepository;

/// Command to cancel a program the caller published.
#[derive(Debug, Clone)]
pub struct CancelProgramCommand {
    pub coach: AuthenticatedMember,
    pub program_id: ProgramId,
}

/// Result of successful program cancellation.
#[derive(Debug, Clone)]
pub struct CancelProgramResult {
    /// Enrollments removed along with the program.
    pub enrollments_removed: i32,
}

/// Handler for program cancellation.
///
/// Ownership is checked against the program's stored coach name; a
/// mismatch is an explicit `Forbidden` rather than a silent no-match.
/// Deletion cascades to the program's enrollments in one transaction.
pub struct CancelProgramHandler {
    programs: Arc<dyn ProgramRepository>,
}

impl CancelProgramHandler {
    pub fn new(programs: Arc<dyn ProgramRepository>) -> Self {
        Self { programs }
    }

    pub async fn handle(
        &self,
        cmd: CancelProgramCommand,
    ) -> Result<CancelProgramResult, DomainError> {
        // 1. Only coaches cancel programs
        if !cmd.coach.is_coach() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only coaches can cancel programs",
            ));
        }

        // 2. The program must exist and be owned by the caller
        let program = self
            .programs
            .find_by_id(&cmd.program_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProgramNotFound, "Program not found"))?;
        if !program.is_owned_by(&cmd.coach.name) {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "This program belongs to another coach",
            )
            .with_detail("program_id", program.id.to_string()));
        }

        // 3. Delete the program and its enrollments together
        let enrollments_removed = program.registered_count;
        self.programs.delete_with_enrollments(&program.id).await?;

        info!(
            coach = %cmd.coach.account,
            program_id = %program.id,
            enrollments_removed,
            "program cancelled"
        );
        Ok(CancelProgramResult {
            enrollments_removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgramRepository;
    use crate::domain::foundation::{MemberAccount, MemberRole};
    use crate::domain::program::{CoachProgram, ProgramEnrollment};
    use chrono::NaiveDate;

    fn coach(name: &str) -> AuthenticatedMember {
        AuthenticatedMember::new(
            MemberAccount::new("Coach!aa2024").unwrap(),
            name,
            MemberRole::Coach,
        )
    }

    fn program() -> CoachProgram {
        CoachProgram::new(
            "City Arena",
            "1 Arena Road",
            NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            "19:00-21:00",
            40_000,
            8,
            "Lin",
            "0912-345-678",
            "beginner",
        )
    }

    #[tokio::test]
    async fn owner_cancellation_cascades_to_enrollments() {
        let mut p = program();
        p.enroll().unwrap();
        let enrollment =
            ProgramEnrollment::for_program(MemberAccount::new("Alice@1234ab").unwrap(), &p);
        let repo = Arc::new(
            InMemoryProgramRepository::new()
                .with_program(p.clone())
                .with_enrollment(enrollment),
        );
        let handler = CancelProgramHandler::new(repo.clone());

        let result = handler
            .handle(CancelProgramCommand {
                coach: coach("Lin"),
                program_id: p.id,
            })
            .await
            .unwrap();

        assert_eq!(result.enrollments_removed, 1);
        assert_eq!(repo.program_count(), 0);
        assert_eq!(repo.enrollment_count(), 0);
    }

    #[tokio::test]
    async fn another_coachs_program_is_forbidden() {
        let p = program();
        let repo = Arc::new(InMemoryProgramRepository::new().with_program(p.clone()));
        let handler = CancelProgramHandler::new(repo.clone());

        let err = handler
            .handle(CancelProgramCommand {
                coach: coach("Chen"),
                program_id: p.id,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(repo.program_count(), 1);
    }

    #[tokio::test]
    async fn member_caller_is_forbidden() {
        let p = program();
        let repo = Arc::new(InMemoryProgramRepository::new().with_program(p.clone()));
        let handler = CancelProgramHandler::new(repo);

        let member = AuthenticatedMember::new(
            MemberAccount::new("Alice@1234ab").unwrap(),
            "Lin", // same display name, wrong role
            MemberRole::Member,
        );
        let err = handler
            .handle(CancelProgramCommand {
                coach: member,
                program_id: p.id,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn missing_program_is_not_found() {
        let handler = CancelProgramHandler::new(Arc::new(InMemoryProgramRepository::new()));

        let err = handler
            .handle(CancelProgramCommand {
                coach: coach("Lin"),
                program_id: ProgramId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ProgramNotFound);
    }
}
