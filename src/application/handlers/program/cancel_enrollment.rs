//! CancelEnrollmentHandler - command handler for withdrawing from a program.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AuthenticatedMember, DomainError, EnrollmentId, ErrorCode};
use crate::domain::program::CoachProgram;
use crate::ports::ProgramRepository;

/// Command to cancel one of the caller's program enrollments.
#[derive(Debug, Clone)]
pub struct CancelEnrollmentCommand {
    pub member: AuthenticatedMember,
    pub enrollment_id: EnrollmentId,
}

/// Result of a successful withdrawal.
#[derive(Debug, Clone)]
pub struct CancelEnrollmentResult {
    pub program: CoachProgram,
}

/// Handler for enrollment cancellation.
///
/// The enrollment lookup is scoped to the caller's account; another
/// member's enrollment reads as `EnrollmentNotFound`.
pub struct CancelEnrollmentHandler {
    programs: Arc<dyn ProgramRepository>,
}

impl CancelEnrollmentHandler {
    pub fn new(programs: Arc<dyn ProgramRepository>) -> Self {
        Self { programs }
    }

    pub async fn handle(
        &self,
        cmd: CancelEnrollmentCommand,
    ) -> Result<CancelEnrollmentResult, DomainError> {
        // 1. The enrollment must exist and belong to the caller
        let enrollment = self
            .programs
            .find_enrollment(&cmd.enrollment_id, &cmd.member.account)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::EnrollmentNotFound, "Enrollment not found")
            })?;

        // 2. Load the program and return the seat
        let mut program = self
            .programs
            .find_by_id(&enrollment.program_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProgramNotFound, "Program not found"))?;
        program.withdraw()?;

        // 3. Commit the row delete and counter update together
        self.programs
            .commit_withdrawal(&program, &enrollment.id)
            .await?;

        info!(
            account = %cmd.member.account,
            program_id = %program.id,
            remaining = program.remaining_seats(),
            "program enrollment cancelled"
        );
        Ok(CancelEnrollmentResult { program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgramRepository;
    use crate::application::handlers::program::{EnrollInProgramCommand, EnrollInProgramHandler};
    use crate::domain::foundation::{MemberAccount, MemberRole};
    use chrono::NaiveDate;

    fn member(account: &str) -> AuthenticatedMember {
        AuthenticatedMember::new(
            MemberAccount::new(account).unwrap(),
            "Alice",
            MemberRole::Member,
        )
    }

    fn program(capacity: i32) -> CoachProgram {
        CoachProgram::new(
            "City Arena",
            "1 Arena Road",
            NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            "19:00-21:00",
            40_000,
            capacity,
            "Lin",
            "0912-345-678",
            "beginner",
        )
    }

    #[tokio::test]
    async fn enroll_then_cancel_restores_the_seat() {
        let p = program(8);
        let repo = Arc::new(InMemoryProgramRepository::new().with_program(p.clone()));

        let enrolled = EnrollInProgramHandler::new(repo.clone())
            .handle(EnrollInProgramCommand {
                member: member("Alice@1234ab"),
                program_id: p.id,
            })
            .await
            .unwrap();
        assert_eq!(repo.registered_count(&p.id), Some(1));

        let result = CancelEnrollmentHandler::new(repo.clone())
            .handle(CancelEnrollmentCommand {
                member: member("Alice@1234ab"),
                enrollment_id: enrolled.enrollment.id,
            })
            .await
            .unwrap();

        assert_eq!(result.program.registered_count, 0);
        assert_eq!(repo.registered_count(&p.id), Some(0));
        assert_eq!(repo.enrollment_count(), 0);
    }

    #[tokio::test]
    async fn another_members_enrollment_is_not_found() {
        let p = program(8);
        let repo = Arc::new(InMemoryProgramRepository::new().with_program(p.clone()));

        let enrolled = EnrollInProgramHandler::new(repo.clone())
            .handle(EnrollInProgramCommand {
                member: member("Alice@1234ab"),
                program_id: p.id,
            })
            .await
            .unwrap();

        let err = CancelEnrollmentHandler::new(repo.clone())
            .handle(CancelEnrollmentCommand {
                member: member("Mallory@99zz!"),
                enrollment_id: enrolled.enrollment.id,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EnrollmentNotFound);
        assert_eq!(repo.enrollment_count(), 1);
        assert_eq!(repo.registered_count(&p.id), Some(1));
    }

    #[tokio::test]
    async fn unknown_enrollment_is_not_found() {
        let handler = CancelEnrollmentHandler::new(Arc::new(InMemoryProgramRepository::new()));

        let err = handler
            .handle(CancelEnrollmentCommand {
                member: member("Alice@1234ab"),
                enrollment_id: EnrollmentId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EnrollmentNotFound);
    }
}
