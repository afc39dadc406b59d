//! EnrollInProgramHandler - command handler for enrolling in a program.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AuthenticatedMember, DomainError, ErrorCode, ProgramId};
use crate::domain::program::{CoachProgram, ProgramEnrollment};
use crate::ports::ProgramRepository;

/// Command to take one seat in a coach program.
#[derive(Debug, Clone)]
pub struct EnrollInProgramCommand {
    pub member: AuthenticatedMember,
    pub program_id: ProgramId,
}

/// Result of successful enrollment.
#[derive(Debug, Clone)]
pub struct EnrollInProgramResult {
    pub enrollment: ProgramEnrollment,
    pub program: CoachProgram,
}

/// Handler for program enrollment, the program-side twin of slot
/// reservation. Capacity is re-validated by the store under the program
/// lock, so a concurrent enrollment of the last seat loses there.
pub struct EnrollInProgramHandler {
    programs: Arc<dyn ProgramRepository>,
}

impl EnrollInProgramHandler {
    pub fn new(programs: Arc<dyn ProgramRepository>) -> Self {
        Self { programs }
    }

    pub async fn handle(
        &self,
        cmd: EnrollInProgramCommand,
    ) -> Result<EnrollInProgramResult, DomainError> {
        // 1. Load the program
        let mut program = self
            .programs
            .find_by_id(&cmd.program_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProgramNotFound, "Program not found"))?;

        // 2. Take a seat on the snapshot; fails fast when already full
        program.enroll()?;

        // 3. Commit the counter update and enrollment row together
        let enrollment = ProgramEnrollment::for_program(cmd.member.account.clone(), &program);
        self.programs
            .commit_enrollment(&program, &enrollment)
            .await?;

        info!(
            account = %cmd.member.account,
            program_id = %program.id,
            remaining = program.remaining_seats(),
            "program enrollment created"
        );
        Ok(EnrollInProgramResult {
            enrollment,
            program,
        })
    }
}
