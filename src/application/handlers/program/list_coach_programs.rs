//! ListCoachProgramsHandler - query handler for a coach's own programs.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedMember, DomainError, ErrorCode};
use crate::domain::program::CoachProgram;
use crate::ports::ProgramRepository;

/// Query for the programs the calling coach published.
#[derive(Debug, Clone)]
pub struct ListCoachProgramsQuery {
    pub coach: AuthenticatedMember,
}

/// Result of the coach program listing query.
#[derive(Debug, Clone)]
pub struct ListCoachProgramsResult {
    pub programs: Vec<CoachProgram>,
}

/// Handler feeding the coach's cancellation screen.
pub struct ListCoachProgramsHandler {
    programs: Arc<dyn ProgramRepository>,
}

impl ListCoachProgramsHandler {
    pub fn new(programs: Arc<dyn ProgramRepository>) -> Self {
        Self { programs }
    }

    pub async fn handle(
        &self,
        query: ListCoachProgramsQuery,
    ) -> Result<ListCoachProgramsResult, DomainError> {
        if !query.coach.is_coach() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only coaches can list their programs",
            ));
        }
        let programs = self.programs.list_by_coach(&query.coach.name).await?;
        Ok(ListCoachProgramsResult { programs })
    }
}
