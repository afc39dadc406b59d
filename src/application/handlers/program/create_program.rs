//! CreateProgramHandler - command handler for publishing a coach program.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::{AuthenticatedMember, DomainError, ErrorCode, ValidationError};
use crate::domain::program::CoachProgram;
use crate::ports::{ProgramRepository, SlotRepository};

/// Command to publish a new coach program occurrence.
#[derive(Debug, Clone)]
pub struct CreateProgramCommand {
    pub coach: AuthenticatedMember,
    pub venue_name: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub fee_cents: i64,
    pub capacity: i32,
    pub coach_phone: String,
    pub recommendation_level: String,
}

/// Result of successful program creation.
#[derive(Debug, Clone)]
pub struct CreateProgramResult {
    pub program: CoachProgram,
}

/// Handler for program creation.
///
/// Coach-only. The venue is resolved by name and its address snapshot is
/// denormalized onto the program; later venue edits do not follow.
pub struct CreateProgramHandler {
    programs: Arc<dyn ProgramRepository>,
    slots: Arc<dyn SlotRepository>,
}

impl CreateProgramHandler {
    pub fn new(programs: Arc<dyn ProgramRepository>, slots: Arc<dyn SlotRepository>) -> Self {
        Self { programs, slots }
    }

    pub async fn handle(
        &self,
        cmd: CreateProgramCommand,
    ) -> Result<CreateProgramResult, DomainError> {
        // 1. Only coaches publish programs
        if !cmd.coach.is_coach() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only coaches can create programs",
            ));
        }

        // 2. Field checks
        if cmd.time_slot.trim().is_empty() {
            return Err(ValidationError::empty_field("time_slot").into());
        }
        if cmd.capacity <= 0 {
            return Err(
                ValidationError::invalid_format("capacity", "must be positive").into(),
            );
        }
        if cmd.fee_cents < 0 {
            return Err(
                ValidationError::invalid_format("fee_cents", "cannot be negative").into(),
            );
        }

        // 3. Resolve the venue and snapshot its address
        let venue = self
            .slots
            .find_venue_by_name(&cmd.venue_name)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::VenueNotFound, "Venue not found"))?;

        // 4. Persist with no enrollments
        let program = CoachProgram::new(
            venue.name,
            venue.address,
            cmd.date,
            cmd.time_slot,
            cmd.fee_cents,
            cmd.capacity,
            cmd.coach.name.clone(),
            cmd.coach_phone,
            cmd.recommendation_level,
        );
        self.programs.save(&program).await?;

        info!(
            coach = %cmd.coach.account,
            program_id = %program.id,
            venue = %program.venue_name,
            "program created"
        );
        Ok(CreateProgramResult { program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProgramRepository, InMemorySlotRepository};
    use crate::domain::foundation::{MemberAccount, MemberRole};
    use crate::domain::venue::Venue;

    fn coach() -> AuthenticatedMember {
        AuthenticatedMember::new(
            MemberAccount::new("Coach!aa2024").unwrap(),
            "Lin",
            MemberRole::Coach,
        )
    }

    fn member() -> AuthenticatedMember {
        AuthenticatedMember::new(
            MemberAccount::new("Alice@1234ab").unwrap(),
            "Alice",
            MemberRole::Member,
        )
    }

    fn command(caller: AuthenticatedMember) -> CreateProgramCommand {
        CreateProgramCommand {
            coach: caller,
            venue_name: "City Arena".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            time_slot: "19:00-21:00".to_string(),
            fee_cents: 40_000,
            capacity: 8,
            coach_phone: "0912-345-678".to_string(),
            recommendation_level: "beginner".to_string(),
        }
    }

    fn slot_repo_with_venue() -> Arc<InMemorySlotRepository> {
        Arc::new(
            InMemorySlotRepository::new()
                .with_venue(Venue::new("City Arena", "1 Arena Road", 25_000, 10)),
        )
    }

    #[tokio::test]
    async fn creation_snapshots_the_venue_address() {
        let programs = Arc::new(InMemoryProgramRepository::new());
        let handler = CreateProgramHandler::new(programs.clone(), slot_repo_with_venue());

        let result = handler.handle(command(coach())).await.unwrap();

        assert_eq!(result.program.address, "1 Arena Road");
        assert_eq!(result.program.coach_name, "Lin");
        assert_eq!(result.program.registered_count, 0);
        assert_eq!(programs.program_count(), 1);
    }

    #[tokio::test]
    async fn non_coach_caller_is_forbidden() {
        let programs = Arc::new(InMemoryProgramRepository::new());
        let handler = CreateProgramHandler::new(programs.clone(), slot_repo_with_venue());

        let err = handler.handle(command(member())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(programs.program_count(), 0);
    }

    #[tokio::test]
    async fn unknown_venue_is_rejected() {
        let programs = Arc::new(InMemoryProgramRepository::new());
        let handler =
            CreateProgramHandler::new(programs.clone(), Arc::new(InMemorySlotRepository::new()));

        let err = handler.handle(command(coach())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::VenueNotFound);
    }

    #[tokio::test]
    async fn non_positive_capacity_is_rejected() {
        let handler = CreateProgramHandler::new(
            Arc::new(InMemoryProgramRepository::new()),
            slot_repo_with_venue(),
        );

        let mut cmd = command(coach());
        cmd.capacity = 0;
        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.field(), Some("capacity"));
    }
}
