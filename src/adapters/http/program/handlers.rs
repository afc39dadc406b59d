//! HTTP handlers for coach program and enrollment endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    CancelEnrollmentResponse, CancelProgramResponse, CreateProgramRequest, EnrollResponse,
    ListProgramsResponse, ProgramResponse,
};
use crate::adapters::http::auth::CurrentMember;
use crate::adapters::http::error::ApiError;
use crate::application::handlers::program::{
    CancelEnrollmentCommand, CancelEnrollmentHandler, CancelProgramCommand, CancelProgramHandler,
    CreateProgramCommand, CreateProgramHandler, EnrollInProgramCommand, EnrollInProgramHandler,
    ListCoachProgramsHandler, ListCoachProgramsQuery, ListProgramsHandler, ListProgramsQuery,
};
use crate::domain::foundation::{EnrollmentId, ProgramId};
use crate::ports::{ProgramRepository, SlotRepository};

/// Shared state for program endpoints.
///
/// Program creation needs the slot store too, for the venue lookup that
/// denormalizes the address onto the program.
#[derive(Clone)]
pub struct ProgramAppState {
    pub programs: Arc<dyn ProgramRepository>,
    pub slots: Arc<dyn SlotRepository>,
}

impl ProgramAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_program_handler(&self) -> CreateProgramHandler {
        CreateProgramHandler::new(self.programs.clone(), self.slots.clone())
    }

    pub fn cancel_program_handler(&self) -> CancelProgramHandler {
        CancelProgramHandler::new(self.programs.clone())
    }

    pub fn enroll_handler(&self) -> EnrollInProgramHandler {
        EnrollInProgramHandler::new(self.programs.clone())
    }

    pub fn cancel_enrollment_handler(&self) -> CancelEnrollmentHandler {
        CancelEnrollmentHandler::new(self.programs.clone())
    }

    pub fn list_programs_handler(&self) -> ListProgramsHandler {
        ListProgramsHandler::new(self.programs.clone())
    }

    pub fn list_coach_programs_handler(&self) -> ListCoachProgramsHandler {
        ListCoachProgramsHandler::new(self.programs.clone())
    }
}

/// GET /api/programs - upcoming programs plus the caller's enrollments
pub async fn list_programs(
    State(state): State<ProgramAppState>,
    CurrentMember(member): CurrentMember,
) -> Result<Json<ListProgramsResponse>, ApiError> {
    let result = state
        .list_programs_handler()
        .handle(ListProgramsQuery { member })
        .await?;

    Ok(Json(ListProgramsResponse {
        programs: result.programs.into_iter().map(Into::into).collect(),
        enrollments: result.enrollments.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/programs/mine - the calling coach's own programs
pub async fn list_coach_programs(
    State(state): State<ProgramAppState>,
    CurrentMember(coach): CurrentMember,
) -> Result<Json<Vec<ProgramResponse>>, ApiError> {
    let result = state
        .list_coach_programs_handler()
        .handle(ListCoachProgramsQuery { coach })
        .await?;

    Ok(Json(result.programs.into_iter().map(Into::into).collect()))
}

/// POST /api/programs - publish a new program occurrence (coach only)
pub async fn create_program(
    State(state): State<ProgramAppState>,
    CurrentMember(coach): CurrentMember,
    Json(request): Json<CreateProgramRequest>,
) -> Result<(StatusCode, Json<ProgramResponse>), ApiError> {
    let result = state
        .create_program_handler()
        .handle(CreateProgramCommand {
            coach,
            venue_name: request.venue_name,
            date: request.date,
            time_slot: request.time_slot,
            fee_cents: request.fee_cents,
            capacity: request.capacity,
            coach_phone: request.coach_phone,
            recommendation_level: request.recommendation_level,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.program.into())))
}

/// DELETE /api/programs/:id - cancel a program the caller published
pub async fn cancel_program(
    State(state): State<ProgramAppState>,
    CurrentMember(coach): CurrentMember,
    Path(program_id): Path<ProgramId>,
) -> Result<Json<CancelProgramResponse>, ApiError> {
    let result = state
        .cancel_program_handler()
        .handle(CancelProgramCommand { coach, program_id })
        .await?;

    Ok(Json(CancelProgramResponse {
        enrollments_removed: result.enrollments_removed,
    }))
}

/// POST /api/programs/:id/enrollments - take one seat in a program
pub async fn enroll(
    State(state): State<ProgramAppState>,
    CurrentMember(member): CurrentMember,
    Path(program_id): Path<ProgramId>,
) -> Result<(StatusCode, Json<EnrollResponse>), ApiError> {
    let result = state
        .enroll_handler()
        .handle(EnrollInProgramCommand { member, program_id })
        .await?;

    let response = EnrollResponse {
        enrollment: result.enrollment.into(),
        program: result.program.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/programs/enrollments/:id - cancel one of the caller's
/// enrollments
pub async fn cancel_enrollment(
    State(state): State<ProgramAppState>,
    CurrentMember(member): CurrentMember,
    Path(enrollment_id): Path<EnrollmentId>,
) -> Result<Json<CancelEnrollmentResponse>, ApiError> {
    let result = state
        .cancel_enrollment_handler()
        .handle(CancelEnrollmentCommand {
            member,
            enrollment_id,
        })
        .await?;

    Ok(Json(CancelEnrollmentResponse {
        program: result.program.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProgramRepository, InMemorySlotRepository};
    use crate::domain::foundation::{AuthenticatedMember, MemberAccount, MemberRole};
    use crate::domain::venue::Venue;
    use chrono::NaiveDate;

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

    fn create_request() -> CreateProgramRequest {
        CreateProgramRequest {
            venue_name: "Downtown Court".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time_slot: "18:00-20:00".to_string(),
            fee_cents: 50_00,
            capacity: 8,
            coach_phone: "0912-345-678".to_string(),
            recommendation_level: "intermediate".to_string(),
        }
    }

    fn test_state() -> ProgramAppState {
        ProgramAppState {
            programs: Arc::new(InMemoryProgramRepository::new()),
            slots: Arc::new(
                InMemorySlotRepository::new()
                    .with_venue(Venue::new("Downtown Court", "1 Main St", 20_00, 20)),
            ),
        }
    }

    #[tokio::test]
    async fn coach_creates_program_with_denormalized_address() {
        let state = test_state();

        let (status, response) =
            create_program(State(state), CurrentMember(coach()), Json(create_request()))
                .await
                .unwrap_or_else(|_| panic!("create failed"));

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.0.address, "1 Main St");
        assert_eq!(response.0.coach_name, "Lin");
        assert_eq!(response.0.remaining_seats, 8);
    }

    #[tokio::test]
    async fn member_cannot_create_program() {
        let state = test_state();

        let result =
            create_program(State(state), CurrentMember(member()), Json(create_request())).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn enroll_then_cancel_restores_the_count() {
        let state = test_state();

        let (_, created) =
            create_program(State(state.clone()), CurrentMember(coach()), Json(create_request()))
                .await
                .unwrap_or_else(|_| panic!("create failed"));

        let (_, enrolled) = enroll(
            State(state.clone()),
            CurrentMember(member()),
            Path(created.0.id),
        )
        .await
        .unwrap_or_else(|_| panic!("enroll failed"));
        assert_eq!(enrolled.0.program.registered_count, 1);

        let cancelled = cancel_enrollment(
            State(state),
            CurrentMember(member()),
            Path(enrolled.0.enrollment.id),
        )
        .await
        .unwrap_or_else(|_| panic!("cancel failed"));
        assert_eq!(cancelled.0.program.registered_count, 0);
    }
}
