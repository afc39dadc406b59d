//! HTTP handlers for member and coach account endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    CoachResponse, LoginRequest, LoginResponse, MemberResponse, RegisterCoachRequest,
    RegisterMemberRequest,
};
use crate::adapters::http::error::ApiError;
use crate::application::handlers::member::{LoginHandler, RegisterCoachHandler, RegisterMemberHandler};
use crate::ports::MemberRepository;

/// Shared state for member endpoints.
#[derive(Clone)]
pub struct MemberAppState {
    pub members: Arc<dyn MemberRepository>,
    /// Shared secret gating coach registration, from `CoachConfig`.
    pub coach_registration_key: String,
}

impl MemberAppState {
    /// Create handlers on demand from the shared state.
    pub fn register_member_handler(&self) -> RegisterMemberHandler {
        RegisterMemberHandler::new(self.members.clone())
    }

    pub fn register_coach_handler(&self) -> RegisterCoachHandler {
        RegisterCoachHandler::new(self.members.clone(), self.coach_registration_key.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.members.clone())
    }
}

/// POST /api/members - register a new member
pub async fn register_member(
    State(state): State<MemberAppState>,
    Json(request): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let result = state
        .register_member_handler()
        .handle(request.into())
        .await?;

    Ok((StatusCode::CREATED, Json(result.member.into())))
}

/// POST /api/members/coaches - register a new coach (coach key gated)
pub async fn register_coach(
    State(state): State<MemberAppState>,
    Json(request): Json<RegisterCoachRequest>,
) -> Result<(StatusCode, Json<CoachResponse>), ApiError> {
    let result = state.register_coach_handler().handle(request.into()).await?;

    Ok((StatusCode::CREATED, Json(result.coach.into())))
}

/// POST /api/members/login - resolve account/password to an identity
pub async fn login(
    State(state): State<MemberAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state.login_handler().handle(request.into()).await?;

    Ok(Json(result.member.into()))
}
