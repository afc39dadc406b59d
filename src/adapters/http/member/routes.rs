//! Axum router for member and coach account endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{login, register_coach, register_member, MemberAppState};

/// Create the member API router.
///
/// # Routes
/// - `POST /` - Register a new member
/// - `POST /coaches` - Register a new coach (coach key gated)
/// - `POST /login` - Resolve account/password to an identity
pub fn member_routes() -> Router<MemberAppState> {
    Router::new()
        .route("/", post(register_member))
        .route("/coaches", post(register_coach))
        .route("/login", post(login))
}
