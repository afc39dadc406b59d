//! Axum router for coach program and enrollment endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    cancel_enrollment, cancel_program, create_program, enroll, list_coach_programs,
    list_programs, ProgramAppState,
};

/// Create the program API router.
///
/// # Routes
/// - `GET /` - Upcoming programs plus the caller's enrollments
/// - `POST /` - Publish a new program occurrence (coach only)
/// - `GET /mine` - The calling coach's own programs
/// - `DELETE /:id` - Cancel a program the caller published
/// - `POST /:id/enrollments` - Take one seat in a program
/// - `DELETE /enrollments/:id` - Cancel one of the caller's enrollments
pub fn program_routes() -> Router<ProgramAppState> {
    Router::new()
        .route("/", get(list_programs).post(create_program))
        .route("/mine", get(list_coach_programs))
        .route("/:id", delete(cancel_program))
        .route("/:id/enrollments", post(enroll))
        .route("/enrollments/:id", delete(cancel_enrollment))
}
