//! HTTP adapters - JSON API over the application handlers.
//!
//! Each domain module has its own router, DTOs, and state; the caller's
//! identity is resolved by the `CurrentMember` extractor and domain
//! errors are mapped to statuses in `error`.

pub mod auth;
pub mod booking;
pub mod error;
pub mod member;
pub mod program;

pub use auth::CurrentMember;
pub use booking::{booking_routes, BookingAppState};
pub use error::{ApiError, ErrorResponse};
pub use member::{member_routes, MemberAppState};
pub use program::{program_routes, ProgramAppState};

use axum::Router;

/// Assemble the complete API router from the per-module states.
///
/// Mounted paths:
/// - `/api/members` - registration, coach registration, login
/// - `/api/bookings` - venues, slots, reservations
/// - `/api/programs` - coach programs, enrollments
pub fn api_router(
    member: MemberAppState,
    booking: BookingAppState,
    program: ProgramAppState,
) -> Router {
    Router::new()
        .nest("/api/members", member_routes().with_state(member))
        .nest("/api/bookings", booking_routes().with_state(booking))
        .nest("/api/programs", program_routes().with_state(program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryMemberRepository, InMemoryProgramRepository, InMemorySlotRepository,
    };
    use std::sync::Arc;

    #[test]
    fn api_router_assembles_all_modules() {
        let slots = Arc::new(InMemorySlotRepository::new());
        let _ = api_router(
            MemberAppState {
                members: Arc::new(InMemoryMemberRepository::new()),
                coach_registration_key: "BadmintonCoach2024".to_string(),
            },
            BookingAppState {
                slots: slots.clone(),
            },
            ProgramAppState {
                programs: Arc::new(InMemoryProgramRepository::new()),
                slots,
            },
        );
    }
}
