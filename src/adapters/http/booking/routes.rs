//! Axum router for venue, slot, and reservation endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    cancel_reservation, list_registrations, list_slots, list_venues, reserve_slot,
    BookingAppState,
};

/// Create the booking API router.
///
/// # Routes
/// - `GET /venues` - Venue reference data
/// - `GET /slots` - Upcoming slots inside a date window
/// - `POST /reservations` - Reserve one seat (requires identity)
/// - `GET /reservations` - The caller's reservations
/// - `DELETE /reservations/:id` - Cancel one of the caller's reservations
pub fn booking_routes() -> Router<BookingAppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/slots", get(list_slots))
        .route("/reservations", post(reserve_slot).get(list_registrations))
        .route("/reservations/:id", delete(cancel_reservation))
}
