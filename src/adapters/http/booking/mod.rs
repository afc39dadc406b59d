//! Booking HTTP adapter: venues, slots, and slot reservations.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::BookingAppState;
pub use routes::booking_routes;
