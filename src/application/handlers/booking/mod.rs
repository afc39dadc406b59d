//! Booking handlers: the venue-slot side of the capacity ledger.
//!
//! ## Commands
//! - Reserving a seat in a slot
//! - Cancelling a reservation
//!
//! ## Queries
//! - Upcoming slots inside a date window
//! - The caller's own reservations
//! - Venue reference data

mod cancel_reservation;
mod list_registrations;
mod list_slots;
mod list_venues;
mod reserve_slot;

pub use cancel_reservation::{
    CancelReservationCommand, CancelReservationHandler, CancelReservationResult,
};
pub use reserve_slot::{ReserveSlotCommand, ReserveSlotHandler, ReserveSlotResult};

pub use list_registrations::{
    ListRegistrationsHandler, ListRegistrationsQuery, ListRegistrationsResult,
};
pub use list_slots::{ListSlotsHandler, ListSlotsQuery, ListSlotsResult, DEFAULT_WINDOW_DAYS};
pub use list_venues::{ListVenuesHandler, ListVenuesResult};
