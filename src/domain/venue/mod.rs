//! Venue domain: venues, bookable time slots, and slot registrations.

mod registration;
mod slot;
mod venue;

pub use registration::Registration;
pub use slot::{SlotStatus, VenueSlot};
pub use venue::Venue;
