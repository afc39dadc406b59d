//! HTTP DTOs for venue, slot, and reservation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RegistrationId, SlotId, Timestamp, VenueId};
use crate::domain::venue::{Registration, Venue, VenueSlot};
use chrono::NaiveDate;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the slot listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSlotsParams {
    /// Days ahead to include, from today. Defaults to the ledger's
    /// standard window.
    #[serde(default)]
    pub window_days: Option<i64>,
}

/// Request to reserve one seat in a slot.
#[derive(Debug, Clone, Deserialize)]
pub struct ReserveSlotRequest {
    pub slot_id: SlotId,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Venue reference data.
#[derive(Debug, Clone, Serialize)]
pub struct VenueResponse {
    pub id: VenueId,
    pub name: String,
    pub address: String,
    pub fee_cents: i64,
    pub capacity: i32,
}

impl From<Venue> for VenueResponse {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            address: venue.address,
            fee_cents: venue.fee_cents,
            capacity: venue.capacity,
        }
    }
}

/// A bookable venue time slot with its live counters.
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    pub id: SlotId,
    pub venue_id: VenueId,
    pub date: NaiveDate,
    pub time_slot: String,
    pub fee_cents: i64,
    pub capacity: i32,
    pub registered_count: i32,
    pub remaining_slots: i32,
}

impl From<VenueSlot> for SlotResponse {
    fn from(slot: VenueSlot) -> Self {
        Self {
            id: slot.id,
            venue_id: slot.venue_id,
            date: slot.date,
            time_slot: slot.time_slot,
            fee_cents: slot.fee_cents,
            capacity: slot.capacity,
            registered_count: slot.registered_count,
            remaining_slots: slot.remaining_slots,
        }
    }
}

/// A member's slot registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub id: RegistrationId,
    pub slot_id: SlotId,
    pub venue_id: VenueId,
    pub date: NaiveDate,
    pub time_slot: String,
    pub registered_at: Timestamp,
    pub paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<Timestamp>,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id,
            slot_id: registration.slot_id,
            venue_id: registration.venue_id,
            date: registration.date,
            time_slot: registration.time_slot,
            registered_at: registration.registered_at,
            paid: registration.paid,
            payment_date: registration.payment_date,
        }
    }
}

/// Response to a successful reservation: the new registration plus the
/// slot's updated counters.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveSlotResponse {
    pub registration: RegistrationResponse,
    pub slot: SlotResponse,
}

/// Response to a successful cancellation: the slot's restored counters.
#[derive(Debug, Clone, Serialize)]
pub struct CancelReservationResponse {
    pub slot: SlotResponse,
}
