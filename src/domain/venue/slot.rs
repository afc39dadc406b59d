//! Venue slot aggregate: the per-slot capacity state machine.

use crate::domain::foundation::{DomainError, ErrorCode, SlotId, VenueId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Capacity state of a slot or program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// Remaining capacity available.
    Open,
    /// No remaining capacity; reservations are rejected.
    Full,
}

/// A bookable venue time window with fixed capacity.
///
/// # Invariants
///
/// - `registered_count + remaining_slots == capacity` after every
///   successful `reserve`/`release`
/// - Both counters stay within `[0, capacity]`
/// - Counters are mutated only through `reserve`/`release`; `version`
///   guards the persisted read-modify-write against concurrent writers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSlot {
    pub id: SlotId,
    pub venue_id: VenueId,

    /// Calendar date of the slot.
    pub date: NaiveDate,

    /// Time window label, e.g. "18:00-20:00".
    pub time_slot: String,

    /// Fee for this slot in cents.
    pub fee_cents: i64,

    /// Total seats.
    pub capacity: i32,

    /// Seats currently registered.
    pub registered_count: i32,

    /// Seats still available. Single authoritative stored counter; never
    /// recomputed from registration rows at read time.
    pub remaining_slots: i32,

    /// Optimistic concurrency token, bumped by the persistence gateway on
    /// every counter write.
    pub version: i32,
}

impl VenueSlot {
    /// Creates a new slot with all seats available.
    pub fn new(
        venue_id: VenueId,
        date: NaiveDate,
        time_slot: impl Into<String>,
        fee_cents: i64,
        capacity: i32,
    ) -> Self {
        Self {
            id: SlotId::new(),
            venue_id,
            date,
            time_slot: time_slot.into(),
            fee_cents,
            capacity,
            registered_count: 0,
            remaining_slots: capacity,
            version: 0,
        }
    }

    /// Current capacity state.
    pub fn status(&self) -> SlotStatus {
        if self.remaining_slots > 0 {
            SlotStatus::Open
        } else {
            SlotStatus::Full
        }
    }

    /// Takes one seat: Open -> {Open, Full}.
    ///
    /// # Errors
    ///
    /// `SlotFull` if no seats remain; counters are untouched on failure.
    pub fn reserve(&mut self) -> Result<(), DomainError> {
        if self.remaining_slots <= 0 {
            return Err(DomainError::new(
                ErrorCode::SlotFull,
                "This slot is fully booked",
            )
            .with_detail("slot_id", self.id.to_string()));
        }
        self.registered_count += 1;
        self.remaining_slots -= 1;
        debug_assert!(self.counters_consistent());
        Ok(())
    }

    /// Returns one seat: {Open, Full} -> Open.
    ///
    /// # Errors
    ///
    /// `InternalError` if no seat is registered; the caller verified a
    /// matching registration row exists, so an underflow means the stored
    /// counters are corrupt.
    pub fn release(&mut self) -> Result<(), DomainError> {
        if self.registered_count <= 0 {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Slot counter underflow",
            )
            .with_detail("slot_id", self.id.to_string()));
        }
        self.registered_count -= 1;
        self.remaining_slots += 1;
        debug_assert!(self.counters_consistent());
        Ok(())
    }

    /// Checks the capacity bookkeeping invariant.
    pub fn counters_consistent(&self) -> bool {
        self.registered_count >= 0
            && self.remaining_slots >= 0
            && self.registered_count + self.remaining_slots == self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(capacity: i32, registered: i32) -> VenueSlot {
        let mut slot = VenueSlot::new(
            VenueId::new(),
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            "18:00-20:00",
            25_000,
            capacity,
        );
        for _ in 0..registered {
            slot.reserve().unwrap();
        }
        slot
    }

    #[test]
    fn new_slot_is_open_with_full_remaining() {
        let slot = slot(10, 0);
        assert_eq!(slot.status(), SlotStatus::Open);
        assert_eq!(slot.remaining_slots, 10);
        assert!(slot.counters_consistent());
    }

    #[test]
    fn reserve_moves_counters_together() {
        let mut slot = slot(10, 3);
        slot.reserve().unwrap();
        assert_eq!(slot.registered_count, 4);
        assert_eq!(slot.remaining_slots, 6);
        assert!(slot.counters_consistent());
    }

    #[test]
    fn reserve_last_seat_transitions_to_full() {
        let mut slot = slot(2, 1);
        slot.reserve().unwrap();
        assert_eq!(slot.status(), SlotStatus::Full);
        assert_eq!(slot.remaining_slots, 0);
    }

    #[test]
    fn reserve_on_full_slot_fails_and_leaves_counters() {
        let mut slot = slot(2, 2);
        let err = slot.reserve().unwrap_err();
        assert_eq!(err.code, ErrorCode::SlotFull);
        assert_eq!(slot.registered_count, 2);
        assert_eq!(slot.remaining_slots, 0);
    }

    #[test]
    fn release_restores_a_seat() {
        let mut slot = slot(2, 2);
        assert_eq!(slot.status(), SlotStatus::Full);
        slot.release().unwrap();
        assert_eq!(slot.status(), SlotStatus::Open);
        assert_eq!(slot.remaining_slots, 1);
        assert!(slot.counters_consistent());
    }

    #[test]
    fn release_on_empty_slot_is_counter_corruption() {
        let mut slot = slot(5, 0);
        let err = slot.release().unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn reserve_then_release_roundtrips_counters() {
        let mut slot = slot(10, 3);
        let before = (slot.registered_count, slot.remaining_slots);
        slot.reserve().unwrap();
        slot.release().unwrap();
        assert_eq!((slot.registered_count, slot.remaining_slots), before);
    }

    #[test]
    fn invariant_holds_across_a_full_cycle() {
        let mut slot = slot(4, 0);
        for _ in 0..4 {
            slot.reserve().unwrap();
            assert!(slot.counters_consistent());
        }
        assert_eq!(slot.status(), SlotStatus::Full);
        for _ in 0..4 {
            slot.release().unwrap();
            assert!(slot.counters_consistent());
        }
        assert_eq!(slot.registered_count, 0);
    }
}
