//! Venue slot store port: the persistence gateway side of the ledger.
//!
//! The commit operations are the ledger's transactional primitives: counter
//! update and registration row change land together or not at all.
//! Implementations serialize counter writes on the slot row (a row lock or
//! equivalent) and re-validate capacity under that lock, so two concurrent
//! reservations of the last seat cannot both succeed; the loser sees
//! `SlotFull`, never a partial write.

use crate::domain::foundation::{DomainError, MemberAccount, RegistrationId, SlotId};
use crate::domain::venue::{Registration, Venue, VenueSlot};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository port for venues, slots, and slot registrations.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// List all venues (reference data for forms and program creation).
    async fn list_venues(&self) -> Result<Vec<Venue>, DomainError>;

    /// Find a venue by its unique name. Returns `None` if not found.
    async fn find_venue_by_name(&self, name: &str) -> Result<Option<Venue>, DomainError>;

    /// Find a slot by id. Returns `None` if not found.
    async fn find_slot(&self, id: &SlotId) -> Result<Option<VenueSlot>, DomainError>;

    /// List slots within a date window, ordered by date then time slot.
    async fn list_slots(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VenueSlot>, DomainError>;

    /// Find a registration by id, scoped to the owning member.
    ///
    /// Returns `None` when no registration matches the (id, account) pair;
    /// another member's registration is indistinguishable from a missing
    /// one.
    async fn find_registration(
        &self,
        id: &RegistrationId,
        account: &MemberAccount,
    ) -> Result<Option<Registration>, DomainError>;

    /// List a member's registrations, newest first.
    async fn list_registrations(
        &self,
        account: &MemberAccount,
    ) -> Result<Vec<Registration>, DomainError>;

    /// Persist a reservation: take one seat and insert the registration
    /// row in one transaction, re-validating capacity under the slot lock.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if the slot vanished since the caller's read
    /// - `SlotFull` if a concurrent writer took the last seat first
    /// - `DatabaseError` on persistence failure
    async fn commit_reservation(
        &self,
        slot: &VenueSlot,
        registration: &Registration,
    ) -> Result<(), DomainError>;

    /// Persist a cancellation: delete the registration row and return its
    /// seat in one transaction. The row delete is the serialization point;
    /// only one cancel of a given registration can succeed.
    ///
    /// # Errors
    ///
    /// - `RegistrationNotFound` if the row was already removed
    /// - `DatabaseError` on persistence failure
    async fn commit_cancellation(
        &self,
        slot: &VenueSlot,
        registration_id: &RegistrationId,
    ) -> Result<(), DomainError>;
}
