//! CancelReservationHandler - command handler for cancelling a reservation.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AuthenticatedMember, DomainError, ErrorCode, RegistrationId};
use crate::domain::venue::VenueSlot;
use crate::ports::SlotRepository;

/// Command to cancel one of the caller's reservations.
#[derive(Debug, Clone)]
pub struct CancelReservationCommand {
    pub member: AuthenticatedMember,
    pub registration_id: RegistrationId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelReservationResult {
    pub slot: VenueSlot,
}

/// Handler for reservation cancellation.
///
/// The registration lookup is scoped to the caller's account, so a
/// member can only ever cancel their own rows; anything else reads as
/// `RegistrationNotFound`.
pub struct CancelReservationHandler {
    slots: Arc<dyn SlotRepository>,
}

impl CancelReservationHandler {
    pub fn new(slots: Arc<dyn SlotRepository>) -> Self {
        Self { slots }
    }

    pub async fn handle(
        &self,
        cmd: CancelReservationCommand,
    ) -> Result<CancelReservationResult, DomainError> {
        // 1. The registration must exist and belong to the caller
        let registration = self
            .slots
            .find_registration(&cmd.registration_id, &cmd.member.account)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::RegistrationNotFound, "Registration not found")
            })?;

        // 2. Load the slot and return the seat
        let mut slot = self
            .slots
            .find_slot(&registration.slot_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::SlotNotFound, "Slot not found"))?;
        slot.release()?;

        // 3. Commit the row delete and counter update together
        self.slots
            .commit_cancellation(&slot, &registration.id)
            .await?;

        info!(
            account = %cmd.member.account,
            slot_id = %slot.id,
            remaining = slot.remaining_slots,
            "reservation cancelled"
        );
        Ok(CancelReservationResult { slot })
    }
}
