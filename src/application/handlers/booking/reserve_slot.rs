//! ReserveSlotHandler - command handler for reserving a seat in a slot.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{AuthenticatedMember, DomainError, ErrorCode, SlotId};
use crate::domain::venue::{Registration, VenueSlot};
use crate::ports::SlotRepository;

/// Command to reserve one seat in a venue slot.
#[derive(Debug, Clone)]
pub struct ReserveSlotCommand {
    pub member: AuthenticatedMember,
    pub slot_id: SlotId,
}

/// Result of a successful reservation.
#[derive(Debug, Clone)]
pub struct ReserveSlotResult {
    pub registration: Registration,
    pub slot: VenueSlot,
}

/// Handler for slot reservation.
///
/// Validates against a snapshot, then hands the pair of writes to the
/// store, which re-validates capacity under the slot lock. A concurrent
/// reservation of the last seat loses there with `SlotFull`.
pub struct ReserveSlotHandler {
    slots: Arc<dyn SlotRepository>,
}

impl ReserveSlotHandler {
    pub fn new(slots: Arc<dyn SlotRepository>) -> Self {
        Self { slots }
    }

    pub async fn handle(&self, cmd: ReserveSlotCommand) -> Result<ReserveSlotResult, DomainError> {
        // 1. Load the slot
        let mut slot = self
            .slots
            .find_slot(&cmd.slot_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::SlotNotFound, "Slot not found"))?;

        // 2. Take a seat on the snapshot; fails fast when already full
        slot.reserve()?;
        debug_assert!(slot.counters_consistent());

        // 3. Commit the counter update and registration row together
        let registration = Registration::for_slot(cmd.member.account.clone(), &slot);
        self.slots.commit_reservation(&slot, &registration).await?;

        info!(
            account = %cmd.member.account,
            slot_id = %slot.id,
            remaining = slot.remaining_slots,
            "slot reserved"
        );
        debug!(registration_id = %registration.id, "registration created");
        Ok(ReserveSlotResult { registration, slot })
    }
}
