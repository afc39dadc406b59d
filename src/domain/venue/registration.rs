//! Slot registration record: the join between a member and a venue slot.

use crate::domain::foundation::{MemberAccount, RegistrationId, SlotId, Timestamp, VenueId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::VenueSlot;

/// A booked seat in a venue slot. Created on reserve, deleted on cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub member_account: MemberAccount,
    pub slot_id: SlotId,

    // Denormalized slot coordinates, kept for listings.
    pub venue_id: VenueId,
    pub date: NaiveDate,
    pub time_slot: String,

    pub registered_at: Timestamp,

    /// Payment settled. Always false at creation.
    pub paid: bool,

    /// When payment settled, if it has.
    pub payment_date: Option<Timestamp>,
}

impl Registration {
    /// Creates an unpaid registration for a seat in the given slot.
    pub fn for_slot(member_account: MemberAccount, slot: &VenueSlot) -> Self {
        Self {
            id: RegistrationId::new(),
            member_account,
            slot_id: slot.id,
            venue_id: slot.venue_id,
            date: slot.date,
            time_slot: slot.time_slot.clone(),
            registered_at: Timestamp::now(),
            paid: false,
            payment_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::VenueId;

    #[test]
    fn for_slot_copies_slot_coordinates_and_starts_unpaid() {
        let slot = VenueSlot::new(
            VenueId::new(),
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            "08:00-10:00",
            20_000,
            6,
        );
        let account = MemberAccount::new("Alice@1234ab").unwrap();
        let registration = Registration::for_slot(account.clone(), &slot);

        assert_eq!(registration.member_account, account);
        assert_eq!(registration.slot_id, slot.id);
        assert_eq!(registration.venue_id, slot.venue_id);
        assert_eq!(registration.time_slot, "08:00-10:00");
        assert!(!registration.paid);
        assert!(registration.payment_date.is_none());
    }
}
