//! In-memory venue/slot store.

use crate::domain::foundation::{DomainError, ErrorCode, MemberAccount, RegistrationId, SlotId};
use crate::domain::venue::{Registration, Venue, VenueSlot};
use crate::ports::SlotRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

/// Mutex-backed slot store for tests and demos.
///
/// Commits apply relative counter changes to the stored slot under the
/// store lock, mirroring the postgres adapter's row-lock semantics.
#[derive(Default)]
pub struct InMemorySlotRepository {
    venues: Mutex<Vec<Venue>>,
    slots: Mutex<Vec<VenueSlot>>,
    registrations: Mutex<Vec<Registration>>,
}

impl InMemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_venue(self, venue: Venue) -> Self {
        self.venues.lock().unwrap().push(venue);
        self
    }

    pub fn with_slot(self, slot: VenueSlot) -> Self {
        self.slots.lock().unwrap().push(slot);
        self
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }

    /// Snapshot of a stored slot's counters, for test assertions.
    pub fn slot_counters(&self, id: &SlotId) -> Option<(i32, i32)> {
        self.slots
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.id == id)
            .map(|s| (s.registered_count, s.remaining_slots))
    }
}

#[async_trait]
impl SlotRepository for InMemorySlotRepository {
    async fn list_venues(&self) -> Result<Vec<Venue>, DomainError> {
        Ok(self.venues.lock().unwrap().clone())
    }

    async fn find_venue_by_name(&self, name: &str) -> Result<Option<Venue>, DomainError> {
        let venues = self.venues.lock().unwrap();
        Ok(venues.iter().find(|v| v.name == name).cloned())
    }

    async fn find_slot(&self, id: &SlotId) -> Result<Option<VenueSlot>, DomainError> {
        let slots = self.slots.lock().unwrap();
        Ok(slots.iter().find(|s| &s.id == id).cloned())
    }

    async fn list_slots(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VenueSlot>, DomainError> {
        let mut matching: Vec<VenueSlot> = self
            .slots
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.date >= from && s.date <= to)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time_slot.cmp(&b.time_slot)));
        Ok(matching)
    }

    async fn find_registration(
        &self,
        id: &RegistrationId,
        account: &MemberAccount,
    ) -> Result<Option<Registration>, DomainError> {
        let registrations = self.registrations.lock().unwrap();
        Ok(registrations
            .iter()
            .find(|r| &r.id == id && &r.member_account == account)
            .cloned())
    }

    async fn list_registrations(
        &self,
        account: &MemberAccount,
    ) -> Result<Vec<Registration>, DomainError> {
        let mut matching: Vec<Registration> = self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.member_account == account)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(matching)
    }

    async fn commit_reservation(
        &self,
        slot: &VenueSlot,
        registration: &Registration,
    ) -> Result<(), DomainError> {
        let mut slots = self.slots.lock().unwrap();
        let stored = slots
            .iter_mut()
            .find(|s| s.id == slot.id)
            .ok_or_else(|| DomainError::new(ErrorCode::SlotNotFound, "Slot not found"))?;

        // Re-validate against the stored row; the caller's snapshot may be
        // stale if another reservation landed in between.
        if stored.remaining_slots <= 0 {
            return Err(DomainError::new(
                ErrorCode::SlotFull,
                "This slot is fully booked",
            ));
        }
        stored.registered_count += 1;
        stored.remaining_slots -= 1;
        stored.version += 1;

        self.registrations.lock().unwrap().push(registration.clone());
        Ok(())
    }

    async fn commit_cancellation(
        &self,
        slot: &VenueSlot,
        registration_id: &RegistrationId,
    ) -> Result<(), DomainError> {
        // Lock order is slots before registrations, same as
        // commit_reservation. The registration is only removed once the
        // counter update has succeeded, so an error leaves both intact.
        let mut slots = self.slots.lock().unwrap();
        let mut registrations = self.registrations.lock().unwrap();
        let position = registrations
            .iter()
            .position(|r| &r.id == registration_id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::RegistrationNotFound, "Registration not found")
            })?;

        let stored = slots
            .iter_mut()
            .find(|s| s.id == slot.id)
            .ok_or_else(|| DomainError::new(ErrorCode::SlotNotFound, "Slot not found"))?;
        if stored.registered_count <= 0 {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Slot counter underflow",
            ));
        }
        stored.registered_count -= 1;
        stored.remaining_slots += 1;
        stored.version += 1;
        registrations.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::VenueId;

    fn slot_on(date: NaiveDate, time_slot: &str) -> VenueSlot {
        VenueSlot::new(VenueId::new(), date, time_slot, 25_000, 10)
    }

    #[tokio::test]
    async fn list_slots_windows_and_orders() {
        let d1 = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 9, 11).unwrap();
        let outside = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();

        let repo = InMemorySlotRepository::new()
            .with_slot(slot_on(d2, "08:00-10:00"))
            .with_slot(slot_on(d1, "18:00-20:00"))
            .with_slot(slot_on(d1, "08:00-10:00"))
            .with_slot(slot_on(outside, "08:00-10:00"));

        let listed = repo.list_slots(d1, d2).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].date, d1);
        assert_eq!(listed[0].time_slot, "08:00-10:00");
        assert_eq!(listed[1].time_slot, "18:00-20:00");
        assert_eq!(listed[2].date, d2);
    }

    #[tokio::test]
    async fn commit_reservation_rechecks_stored_counters() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let mut slot = VenueSlot::new(VenueId::new(), date, "08:00-10:00", 25_000, 1);
        let repo = InMemorySlotRepository::new().with_slot(slot.clone());
        let account = MemberAccount::new("Alice@1234ab").unwrap();

        // Two callers read the same open slot.
        let mut stale = slot.clone();
        slot.reserve().unwrap();
        stale.reserve().unwrap();

        let first = Registration::for_slot(account.clone(), &slot);
        repo.commit_reservation(&slot, &first).await.unwrap();

        // The second writer loses at commit time.
        let second = Registration::for_slot(account, &stale);
        let err = repo.commit_reservation(&stale, &second).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SlotFull);
        assert_eq!(repo.registration_count(), 1);
        assert_eq!(repo.slot_counters(&slot.id), Some((1, 0)));
    }

    #[tokio::test]
    async fn failed_cancellation_keeps_the_registration() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let mut slot = slot_on(date, "08:00-10:00");
        let repo = InMemorySlotRepository::new().with_slot(slot.clone());
        let account = MemberAccount::new("Alice@1234ab").unwrap();

        slot.reserve().unwrap();
        let registration = Registration::for_slot(account, &slot);
        repo.commit_reservation(&slot, &registration).await.unwrap();

        // Cancelling against an unknown slot must not touch the rows.
        let unknown = slot_on(date, "10:00-12:00");
        let err = repo
            .commit_cancellation(&unknown, &registration.id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SlotNotFound);
        assert_eq!(repo.registration_count(), 1);
        assert_eq!(repo.slot_counters(&slot.id), Some((1, 9)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_reservations_and_cancellations_make_progress() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let slot = VenueSlot::new(VenueId::new(), date, "08:00-10:00", 25_000, 1_000);
        let repo = std::sync::Arc::new(InMemorySlotRepository::new().with_slot(slot.clone()));
        let account = MemberAccount::new("Alice@1234ab").unwrap();

        let mut booked = Vec::new();
        for _ in 0..500 {
            let registration = Registration::for_slot(account.clone(), &slot);
            repo.commit_reservation(&slot, &registration).await.unwrap();
            booked.push(registration.id);
        }

        let reserver = {
            let repo = repo.clone();
            let slot = slot.clone();
            let account = account.clone();
            tokio::spawn(async move {
                for _ in 0..500 {
                    let registration = Registration::for_slot(account.clone(), &slot);
                    repo.commit_reservation(&slot, &registration).await.unwrap();
                }
            })
        };
        let canceller = {
            let repo = repo.clone();
            let slot = slot.clone();
            tokio::spawn(async move {
                for id in booked {
                    repo.commit_cancellation(&slot, &id).await.unwrap();
                }
            })
        };

        reserver.await.unwrap();
        canceller.await.unwrap();
        assert_eq!(repo.registration_count(), 500);
        assert_eq!(repo.slot_counters(&slot.id), Some((500, 500)));
    }

    #[tokio::test]
    async fn cancellation_of_missing_registration_leaves_counters() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let slot = slot_on(date, "08:00-10:00");
        let repo = InMemorySlotRepository::new().with_slot(slot.clone());

        let err = repo
            .commit_cancellation(&slot, &RegistrationId::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RegistrationNotFound);
        assert_eq!(repo.slot_counters(&slot.id), Some((0, 10)));
    }
}
