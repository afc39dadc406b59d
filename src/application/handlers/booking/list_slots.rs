//! ListSlotsHandler - query handler for the upcoming slot listing.

use std::sync::Arc;

use crate::domain::foundation::{today, DomainError};
use crate::domain::venue::VenueSlot;
use crate::ports::SlotRepository;

/// Default listing window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Query for upcoming slots inside a date window starting today.
#[derive(Debug, Clone)]
pub struct ListSlotsQuery {
    pub window_days: i64,
}

impl Default for ListSlotsQuery {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Result of the slot listing query.
#[derive(Debug, Clone)]
pub struct ListSlotsResult {
    pub slots: Vec<VenueSlot>,
}

/// Handler for the slot listing, ordered by date then time slot.
pub struct ListSlotsHandler {
    slots: Arc<dyn SlotRepository>,
}

impl ListSlotsHandler {
    pub fn new(slots: Arc<dyn SlotRepository>) -> Self {
        Self { slots }
    }

    pub async fn handle(&self, query: ListSlotsQuery) -> Result<ListSlotsResult, DomainError> {
        let from = today();
        let to = from + chrono::Duration::days(query.window_days.max(0));
        let slots = self.slots.list_slots(from, to).await?;
        Ok(ListSlotsResult { slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySlotRepository;
    use crate::domain::foundation::VenueId;
    use chrono::Duration;

    fn slot_on(date: chrono::NaiveDate) -> VenueSlot {
        VenueSlot::new(VenueId::new(), date, "18:00-20:00", 25_000, 10)
    }

    #[tokio::test]
    async fn listing_is_windowed_from_today() {
        let inside = today() + Duration::days(3);
        let outside = today() + Duration::days(60);
        let past = today() - Duration::days(1);

        let repo = Arc::new(
            InMemorySlotRepository::new()
                .with_slot(slot_on(inside))
                .with_slot(slot_on(outside))
                .with_slot(slot_on(past)),
        );
        let handler = ListSlotsHandler::new(repo);

        let result = handler.handle(ListSlotsQuery::default()).await.unwrap();
        assert_eq!(result.slots.len(), 1);
        assert_eq!(result.slots[0].date, inside);
    }

    #[tokio::test]
    async fn negative_window_collapses_to_today() {
        let repo = Arc::new(
            InMemorySlotRepository::new()
                .with_slot(slot_on(today()))
                .with_slot(slot_on(today() + Duration::days(1))),
        );
        let handler = ListSlotsHandler::new(repo);

        let result = handler
            .handle(ListSlotsQuery { window_days: -5 })
            .await
            .unwrap();
        assert_eq!(result.slots.len(), 1);
    }
}
