//! ListRegistrationsHandler - query handler for a member's reservations.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedMember, DomainError};
use crate::domain::venue::Registration;
use crate::ports::SlotRepository;

/// Query for the caller's own reservations, newest first.
#[derive(Debug, Clone)]
pub struct ListRegistrationsQuery {
    pub member: AuthenticatedMember,
}

/// Result of the reservation listing query.
#[derive(Debug, Clone)]
pub struct ListRegistrationsResult {
    pub registrations: Vec<Registration>,
}

/// Handler feeding the member's "my reservations" screen.
pub struct ListRegistrationsHandler {
    slots: Arc<dyn SlotRepository>,
}

impl ListRegistrationsHandler {
    pub fn new(slots: Arc<dyn SlotRepository>) -> Self {
        Self { slots }
    }

    pub async fn handle(
        &self,
        query: ListRegistrationsQuery,
    ) -> Result<ListRegistrationsResult, DomainError> {
        let registrations = self.slots.list_registrations(&query.member.account).await?;
        Ok(ListRegistrationsResult { registrations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySlotRepository;
    use crate::application::handlers::booking::{ReserveSlotCommand, ReserveSlotHandler};
    use crate::domain::foundation::{MemberAccount, MemberRole, VenueId};
    use crate::domain::venue::VenueSlot;
    use chrono::NaiveDate;

    fn member(account: &str) -> AuthenticatedMember {
        AuthenticatedMember::new(
            MemberAccount::new(account).unwrap(),
            "Alice",
            MemberRole::Member,
        )
    }

    #[tokio::test]
    async fn lists_only_the_callers_registrations() {
        let slot = VenueSlot::new(
            VenueId::new(),
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            "18:00-20:00",
            25_000,
            10,
        );
        let slot_id = slot.id;
        let repo = Arc::new(InMemorySlotRepository::new().with_slot(slot));
        let reserve = ReserveSlotHandler::new(repo.clone());

        reserve
            .handle(ReserveSlotCommand {
                member: member("Alice@1234ab"),
                slot_id,
            })
            .await
            .unwrap();
        reserve
            .handle(ReserveSlotCommand {
                member: member("Bobby@1234ab"),
                slot_id,
            })
            .await
            .unwrap();

        let result = ListRegistrationsHandler::new(repo)
            .handle(ListRegistrationsQuery {
                member: member("Alice@1234ab"),
            })
            .await
            .unwrap();

        assert_eq!(result.registrations.len(), 1);
        assert_eq!(
            result.registrations[0].member_account.as_str(),
            "Alice@1234ab"
        );
    }
}
