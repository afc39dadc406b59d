//! ListVenuesHandler - reference data for booking forms and program creation.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::venue::Venue;
use crate::ports::SlotRepository;

/// Result of the venue listing query.
#[derive(Debug, Clone)]
pub struct ListVenuesResult {
    pub venues: Vec<Venue>,
}

/// Handler feeding venue pickers.
pub struct ListVenuesHandler {
    slots: Arc<dyn SlotRepository>,
}

impl ListVenuesHandler {
    pub fn new(slots: Arc<dyn SlotRepository>) -> Self {
        Self { slots }
    }

    pub async fn handle(&self) -> Result<ListVenuesResult, DomainError> {
        let venues = self.slots.list_venues().await?;
        Ok(ListVenuesResult { venues })
    }
}
