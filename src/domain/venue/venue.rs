//! Venue reference data.

use crate::domain::foundation::VenueId;
use serde::{Deserialize, Serialize};

/// A physical venue. Static reference data; never mutated by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,

    /// Venue name, unique; programs reference venues by name.
    pub name: String,

    /// Street address, denormalized onto programs at creation time.
    pub address: String,

    /// Base fee per slot in cents.
    pub fee_cents: i64,

    /// Court capacity.
    pub capacity: i32,
}

impl Venue {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        fee_cents: i64,
        capacity: i32,
    ) -> Self {
        Self {
            id: VenueId::new(),
            name: name.into(),
            address: address.into(),
            fee_cents,
            capacity,
        }
    }
}
