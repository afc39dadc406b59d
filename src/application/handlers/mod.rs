//! Command and query handlers, one per exposed operation.
//!
//! Handlers depend on the ports as `Arc<dyn Trait>`, run the domain
//! logic against a snapshot, and hand paired writes to the store's
//! transactional commit operations.

pub mod booking;
pub mod member;
pub mod program;
