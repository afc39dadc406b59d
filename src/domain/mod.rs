//! Domain layer: pure types and ledger logic, no I/O.

pub mod foundation;
pub mod member;
pub mod program;
pub mod venue;
