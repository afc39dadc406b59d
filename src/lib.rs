//! courtbook - badminton venue and coach program reservation backend.
//!
//! Members register, log in, browse venue time slots and coach-led
//! programs, and reserve or cancel seats. Coaches register through a
//! shared-key gate, publish program occurrences, and cancel them. The
//! core is the reservation/capacity ledger: every counter change pairs
//! with its registration or enrollment row change in one transaction.
//!
//! # Architecture
//!
//! Hexagonal layout:
//! - [`domain`] - pure types and logic, no IO
//! - [`ports`] - repository traits the application depends on
//! - [`application`] - one command/query handler per operation
//! - [`adapters`] - postgres, in-memory, and HTTP implementations
//! - [`config`] - typed environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
