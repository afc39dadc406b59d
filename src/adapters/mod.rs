//! Adapters - implementations of the ports for concrete infrastructure.
//!
//! - `postgres`: sqlx-backed repositories (production)
//! - `memory`: mutex-backed repositories (tests, demos)
//! - `http`: axum JSON API over the application handlers

pub mod http;
pub mod memory;
pub mod postgres;
