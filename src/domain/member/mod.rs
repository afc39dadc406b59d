//! Member domain: profiles, registration input validation, and the
//! credential store.

pub mod credentials;
mod profile;
pub mod validation;

pub use profile::{Coach, Member};
