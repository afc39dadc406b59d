//! Member handlers.
//!
//! ## Commands
//! - Registering members
//! - Registering coaches (gated by the shared coach key)
//! - Logging in (resolves an `AuthenticatedMember`)

mod login;
mod register_coach;
mod register_member;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use register_coach::{RegisterCoachCommand, RegisterCoachHandler, RegisterCoachResult};
pub use register_member::{RegisterMemberCommand, RegisterMemberHandler, RegisterMemberResult};
