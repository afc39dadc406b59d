//! Foundation types shared across the domain: errors, identifiers,
//! timestamps, and the resolved caller identity.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthenticatedMember, MemberRole};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EnrollmentId, MemberAccount, ProgramId, RegistrationId, SlotId, VenueId};
pub use timestamp::{today, Timestamp};
