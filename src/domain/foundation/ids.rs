//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a venue.
    VenueId
}

uuid_id! {
    /// Unique identifier for a bookable venue time slot.
    SlotId
}

uuid_id! {
    /// Unique identifier for a coach-led program occurrence.
    ProgramId
}

uuid_id! {
    /// Unique identifier for a member's slot registration.
    RegistrationId
}

uuid_id! {
    /// Unique identifier for a member's program enrollment.
    EnrollmentId
}

/// Member account name, the login identity.
///
/// Uniqueness is enforced by the member store; this type only guarantees
/// non-emptiness. Format rules live in `domain::member::validation`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberAccount(String);

impl MemberAccount {
    /// Creates a new account identifier, returning error if empty.
    pub fn new(account: impl Into<String>) -> Result<Self, ValidationError> {
        let account = account.into();
        if account.trim().is_empty() {
            return Err(ValidationError::empty_field("account"));
        }
        Ok(Self(account))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
