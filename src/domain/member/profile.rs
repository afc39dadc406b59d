//! Member and coach profile entities.
//!
//! Identity (`account`) is immutable after registration and profiles are
//! never deleted. Coaches are stored separately from ordinary members; the
//! two records share the demographic fields, coaches add a phone number.

use crate::domain::foundation::{MemberAccount, Timestamp};
use serde::{Deserialize, Serialize};

/// A registered member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Login identity, unique across members and coaches.
    pub account: MemberAccount,

    /// Display name.
    pub name: String,

    /// Stored password hash (`base64(salt).base64(key)`).
    pub password_hash: String,

    /// One of the fixed 3-value set.
    pub sex: String,

    /// Age in years, 18 to 70.
    pub age: i32,

    /// Years of badminton experience.
    pub years_playing: i32,

    /// Contact email.
    pub email: String,

    /// When the profile was created.
    pub created_at: Timestamp,
}

impl Member {
    /// Creates a member profile at registration time.
    ///
    /// Field validation happens in the registration handler before this is
    /// called; the password must already be hashed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account: MemberAccount,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        sex: impl Into<String>,
        age: i32,
        years_playing: i32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account,
            name: name.into(),
            password_hash: password_hash.into(),
            sex: sex.into(),
            age,
            years_playing,
            email: email.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// A registered coach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    pub account: MemberAccount,
    pub name: String,
    pub password_hash: String,
    pub sex: String,
    pub age: i32,
    pub years_playing: i32,
    pub email: String,

    /// Contact phone, shown on the programs this coach publishes.
    pub phone: String,

    pub created_at: Timestamp,
}

impl Coach {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account: MemberAccount,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        sex: impl Into<String>,
        age: i32,
        years_playing: i32,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            account,
            name: name.into(),
            password_hash: password_hash.into(),
            sex: sex.into(),
            age,
            years_playing,
            email: email.into(),
            phone: phone.into(),
            created_at: Timestamp::now(),
        }
    }
}
