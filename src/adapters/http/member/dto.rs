//! HTTP DTOs for member and coach account endpoints.
//!
//! The request types map one to one onto the registration and login
//! commands; the response types expose profiles without the password
//! hash.

use serde::{Deserialize, Serialize};

use crate::application::handlers::member::{
    LoginCommand, RegisterCoachCommand, RegisterMemberCommand,
};
use crate::domain::foundation::{AuthenticatedMember, Timestamp};
use crate::domain::member::{Coach, Member};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to register a new member.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterMemberRequest {
    pub account: String,
    pub name: String,
    pub password: String,
    pub sex: String,
    pub age: i32,
    pub years_playing: i32,
    pub email: String,
}

impl From<RegisterMemberRequest> for RegisterMemberCommand {
    fn from(req: RegisterMemberRequest) -> Self {
        Self {
            account: req.account,
            name: req.name,
            password: req.password,
            sex: req.sex,
            age: req.age,
            years_playing: req.years_playing,
            email: req.email,
        }
    }
}

/// Request to register a new coach, gated by the shared coach key.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCoachRequest {
    pub account: String,
    pub name: String,
    pub password: String,
    pub sex: String,
    pub age: i32,
    pub years_playing: i32,
    pub email: String,
    pub phone: String,
    pub coach_key: String,
}

impl From<RegisterCoachRequest> for RegisterCoachCommand {
    fn from(req: RegisterCoachRequest) -> Self {
        Self {
            account: req.account,
            name: req.name,
            password: req.password,
            sex: req.sex,
            age: req.age,
            years_playing: req.years_playing,
            email: req.email,
            phone: req.phone,
            coach_key: req.coach_key,
        }
    }
}

/// Login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub account: String,
    pub password: String,
}

impl From<LoginRequest> for LoginCommand {
    fn from(req: LoginRequest) -> Self {
        Self {
            account: req.account,
            password: req.password,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Member profile response. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub account: String,
    pub name: String,
    pub sex: String,
    pub age: i32,
    pub years_playing: i32,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            account: member.account.to_string(),
            name: member.name,
            sex: member.sex,
            age: member.age,
            years_playing: member.years_playing,
            email: member.email,
            created_at: member.created_at,
        }
    }
}

/// Coach profile response.
#[derive(Debug, Clone, Serialize)]
pub struct CoachResponse {
    pub account: String,
    pub name: String,
    pub sex: String,
    pub age: i32,
    pub years_playing: i32,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            account: coach.account.to_string(),
            name: coach.name,
            sex: coach.sex,
            age: coach.age,
            years_playing: coach.years_playing,
            email: coach.email,
            phone: coach.phone,
            created_at: coach.created_at,
        }
    }
}

/// Resolved identity returned on successful login, for the session
/// layer in front of this service to store.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub account: String,
    pub name: String,
    pub role: String,
}

impl From<AuthenticatedMember> for LoginResponse {
    fn from(member: AuthenticatedMember) -> Self {
        Self {
            account: member.account.to_string(),
            name: member.name,
            role: member.role.as_str().to_string(),
        }
    }
}
