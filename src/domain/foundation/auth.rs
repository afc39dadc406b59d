//! Authenticated identity types for the domain layer.
//!
//! The surrounding session layer (cookie store, JWT, whatever the deployment
//! uses) resolves a request to an `AuthenticatedMember` and passes it into
//! every ledger operation explicitly. Domain code never reaches into ambient
//! session state.

use super::MemberAccount;

/// Role of an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    /// Ordinary member: can reserve slots and enroll in programs.
    Member,
    /// Coach: additionally creates and cancels own programs.
    Coach,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Member => "member",
            MemberRole::Coach => "coach",
        }
    }
}

/// Resolved identity of the caller, supplied by the session layer.
#[derive(Debug, Clone)]
pub struct AuthenticatedMember {
    /// Login account identifier.
    pub account: MemberAccount,

    /// Display name, used for coach ownership checks on programs.
    pub name: String,

    /// Caller role.
    pub role: MemberRole,
}

impl AuthenticatedMember {
    pub fn new(account: MemberAccount, name: impl Into<String>, role: MemberRole) -> Self {
        Self {
            account,
            name: name.into(),
            role,
        }
    }

    /// True if the caller may perform coach operations.
    pub fn is_coach(&self) -> bool {
        self.role == MemberRole::Coach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(s: &str) -> MemberAccount {
        MemberAccount::new(s).unwrap()
    }

    #[test]
    fn coach_role_grants_coach_operations() {
        let coach = AuthenticatedMember::new(account("Coach!aa2024"), "Lin", MemberRole::Coach);
        assert!(coach.is_coach());
    }

    #[test]
    fn member_role_does_not_grant_coach_operations() {
        let member = AuthenticatedMember::new(account("Alice@1234ab"), "Alice", MemberRole::Member);
        assert!(!member.is_coach());
    }

    #[test]
    fn role_names_are_stable() {
        assert_eq!(MemberRole::Member.as_str(), "member");
        assert_eq!(MemberRole::Coach.as_str(), "coach");
    }
}
