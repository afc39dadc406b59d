//! Member store port.
//!
//! Defines the persistence contract for member and coach profiles. The
//! uniqueness rule spans both stores: an account name taken by a coach is
//! unavailable to members and vice versa.

use crate::domain::foundation::{DomainError, MemberAccount};
use crate::domain::member::{Coach, Member};
use async_trait::async_trait;

/// Repository port for member and coach profiles.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persist a new member.
    ///
    /// # Errors
    ///
    /// - `AccountTaken` if the account already exists
    /// - `DatabaseError` on persistence failure
    async fn save_member(&self, member: &Member) -> Result<(), DomainError>;

    /// Persist a new coach.
    ///
    /// # Errors
    ///
    /// - `AccountTaken` if the account already exists
    /// - `DatabaseError` on persistence failure
    async fn save_coach(&self, coach: &Coach) -> Result<(), DomainError>;

    /// Find a member by account. Returns `None` if not found.
    async fn find_member_by_account(
        &self,
        account: &MemberAccount,
    ) -> Result<Option<Member>, DomainError>;

    /// Find a coach by account. Returns `None` if not found.
    async fn find_coach_by_account(
        &self,
        account: &MemberAccount,
    ) -> Result<Option<Coach>, DomainError>;

    /// Whether an account name is already in use by any member or coach.
    ///
    /// Registration handlers call this after the pure format check passes.
    async fn account_taken(&self, account: &str) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MemberRepository) {}
    }
}
