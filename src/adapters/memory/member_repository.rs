//! In-memory member store.

use crate::domain::foundation::{DomainError, ErrorCode, MemberAccount};
use crate::domain::member::{Coach, Member};
use crate::ports::MemberRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// Mutex-backed member store for tests and demos.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Mutex<Vec<Member>>,
    coaches: Mutex<Vec<Coach>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a member, bypassing validation. Test setup helper.
    pub fn with_member(self, member: Member) -> Self {
        self.members.lock().unwrap().push(member);
        self
    }

    /// Seeds a coach, bypassing validation. Test setup helper.
    pub fn with_coach(self, coach: Coach) -> Self {
        self.coaches.lock().unwrap().push(coach);
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    pub fn coach_count(&self) -> usize {
        self.coaches.lock().unwrap().len()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save_member(&self, member: &Member) -> Result<(), DomainError> {
        if self.account_taken(member.account.as_str()).await? {
            return Err(DomainError::new(
                ErrorCode::AccountTaken,
                "This account is already used",
            ));
        }
        self.members.lock().unwrap().push(member.clone());
        Ok(())
    }

    async fn save_coach(&self, coach: &Coach) -> Result<(), DomainError> {
        if self.account_taken(coach.account.as_str()).await? {
            return Err(DomainError::new(
                ErrorCode::AccountTaken,
                "This account is already used",
            ));
        }
        self.coaches.lock().unwrap().push(coach.clone());
        Ok(())
    }

    async fn find_member_by_account(
        &self,
        account: &MemberAccount,
    ) -> Result<Option<Member>, DomainError> {
        let members = self.members.lock().unwrap();
        Ok(members.iter().find(|m| &m.account == account).cloned())
    }

    async fn find_coach_by_account(
        &self,
        account: &MemberAccount,
    ) -> Result<Option<Coach>, DomainError> {
        let coaches = self.coaches.lock().unwrap();
        Ok(coaches.iter().find(|c| &c.account == account).cloned())
    }

    async fn account_taken(&self, account: &str) -> Result<bool, DomainError> {
        let in_members = self
            .members
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.account.as_str() == account);
        let in_coaches = self
            .coaches
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.account.as_str() == account);
        Ok(in_members || in_coaches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(account: &str) -> Member {
        Member::new(
            MemberAccount::new(account).unwrap(),
            "Alice",
            "salt.key",
            "female",
            30,
            5,
            "alice@example.com",
        )
    }

    #[tokio::test]
    async fn saved_member_is_found_by_account() {
        let repo = InMemoryMemberRepository::new();
        let m = member("Alice@1234ab");
        repo.save_member(&m).await.unwrap();

        let found = repo.find_member_by_account(&m.account).await.unwrap();
        assert_eq!(found, Some(m));
    }

    #[tokio::test]
    async fn duplicate_account_is_rejected() {
        let repo = InMemoryMemberRepository::new();
        let m = member("Alice@1234ab");
        repo.save_member(&m).await.unwrap();

        let err = repo.save_member(&m).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AccountTaken);
        assert_eq!(repo.member_count(), 1);
    }

    #[tokio::test]
    async fn account_taken_spans_members_and_coaches() {
        let repo = InMemoryMemberRepository::new().with_coach(Coach::new(
            MemberAccount::new("Coach!aa2024").unwrap(),
            "Lin",
            "salt.key",
            "male",
            45,
            20,
            "lin@example.com",
            "0912-345-678",
        ));

        assert!(repo.account_taken("Coach!aa2024").await.unwrap());
        assert!(!repo.account_taken("Alice@1234ab").await.unwrap());
    }
}
