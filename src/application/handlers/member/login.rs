//! LoginHandler - resolves an account/password pair to an identity.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{
    AuthenticatedMember, DomainError, ErrorCode, MemberAccount, MemberRole,
};
use crate::domain::member::credentials;
use crate::ports::MemberRepository;

/// Command carrying the submitted login form.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub account: String,
    pub password: String,
}

/// Result of a successful login: the resolved identity for the session
/// layer to store.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub member: AuthenticatedMember,
}

/// Handler for login.
///
/// Tries the member store first, then the coach store. Every failure
/// path collapses to a single `InvalidCredentials` error so the response
/// reveals nothing about whether the account exists.
pub struct LoginHandler {
    members: Arc<dyn MemberRepository>,
}

impl LoginHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        let account = MemberAccount::new(cmd.account).map_err(|_| invalid_credentials())?;

        if let Some(member) = self.members.find_member_by_account(&account).await? {
            if credentials::verify_password(&cmd.password, &member.password_hash) {
                info!(account = %account, role = "member", "login succeeded");
                return Ok(LoginResult {
                    member: AuthenticatedMember::new(account, member.name, MemberRole::Member),
                });
            }
            warn!(account = %account, "login failed");
            return Err(invalid_credentials());
        }

        if let Some(coach) = self.members.find_coach_by_account(&account).await? {
            if credentials::verify_password(&cmd.password, &coach.password_hash) {
                info!(account = %account, role = "coach", "login succeeded");
                return Ok(LoginResult {
                    member: AuthenticatedMember::new(account, coach.name, MemberRole::Coach),
                });
            }
        }

        warn!(account = %account, "login failed");
        Err(invalid_credentials())
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::new(ErrorCode::InvalidCredentials, "Invalid account or password")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMemberRepository;
    use crate::domain::member::{Coach, Member};

    fn member() -> Member {
        Member::new(
            MemberAccount::new("Alice@1234ab").unwrap(),
            "Alice",
            credentials::hash_password("abcdefg1"),
            "female",
            30,
            5,
            "alice@example.com",
        )
    }

    fn coach() -> Coach {
        Coach::new(
            MemberAccount::new("Coach!aa2024").unwrap(),
            "Lin",
            credentials::hash_password("coachpw99"),
            "male",
            45,
            20,
            "lin@example.com",
            "0912-345-678",
        )
    }

    #[tokio::test]
    async fn member_login_resolves_member_role() {
        let repo = Arc::new(InMemoryMemberRepository::new().with_member(member()));
        let handler = LoginHandler::new(repo);

        let result = handler
            .handle(LoginCommand {
                account: "Alice@1234ab".to_string(),
                password: "abcdefg1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.member.role, MemberRole::Member);
        assert_eq!(result.member.name, "Alice");
        assert!(!result.member.is_coach());
    }

    #[tokio::test]
    async fn coach_login_resolves_coach_role() {
        let repo = Arc::new(InMemoryMemberRepository::new().with_coach(coach()));
        let handler = LoginHandler::new(repo);

        let result = handler
            .handle(LoginCommand {
                account: "Coach!aa2024".to_string(),
                password: "coachpw99".to_string(),
            })
            .await
            .unwrap();

        assert!(result.member.is_coach());
        assert_eq!(result.member.name, "Lin");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_account_yield_the_same_error() {
        let repo = Arc::new(InMemoryMemberRepository::new().with_member(member()));
        let handler = LoginHandler::new(repo);

        let wrong_password = handler
            .handle(LoginCommand {
                account: "Alice@1234ab".to_string(),
                password: "abcdefg2".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_account = handler
            .handle(LoginCommand {
                account: "Nobody@999xyz".to_string(),
                password: "abcdefg1".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password.code, ErrorCode::InvalidCredentials);
        assert_eq!(unknown_account.code, ErrorCode::InvalidCredentials);
        assert_eq!(wrong_password.message, unknown_account.message);
    }

    #[tokio::test]
    async fn empty_account_is_invalid_credentials() {
        let handler = LoginHandler::new(Arc::new(InMemoryMemberRepository::new()));

        let err = handler
            .handle(LoginCommand {
                account: String::new(),
                password: "abcdefg1".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
    }
}
