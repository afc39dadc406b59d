//! RegisterMemberHandler - command handler for member registration.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, MemberAccount, ValidationError};
use crate::domain::member::{credentials, validation, Member};
use crate::ports::MemberRepository;

/// Command to register a new member.
#[derive(Debug, Clone)]
pub struct RegisterMemberCommand {
    pub account: String,
    pub name: String,
    pub password: String,
    pub sex: String,
    pub age: i32,
    pub years_playing: i32,
    pub email: String,
}

/// Result of successful member registration.
#[derive(Debug, Clone)]
pub struct RegisterMemberResult {
    pub member: Member,
}

/// Handler for member registration.
///
/// Runs the validation pipeline field by field, reporting the first
/// violated rule; the uniqueness check runs right after the username
/// format check, before any other field is examined.
pub struct RegisterMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl RegisterMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(
        &self,
        cmd: RegisterMemberCommand,
    ) -> Result<RegisterMemberResult, DomainError> {
        // 1. Username: pure format check, then uniqueness against the store
        validation::validate_username_format(&cmd.account)?;
        if self.members.account_taken(&cmd.account).await? {
            return Err(DomainError::new(
                ErrorCode::AccountTaken,
                "This account is already used",
            )
            .with_detail("field", "account"));
        }

        // 2. Remaining fields
        validation::validate_password(&cmd.password)?;
        validation::validate_sex(&cmd.sex)?;
        validation::validate_age(cmd.age)?;
        validation::validate_years_playing(cmd.years_playing)?;
        if cmd.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if cmd.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }

        // 3. Hash and persist
        let account = MemberAccount::new(cmd.account)?;
        let password_hash = credentials::hash_password(&cmd.password);
        let member = Member::new(
            account,
            cmd.name,
            password_hash,
            cmd.sex,
            cmd.age,
            cmd.years_playing,
            cmd.email,
        );
        self.members.save_member(&member).await?;

        info!(account = %member.account, "member registered");
        Ok(RegisterMemberResult { member })
    }
}
