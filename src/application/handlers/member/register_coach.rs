//! RegisterCoachHandler - command handler for coach registration.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, MemberAccount, ValidationError};
use crate::domain::member::{credentials, validation, Coach};
use crate::ports::MemberRepository;

/// Command to register a new coach.
#[derive(Debug, Clone)]
pub struct RegisterCoachCommand {
    pub account: String,
    pub name: String,
    pub password: String,
    pub sex: String,
    pub age: i32,
    pub years_playing: i32,
    pub email: String,
    pub phone: String,

    /// Shared secret proving the caller is entitled to a coach account.
    pub coach_key: String,
}

/// Result of successful coach registration.
#[derive(Debug, Clone)]
pub struct RegisterCoachResult {
    pub coach: Coach,
}

/// Handler for coach registration.
///
/// The coach key gate runs first; a wrong key fails before any profile
/// field is examined. The rest of the pipeline matches member
/// registration, plus the phone field.
pub struct RegisterCoachHandler {
    members: Arc<dyn MemberRepository>,
    registration_key: String,
}

impl RegisterCoachHandler {
    pub fn new(members: Arc<dyn MemberRepository>, registration_key: String) -> Self {
        Self {
            members,
            registration_key,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterCoachCommand,
    ) -> Result<RegisterCoachResult, DomainError> {
        // 1. Coach key gate
        validation::validate_coach_key(&cmd.coach_key, &self.registration_key)?;

        // 2. Username format, then uniqueness
        validation::validate_username_format(&cmd.account)?;
        if self.members.account_taken(&cmd.account).await? {
            return Err(DomainError::new(
                ErrorCode::AccountTaken,
                "This account is already used",
            )
            .with_detail("field", "account"));
        }

        // 3. Remaining fields
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
        if cmd.phone.trim().is_empty() {
            return Err(ValidationError::empty_field("phone").into());
        }

        // 4. Hash and persist
        let account = MemberAccount::new(cmd.account)?;
        let password_hash = credentials::hash_password(&cmd.password);
        let coach = Coach::new(
            account,
            cmd.name,
            password_hash,
            cmd.sex,
            cmd.age,
            cmd.years_playing,
            cmd.email,
            cmd.phone,
        );
        self.members.save_coach(&coach).await?;

        info!(account = %coach.account, "coach registered");
        Ok(RegisterCoachResult { coach })
    }
}
