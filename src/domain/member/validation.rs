//! Pure validation rules for registration input.
//!
//! Every function here is side-effect free and reports the first violated
//! rule as a field-tagged [`DomainError`]. Account uniqueness is the one
//! rule with an external dependency; it lives in the registration handlers
//! (async lookup through `MemberRepository::account_taken`) and runs only
//! after [`validate_username_format`] has passed.
//!
//! The username and password rule sets are intentionally asymmetric:
//! passwords do not require an uppercase letter or a special character.

use crate::domain::foundation::{DomainError, ValidationError};
use subtle::ConstantTimeEq;

/// Special characters accepted in usernames.
///
/// `/` is a member of the set, not a separator.
pub const USERNAME_SPECIAL_CHARS: &[char] = &['*', '/', '@', '&', '$', '^', '%', '#', '!'];

const USERNAME_MIN_LEN: usize = 8;
const USERNAME_MAX_LEN: usize = 16;
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 16;

/// Accepted values for the sex field.
pub const SEX_VALUES: &[&str] = &["male", "female", "undisclosed"];

const AGE_MIN: i32 = 18;
const AGE_MAX: i32 = 70;

/// Validates username format: length 8-16 with at least one uppercase
/// letter, one lowercase letter, and one special character.
pub fn validate_username_format(candidate: &str) -> Result<(), DomainError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::empty_field("account").into());
    }

    let len = candidate.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::invalid_format(
            "account",
            "must be 8 to 16 characters",
        )
        .into());
    }

    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::invalid_format(
            "account",
            "must contain at least one uppercase letter",
        )
        .into());
    }

    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::invalid_format(
            "account",
            "must contain at least one lowercase letter",
        )
        .into());
    }

    if !candidate.chars().any(|c| USERNAME_SPECIAL_CHARS.contains(&c)) {
        return Err(ValidationError::invalid_format(
            "account",
            "must contain at least one special character (*/@&$^%#!)",
        )
        .into());
    }

    Ok(())
}

/// Validates password format: length 8-16 with at least one lowercase
/// letter and one digit.
pub fn validate_password(candidate: &str) -> Result<(), DomainError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::empty_field("password").into());
    }

    let len = candidate.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ValidationError::invalid_format(
            "password",
            "must be 8 to 16 characters",
        )
        .into());
    }

    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::invalid_format(
            "password",
            "must contain at least one lowercase letter",
        )
        .into());
    }

    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            "password",
            "must contain at least one digit",
        )
        .into());
    }

    Ok(())
}

/// Validates the sex field against the closed 3-value set.
pub fn validate_sex(candidate: &str) -> Result<(), DomainError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::empty_field("sex").into());
    }
    if !SEX_VALUES.contains(&candidate) {
        return Err(ValidationError::invalid_format(
            "sex",
            "must be one of: male, female, undisclosed",
        )
        .into());
    }
    Ok(())
}

/// Validates age is within [18, 70] inclusive.
pub fn validate_age(candidate: i32) -> Result<(), DomainError> {
    if !(AGE_MIN..=AGE_MAX).contains(&candidate) {
        return Err(ValidationError::out_of_range("age", AGE_MIN, AGE_MAX, candidate).into());
    }
    Ok(())
}

/// Validates years of playing experience is non-negative.
pub fn validate_years_playing(candidate: i32) -> Result<(), DomainError> {
    if candidate < 0 {
        return Err(ValidationError::invalid_format(
            "years_playing",
            "cannot be negative",
        )
        .into());
    }
    Ok(())
}

/// Validates the coach registration key against the configured shared secret.
///
/// Compared in constant time so the gate leaks nothing about prefix matches.
pub fn validate_coach_key(candidate: &str, expected: &str) -> Result<(), DomainError> {
    let matches = candidate.len() == expected.len()
        && candidate.as_bytes().ct_eq(expected.as_bytes()).into();
    if !matches {
        return Err(ValidationError::invalid_format("coach_key", "key does not match").into());
    }
    Ok(())
}
