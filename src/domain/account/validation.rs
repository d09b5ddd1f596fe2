//! Account validation utilities

use thiserror::Error;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Email is not a valid address")]
    InvalidEmail,

    #[error("Display name cannot be empty")]
    EmptyName,

    #[error("Display name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_NAME_LENGTH: usize = 100;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate an email address
///
/// Deliberately loose: a single `@` with something on both sides and no
/// whitespace. Deliverability is the mail system's problem, not ours.
pub fn validate_email(email: &str) -> Result<(), AccountValidationError> {
    if email.is_empty() {
        return Err(AccountValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(AccountValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(AccountValidationError::InvalidEmail);
    }

    if email.chars().any(|c| c.is_whitespace()) {
        return Err(AccountValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a display name
pub fn validate_display_name(name: &str) -> Result<(), AccountValidationError> {
    if name.trim().is_empty() {
        return Err(AccountValidationError::EmptyName);
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(AccountValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 8 characters
/// - Maximum 128 characters
pub fn validate_password(password: &str) -> Result<(), AccountValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooShort(
            MIN_PASSWORD_LENGTH,
        ));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last@example.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(validate_email(""), Err(AccountValidationError::EmptyEmail));
        assert_eq!(
            validate_email("no-at-sign"),
            Err(AccountValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("@x.com"),
            Err(AccountValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("a@"),
            Err(AccountValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("a@b@c.com"),
            Err(AccountValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("a b@x.com"),
            Err(AccountValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_display_name() {
        assert!(validate_display_name("Ada Lovelace").is_ok());
        assert_eq!(
            validate_display_name("  "),
            Err(AccountValidationError::EmptyName)
        );
        assert_eq!(
            validate_display_name(&"x".repeat(101)),
            Err(AccountValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn test_password() {
        assert!(validate_password("longenough").is_ok());
        assert_eq!(
            validate_password("short"),
            Err(AccountValidationError::PasswordTooShort(8))
        );
        assert_eq!(
            validate_password(&"x".repeat(129)),
            Err(AccountValidationError::PasswordTooLong(128))
        );
    }
}
