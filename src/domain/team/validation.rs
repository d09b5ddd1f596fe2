//! Team validation utilities

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Team ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Team ID must start with a letter or number")]
    InvalidIdStart,

    #[error("Team ID must end with a letter or number")]
    InvalidIdEnd,

    #[error("Team ID contains invalid character: '{0}'. Only alphanumeric characters and hyphens are allowed")]
    InvalidIdCharacter(char),

    #[error("Team ID cannot contain consecutive hyphens")]
    ConsecutiveHyphens,

    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name exceeds maximum length of {0} characters")]
    NameTooLong(usize),
}

const MAX_TEAM_ID_LENGTH: usize = 50;
const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team ID
///
/// Rules:
/// - Cannot be empty
/// - Maximum 50 characters
/// - Only alphanumeric characters and hyphens
/// - Must start and end with alphanumeric
/// - No consecutive hyphens
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    if id.len() > MAX_TEAM_ID_LENGTH {
        return Err(TeamValidationError::IdTooLong(MAX_TEAM_ID_LENGTH));
    }

    let chars: Vec<char> = id.chars().collect();

    if !chars[0].is_ascii_alphanumeric() {
        return Err(TeamValidationError::InvalidIdStart);
    }

    if !chars[chars.len() - 1].is_ascii_alphanumeric() {
        return Err(TeamValidationError::InvalidIdEnd);
    }

    let mut prev_hyphen = false;

    for c in &chars {
        if *c == '-' {
            if prev_hyphen {
                return Err(TeamValidationError::ConsecutiveHyphens);
            }
            prev_hyphen = true;
        } else if c.is_ascii_alphanumeric() {
            prev_hyphen = false;
        } else {
            return Err(TeamValidationError::InvalidIdCharacter(*c));
        }
    }

    Ok(())
}

/// Validate a team display name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.len() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_id() {
        assert!(validate_team_id("engineering").is_ok());
        assert!(validate_team_id("team-123").is_ok());
        assert!(validate_team_id("a").is_ok());
    }

    #[test]
    fn test_invalid_team_id() {
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
        assert_eq!(
            validate_team_id("-team"),
            Err(TeamValidationError::InvalidIdStart)
        );
        assert_eq!(
            validate_team_id("team-"),
            Err(TeamValidationError::InvalidIdEnd)
        );
        assert_eq!(
            validate_team_id("team_name"),
            Err(TeamValidationError::InvalidIdCharacter('_'))
        );
        assert_eq!(
            validate_team_id("team--name"),
            Err(TeamValidationError::ConsecutiveHyphens)
        );
    }

    #[test]
    fn test_team_id_too_long() {
        let id = "a".repeat(51);
        assert_eq!(
            validate_team_id(&id),
            Err(TeamValidationError::IdTooLong(50))
        );
    }

    #[test]
    fn test_team_name() {
        assert!(validate_team_name("Engineering").is_ok());
        assert_eq!(validate_team_name(""), Err(TeamValidationError::EmptyName));
        assert_eq!(
            validate_team_name("   "),
            Err(TeamValidationError::EmptyName)
        );
        assert_eq!(
            validate_team_name(&"x".repeat(101)),
            Err(TeamValidationError::NameTooLong(100))
        );
    }
}
