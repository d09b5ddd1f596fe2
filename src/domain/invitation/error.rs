//! Invitation refusal causes

use thiserror::Error;

/// Why an invitation cannot be used
///
/// The causes are distinguished so callers can decide how much detail to
/// surface; a presentation layer is free to collapse all three into a single
/// "invalid or expired" message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InviteError {
    #[error("Invitation not found")]
    NotFound,

    #[error("Invitation has already been used")]
    AlreadyUsed,

    #[error("Invitation has expired")]
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(InviteError::NotFound.to_string(), "Invitation not found");
        assert_eq!(
            InviteError::AlreadyUsed.to_string(),
            "Invitation has already been used"
        );
        assert_eq!(InviteError::Expired.to_string(), "Invitation has expired");
    }
}
