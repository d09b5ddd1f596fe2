//! Invitation token generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

use crate::domain::invitation::InviteToken;

/// Generator for opaque invitation tokens
#[derive(Debug, Clone)]
pub struct InviteTokenGenerator {
    /// Prefix for all generated tokens
    prefix: String,
    /// Number of random bytes per token
    token_bytes: usize,
}

impl InviteTokenGenerator {
    /// Create a new token generator
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            token_bytes: 32,
        }
    }

    /// Set the number of random bytes
    pub fn with_token_bytes(mut self, bytes: usize) -> Self {
        self.token_bytes = bytes;
        self
    }

    /// Generate a fresh token
    pub fn generate(&self) -> InviteToken {
        let mut random_bytes = vec![0u8; self.token_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        let encoded = URL_SAFE_NO_PAD.encode(&random_bytes);
        InviteToken::new(format!("{}{}", self.prefix, encoded))
    }
}

impl Default for InviteTokenGenerator {
    fn default() -> Self {
        Self::new("inv_")
    }
}
