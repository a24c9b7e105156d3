use bcrypt::{hash, verify, DEFAULT_COST};

use super::error::{AppError, AppResult};

/// bcrypt wrapper shared by signup and login.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Salted one-way digest of `plaintext`.
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        hash(plaintext, self.cost).map_err(|e| AppError::PasswordHash(e.to_string()))
    }

    /// A digest bcrypt cannot parse never verifies.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match verify(plaintext, digest) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("⚠️ Stored password digest rejected by bcrypt: {}", e);
                false
            }
        }
    }
}
