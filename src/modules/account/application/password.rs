/// One-way password hashing
use crate::shared::errors::{AppError, AppResult};
use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;

/// Salted argon2 encoder. Hashing is slow by design; verification is only
/// used by tests and the (out of scope) login path.
#[derive(Default)]
pub struct PasswordEncoder;

impl PasswordEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::HashError(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    pub fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| AppError::HashError(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
