use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier as Argon2PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use crate::ports::PasswordVerifier;

/// Password hashing implementation.
///
/// Produces PHC-format Argon2id hashes and verifies candidates against
/// them in constant time. Implements the [`PasswordVerifier`] port, so it
/// can be handed to the auth service directly; hosts with a different
/// hashing scheme supply their own port implementation instead.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher with secure defaults.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordVerifier for PasswordHasher {
    fn matches(&self, plaintext: &str, hash: &str) -> bool {
        // A stored hash that cannot be parsed is a plain mismatch at the
        // port boundary.
        self.verify(plaintext, hash).unwrap_or(false)
    }
}
