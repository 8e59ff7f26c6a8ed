//! Password hashing - Argon2id with a fixed work factor.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
//! so a stored hash carries everything needed to verify it.

use argon2::{
    password_hash::{
        rand_core::{OsRng, RngCore},
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::config::{
    ARGON2_ITERATIONS, ARGON2_MEMORY_KIB, ARGON2_PARALLELISM, PASSWORD_SALT_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// One-way salted password hasher.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("memory_kib", &ARGON2_MEMORY_KIB)
            .field("iterations", &ARGON2_ITERATIONS)
            .field("parallelism", &ARGON2_PARALLELISM)
            .finish()
    }
}

impl PasswordHasher {
    /// Create a hasher with the application work factor.
    ///
    /// # Errors
    /// Returns a hashing error if the configured Argon2 parameters are rejected.
    pub fn new() -> AppResult<Self> {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            None,
        )
        .map_err(|e| AppError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// Returns a hashing error only if the OS entropy source fails.
    pub fn hash(&self, plain_text: &str) -> AppResult<String> {
        let mut salt_bytes = [0u8; PASSWORD_SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|e| AppError::hashing(format!("Entropy source unavailable: {}", e)))?;

        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| AppError::hashing(format!("Salt encoding failed: {}", e)))?;

        let hash = self
            .argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hash failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// The digest comparison is constant-time. A malformed hash never
    /// verifies.
    pub fn verify(&self, hash: &str, plain_text: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
