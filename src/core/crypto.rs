//! File password hashing and verification.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::core::error::CryptoError;

/// Checks a candidate password against a stored hash.
pub trait CredentialVerifier {
    fn verify(&self, candidate: &str, stored_hash: &str) -> bool;
}

/// Verifier for argon2 PHC strings (`$argon2id$v=19$...`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2Verifier;

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, candidate: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            log::warn!("stored file password is not a valid PHC string");
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Hash a password into an argon2id PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, CryptoError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CryptoError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(Argon2Verifier.verify("correct horse", &hash));
        assert!(!Argon2Verifier.verify("battery staple", &hash));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!Argon2Verifier.verify("anything", "plaintext"));
        assert!(!Argon2Verifier.verify("", ""));
    }
}
