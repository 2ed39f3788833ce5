/**
 * Password Credentials
 *
 * Thin wrapper around bcrypt. Digests are self-describing (algorithm, cost
 * and salt are embedded), so verification needs nothing but the digest.
 * bcrypt compares in constant time.
 */

use thiserror::Error;

/// Lowest work factor bcrypt accepts
pub const MIN_COST: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Digest could not be produced
    #[error("password hashing failed: {0}")]
    Hashing(String),
    /// Wrong password, or a digest that cannot be read. Callers cannot tell which.
    #[error("password does not match")]
    Mismatch,
}

/// Produce a salted digest of `plaintext` at work factor `cost`
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, CredentialError> {
    bcrypt::hash(plaintext, cost).map_err(|e| CredentialError::Hashing(e.to_string()))
}

/// Check `plaintext` against a stored digest
pub fn verify_password(digest: &str, plaintext: &str) -> Result<(), CredentialError> {
    match bcrypt::verify(plaintext, digest) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CredentialError::Mismatch),
        Err(e) => {
            tracing::debug!("Unreadable password digest: {}", e);
            Err(CredentialError::Mismatch)
        }
    }
}

/// [`hash_password`] on the blocking pool
pub async fn hash_password_blocking(plaintext: String, cost: u32) -> Result<String, CredentialError> {
    tokio::task::spawn_blocking(move || hash_password(&plaintext, cost))
        .await
        .map_err(|e| CredentialError::Hashing(e.to_string()))?
}

/// [`verify_password`] on the blocking pool
pub async fn verify_password_blocking(digest: String, plaintext: String) -> Result<(), CredentialError> {
    tokio::task::spawn_blocking(move || verify_password(&digest, &plaintext))
        .await
        .map_err(|e| CredentialError::Hashing(e.to_string()))?
}
