/**
 * Session Tokens
 *
 * This module issues and verifies the signed identity tokens handed out at
 * login. Tokens are HS256 JWTs carrying `{authorized, exp, userId}` and are
 * never stored server side; they stay valid until `exp`.
 *
 * # Verification order
 *
 * 1. Empty token -> `Missing`
 * 2. Header must parse and declare HS256; anything else (including `none`
 *    and asymmetric algorithms) is rejected before the signature is looked at
 * 3. Signature is recomputed with the process secret
 * 4. `exp` must be strictly in the future
 * 5. `authorized` must be true
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::SecretKey;
use crate::shared::user::UserId;

/// How long an issued token stays valid
pub const TOKEN_LIFETIME_HOURS: i64 = 6;

const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Always true for tokens issued by this service
    pub authorized: bool,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
    /// Subject
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// Why a token was refused
///
/// Every variant maps to the same unauthorized response; the detail is only
/// for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("no bearer token presented")]
    Missing,
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("unexpected signing algorithm {0:?}")]
    AlgorithmMismatch(Algorithm),
    #[error("signature does not verify")]
    BadSignature,
    #[error("token expired")]
    Expired,
    #[error("token is not marked as authorized")]
    NotAuthorized,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed(err.to_string()),
        }
    }
}

/// Issues and verifies identity tokens with one process-wide secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &SIGNING_ALGORITHM)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service bound to `secret`
    pub fn new(secret: &SecretKey) -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // exp is compared against the caller's clock in verify_at
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime: Duration::hours(TOKEN_LIFETIME_HOURS),
        }
    }

    /// Issue a token for `subject`, valid for six hours from now
    pub fn issue(&self, subject: UserId) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, subject: UserId, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = issued_at + self.lifetime;
        let exp = u64::try_from(expires_at.timestamp())
            .map_err(|_| TokenError::Signing(format!("expiry before epoch: {}", expires_at)))?;

        let claims = Claims {
            authorized: true,
            exp,
            user_id: subject,
        };

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify `token` and return its subject
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify `token` against the instant `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        let header = decode_header(token).map_err(|e| TokenError::Malformed(e.to_string()))?;
        if header.alg != SIGNING_ALGORITHM {
            return Err(TokenError::AlgorithmMismatch(header.alg));
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        let now = u64::try_from(now.timestamp()).unwrap_or(0);
        if claims.exp <= now {
            return Err(TokenError::Expired);
        }
        if !claims.authorized {
            return Err(TokenError::NotAuthorized);
        }

        Ok(claims.user_id)
    }
}
