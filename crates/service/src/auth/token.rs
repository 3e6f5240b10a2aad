//! Stateless session tokens: signed HS256 JWTs with a bounded lifetime.
//!
//! Verification is pure; there is no revocation list or refresh path, expiry
//! is the only termination mechanism.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::AuthError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id.
    pub uid: Uuid,
    /// Username.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Mint a signed token embedding identity and expiry.
pub fn issue(
    secret: &str,
    ttl: Duration,
    user_id: Uuid,
    username: &str,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        uid: user_id,
        sub: username.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Verify and decode a token, distinguishing expiry from a bad signature.
pub fn verify(secret: &str, token: &str) -> Result<TokenClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    match decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::TokenInvalid,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => AuthError::TokenMalformed,
            _ => AuthError::TokenInvalid,
        }),
    }
}

/// Extract the raw token from an `Authorization: Bearer <token>` header.
pub fn from_bearer_header(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::TokenMissing)?;
    let mut parts = header.splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::TokenMalformed);
    }
    Ok(token)
}
