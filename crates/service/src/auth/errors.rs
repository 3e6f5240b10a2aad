use thiserror::Error;

/// Business errors for auth workflows.
///
/// Token failures are deliberately split so the boundary layer can return
/// distinct user-facing messages for missing, malformed, expired, and
/// signature-invalid credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user already exists")]
    Conflict,
    #[error("token not provided")]
    TokenMissing,
    #[error("malformed token")]
    TokenMalformed,
    #[error("expired token")]
    TokenExpired,
    #[error("invalid token")]
    TokenInvalid,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 1001,
            AuthError::Conflict => 1002,
            AuthError::TokenMissing => 1010,
            AuthError::TokenMalformed => 1011,
            AuthError::TokenExpired => 1012,
            AuthError::TokenInvalid => 1013,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }
}
