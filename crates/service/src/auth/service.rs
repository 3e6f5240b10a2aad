use std::sync::{Arc, OnceLock};

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use chrono::Duration;
use rand::rngs::OsRng;
use tracing::{info, instrument};

use super::domain::{AuthSession, AuthUser, LoginInput};
use super::errors::AuthError;
use super::repository::AuthRepository;
use super::token;

/// Auth service configuration. The secret is mandatory; config validation
/// refuses to start the process without one.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

/// Hash verified against when the username does not exist, so a login
/// attempt costs one argon2 verification either way.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(b"placeholder-password", &salt)
            .map(|h| h.to_string())
            .unwrap_or_default()
    })
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Authenticate a user and issue a session token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_secs: 3600 });
    /// let _ = tokio_test::block_on(svc.provision_user("admin", "Passw0rd!")).unwrap();
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: "admin".into(), password: "Passw0rd!".into() })).unwrap();
    /// assert_eq!(session.user.username, "admin");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self.repo.find_user_by_username(&input.username).await?;

        // One verification regardless of whether the user exists.
        let stored_hash = match &user {
            Some(u) => u.password_hash.as_str(),
            None => dummy_hash(),
        };
        let parsed =
            PasswordHash::new(stored_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        let matches = Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .is_ok();

        let user = match user {
            Some(u) if matches => u,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let ttl = Duration::seconds(self.cfg.token_ttl_secs);
        let token = token::issue(&self.cfg.jwt_secret, ttl, user.id, &user.username)?;
        info!(user_id = %user.id, username = %user.username, "user_logged_in");
        Ok(AuthSession {
            user: AuthUser { id: user.id, username: user.username },
            token,
        })
    }

    /// Create a user with a hashed password. There is no public registration
    /// endpoint; this backs the startup seed and the tests.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn provision_user(&self, username: &str, password: &str) -> Result<AuthUser, AuthError> {
        if password.len() < 8 {
            return Err(AuthError::HashError("password too short (>=8)".into()));
        }
        if self.repo.find_user_by_username(username).await?.is_some() {
            return Err(AuthError::Conflict);
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();
        let created = self.repo.create_user(username, &hash).await?;
        info!(user_id = %created.id, username = %created.username, "user_provisioned");
        Ok(AuthUser { id: created.id, username: created.username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc() -> AuthService<MockAuthRepository> {
        AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: "test-secret".into(), token_ttl_secs: 3600 },
        )
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_password() {
        let svc = svc();
        svc.provision_user("admin", "S3curePass!").await.unwrap();
        let session = svc
            .login(LoginInput { username: "admin".into(), password: "S3curePass!".into() })
            .await
            .unwrap();
        assert_eq!(session.user.username, "admin");
        let claims = token::verify("test-secret", &session.token).unwrap();
        assert_eq!(claims.uid, session.user.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_fail_identically() {
        let svc = svc();
        svc.provision_user("admin", "S3curePass!").await.unwrap();

        let wrong = svc
            .login(LoginInput { username: "admin".into(), password: "nope".into() })
            .await;
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));

        let unknown = svc
            .login(LoginInput { username: "ghost".into(), password: "S3curePass!".into() })
            .await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn duplicate_provision_conflicts() {
        let svc = svc();
        svc.provision_user("admin", "S3curePass!").await.unwrap();
        let again = svc.provision_user("admin", "S3curePass!").await;
        assert!(matches!(again, Err(AuthError::Conflict)));
    }

    #[tokio::test]
    async fn short_password_rejected() {
        let svc = svc();
        assert!(svc.provision_user("admin", "short").await.is_err());
    }
}
