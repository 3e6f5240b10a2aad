use sea_orm::DatabaseConnection;

use crate::auth::domain::StoredUser;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
        let res = models::user::find_by_username(&self.db, username)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| StoredUser {
            id: u.id,
            username: u.username,
            password_hash: u.password_hash,
        }))
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<StoredUser, AuthError> {
        let created = models::user::create(&self.db, username, password_hash)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(StoredUser {
            id: created.id,
            username: created.username,
            password_hash: created.password_hash,
        })
    }
}
