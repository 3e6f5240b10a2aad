use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    /// One-way hash; must never appear in API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Booking => Entity::has_many(crate::booking::Entity).into(),
        }
    }
}

impl Related<crate::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), errors::ModelError> {
    if username.trim().is_empty() {
        return Err(errors::ModelError::validation("username required"));
    }
    if username.len() > 128 {
        return Err(errors::ModelError::validation("username too long (<=128)"));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    username: &str,
    password_hash: &str,
) -> Result<Model, errors::ModelError> {
    validate_username(username)?;
    if password_hash.trim().is_empty() {
        return Err(errors::ModelError::validation("password hash required"));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        password_hash: Set(password_hash.to_string()),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_validation() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_username(&"x".repeat(129)).is_err());
    }

    #[test]
    fn password_hash_never_serializes() {
        let m = Model {
            id: Uuid::new_v4(),
            username: "admin".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: Utc::now().into(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "admin");
    }
}
