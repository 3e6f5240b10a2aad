use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
    pub stars: i32,
    pub total_rooms: i32,
    pub description: Option<String>,
    pub photo_url: Option<String>,
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

pub fn validate_stars(stars: i32) -> Result<(), errors::ModelError> {
    if !(1..=5).contains(&stars) {
        return Err(errors::ModelError::validation("stars must be between 1 and 5"));
    }
    Ok(())
}

pub fn validate_total_rooms(total_rooms: i32) -> Result<(), errors::ModelError> {
    if total_rooms < 1 {
        return Err(errors::ModelError::validation("total_rooms must be >= 1"));
    }
    Ok(())
}

pub fn validate_required(name: &str, city: &str, address: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::validation("name required"));
    }
    if city.trim().is_empty() {
        return Err(errors::ModelError::validation("city required"));
    }
    if address.trim().is_empty() {
        return Err(errors::ModelError::validation("address required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_range() {
        assert!(validate_stars(1).is_ok());
        assert!(validate_stars(5).is_ok());
        assert!(validate_stars(0).is_err());
        assert!(validate_stars(6).is_err());
    }

    #[test]
    fn rooms_positive() {
        assert!(validate_total_rooms(1).is_ok());
        assert!(validate_total_rooms(0).is_err());
        assert!(validate_total_rooms(-3).is_err());
    }

    #[test]
    fn required_fields() {
        assert!(validate_required("Plaza", "Lisbon", "Av. 1").is_ok());
        assert!(validate_required("", "Lisbon", "Av. 1").is_err());
        assert!(validate_required("Plaza", " ", "Av. 1").is_err());
        assert!(validate_required("Plaza", "Lisbon", "").is_err());
    }
}
