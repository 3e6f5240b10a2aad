use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub user_id: Uuid,
    /// Calendar dates, half-open interval `[start_date, end_date)`.
    pub start_date: Date,
    pub end_date: Date,
    pub responsible_name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Hotel,
    User,
    Guest,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Hotel => Entity::belongs_to(crate::hotel::Entity)
                .from(Column::HotelId)
                .to(crate::hotel::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(crate::user::Entity)
                .from(Column::UserId)
                .to(crate::user::Column::Id)
                .into(),
            Relation::Guest => Entity::has_many(crate::guest::Entity).into(),
        }
    }
}

impl Related<crate::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<crate::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Strict ordering: same-day stays are rejected.
pub fn validate_date_range(start: Date, end: Date) -> Result<(), errors::ModelError> {
    if start >= end {
        return Err(errors::ModelError::validation("end_date must be after start_date"));
    }
    Ok(())
}

pub fn validate_responsible_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::validation("responsible_name required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> Date {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn date_range_must_be_strictly_increasing() {
        assert!(validate_date_range(d("2026-01-01"), d("2026-01-05")).is_ok());
        assert!(validate_date_range(d("2026-01-05"), d("2026-01-05")).is_err());
        assert!(validate_date_range(d("2026-01-06"), d("2026-01-05")).is_err());
    }

    #[test]
    fn dates_serialize_as_plain_calendar_days() {
        let m = Model {
            id: Uuid::nil(),
            hotel_id: Uuid::nil(),
            user_id: Uuid::nil(),
            start_date: d("2026-03-01"),
            end_date: d("2026-03-10"),
            responsible_name: "Ana".into(),
            created_at: chrono::Utc::now().into(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["start_date"], "2026-03-01");
        assert_eq!(json["end_date"], "2026-03-10");
    }
}
