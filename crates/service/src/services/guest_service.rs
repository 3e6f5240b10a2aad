use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::ServiceError;
use models::{booking, guest};

/// Add a guest to an existing booking. A vanished booking surfaces as
/// not-found, whether caught by the pre-check or by the foreign key.
pub async fn create_guest(
    db: &DatabaseConnection,
    booking_id: Uuid,
    name: &str,
    document: &str,
) -> Result<guest::Model, ServiceError> {
    guest::validate_guest(name, document)?;

    let exists = booking::Entity::find_by_id(booking_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if exists.is_none() {
        return Err(ServiceError::not_found("booking"));
    }

    let am = guest::ActiveModel {
        id: Set(Uuid::new_v4()),
        booking_id: Set(booking_id),
        name: Set(name.to_string()),
        document: Set(document.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| {
        let msg = e.to_string();
        if msg.contains("fk_guest_booking") {
            ServiceError::not_found("booking")
        } else {
            ServiceError::Db(msg)
        }
    })
}

/// Guests of one booking, ordered by name ascending.
pub async fn list_guests_by_booking(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<Vec<guest::Model>, ServiceError> {
    guest::Entity::find()
        .filter(guest::Column::BookingId.eq(booking_id))
        .order_by_asc(guest::Column::Name)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Partial update with coalesce semantics: absent fields keep their value.
pub async fn update_guest(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<String>,
    document: Option<String>,
) -> Result<guest::Model, ServiceError> {
    let mut am: guest::ActiveModel = guest::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("guest"))?
        .into();
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(ServiceError::Validation("name required".into()));
        }
        am.name = Set(name);
    }
    if let Some(document) = document {
        if document.trim().is_empty() {
            return Err(ServiceError::Validation("document required".into()));
        }
        am.document = Set(document);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

pub async fn delete_guest(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = guest::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("guest"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{booking_service, hotel_service};
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    async fn seed_booking(db: &DatabaseConnection) -> Result<models::booking::Model, anyhow::Error> {
        let hotel = hotel_service::create_hotel(
            db,
            hotel_service::HotelInput {
                name: format!("svc_guest_hotel_{}", Uuid::new_v4()),
                city: "Faro".into(),
                address: "Rua de Santo Antonio 5".into(),
                stars: 2,
                total_rooms: 5,
                description: None,
                photo_url: None,
            },
        )
        .await?;
        let user = models::user::create(
            db,
            &format!("svc_guest_user_{}", Uuid::new_v4()),
            "$argon2id$test",
        )
        .await?;
        let b = booking_service::create_booking(
            db,
            user.id,
            booking_service::CreateBookingInput {
                hotel_id: hotel.id,
                start_date: NaiveDate::parse_from_str("2026-06-01", "%Y-%m-%d").unwrap(),
                end_date: NaiveDate::parse_from_str("2026-06-05", "%Y-%m-%d").unwrap(),
                responsible_name: "Ana Sousa".into(),
            },
        )
        .await?;
        Ok(b)
    }

    #[tokio::test]
    async fn guest_requires_existing_booking() -> Result<(), anyhow::Error> {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        let res = create_guest(&db, Uuid::new_v4(), "Maria Silva", "X123456").await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn guest_crud_with_coalescing_update() -> Result<(), anyhow::Error> {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        let booking = seed_booking(&db).await?;

        let g = create_guest(&db, booking.id, "Bruno Alves", "A111").await?;
        create_guest(&db, booking.id, "Carla Dias", "B222").await?;

        let listed = list_guests_by_booking(&db, booking.id).await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Bruno Alves"); // name ascending

        // Only the document changes; the name must be left untouched.
        let updated = update_guest(&db, g.id, None, Some("A999".into())).await?;
        assert_eq!(updated.name, "Bruno Alves");
        assert_eq!(updated.document, "A999");

        delete_guest(&db, g.id).await?;
        let missing = delete_guest(&db, g.id).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
