//! Booking engine: capacity-checked creation and update.
//!
//! The overlap count and the insert/update run in one serializable
//! transaction; two concurrent writers for the same hotel cannot both
//! observe an under-capacity snapshot and both commit. Intervals are
//! half-open `[start, end)`, so back-to-back stays never collide.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use models::{booking, guest, hotel};

/// Bounded retries for serialization failures under contention.
const SERIALIZATION_RETRIES: usize = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingInput {
    pub hotel_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub responsible_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookingInput {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub responsible_name: Option<String>,
}

/// Reporting view for GET /bookings: booking joined to its hotel and the
/// count of dependent guests. Not used by the capacity check.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub hotel_name: String,
    pub city: String,
    pub photo_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub responsible_name: String,
    pub guest_count: u64,
    pub created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

fn is_serialization_failure(msg: &str) -> bool {
    msg.contains("40001") || msg.contains("could not serialize")
}

/// Existing bookings for `hotel_id` whose `[start, end)` interval overlaps
/// the given one: `b.start_date < end AND b.end_date > start`.
async fn overlap_count(
    txn: &DatabaseTransaction,
    hotel_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    exclude: Option<Uuid>,
) -> Result<u64, ServiceError> {
    let mut query = booking::Entity::find()
        .filter(booking::Column::HotelId.eq(hotel_id))
        .filter(booking::Column::StartDate.lt(end))
        .filter(booking::Column::EndDate.gt(start));
    if let Some(id) = exclude {
        query = query.filter(booking::Column::Id.ne(id));
    }
    query.count(txn).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a booking, enforcing the capacity invariant.
///
/// Fails with `Validation` on a non-strict date range, `NotFound` when the
/// hotel is absent, and `Conflict` when every room is already taken for an
/// overlapping interval.
#[instrument(skip(db, input), fields(hotel_id = %input.hotel_id))]
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: CreateBookingInput,
) -> Result<booking::Model, ServiceError> {
    booking::validate_date_range(input.start_date, input.end_date)?;
    booking::validate_responsible_name(&input.responsible_name)?;

    let mut attempt = 0;
    loop {
        match try_create(db, user_id, &input).await {
            Err(ServiceError::Db(msg))
                if is_serialization_failure(&msg) && attempt < SERIALIZATION_RETRIES =>
            {
                attempt += 1;
                debug!(attempt, "booking insert serialization retry");
            }
            other => return other,
        }
    }
}

async fn try_create(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: &CreateBookingInput,
) -> Result<booking::Model, ServiceError> {
    let txn = db
        .begin_with_config(Some(IsolationLevel::Serializable), None)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let hotel = hotel::Entity::find_by_id(input.hotel_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("hotel"))?;

    let taken = overlap_count(&txn, input.hotel_id, input.start_date, input.end_date, None).await?;
    if taken >= hotel.total_rooms as u64 {
        txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        return Err(ServiceError::conflict("no rooms available for this period"));
    }

    let am = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        hotel_id: Set(input.hotel_id),
        user_id: Set(user_id),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        responsible_name: Set(input.responsible_name.clone()),
        created_at: Set(Utc::now().into()),
    };
    let model = am.insert(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(model)
}

/// Update dates and/or responsible name, re-running the date-order and
/// capacity checks against all other bookings of the hotel.
#[instrument(skip(db, input))]
pub async fn update_booking(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateBookingInput,
) -> Result<booking::Model, ServiceError> {
    if let Some(name) = &input.responsible_name {
        booking::validate_responsible_name(name)?;
    }

    let mut attempt = 0;
    loop {
        match try_update(db, id, &input).await {
            Err(ServiceError::Db(msg))
                if is_serialization_failure(&msg) && attempt < SERIALIZATION_RETRIES =>
            {
                attempt += 1;
                debug!(attempt, "booking update serialization retry");
            }
            other => return other,
        }
    }
}

async fn try_update(
    db: &DatabaseConnection,
    id: Uuid,
    input: &UpdateBookingInput,
) -> Result<booking::Model, ServiceError> {
    let txn = db
        .begin_with_config(Some(IsolationLevel::Serializable), None)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let existing = booking::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("booking"))?;

    let start = input.start_date.unwrap_or(existing.start_date);
    let end = input.end_date.unwrap_or(existing.end_date);
    booking::validate_date_range(start, end)?;

    let hotel = hotel::Entity::find_by_id(existing.hotel_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("hotel"))?;

    let taken = overlap_count(&txn, existing.hotel_id, start, end, Some(id)).await?;
    if taken >= hotel.total_rooms as u64 {
        txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        return Err(ServiceError::conflict("no rooms available for this period"));
    }

    let mut am: booking::ActiveModel = existing.into();
    am.start_date = Set(start);
    am.end_date = Set(end);
    if let Some(name) = &input.responsible_name {
        am.responsible_name = Set(name.clone());
    }
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// All bookings joined to their hotel and guest count, newest stay first.
pub async fn list_bookings(db: &DatabaseConnection) -> Result<Vec<BookingSummary>, ServiceError> {
    let rows = booking::Entity::find()
        .find_also_related(hotel::Entity)
        .order_by_desc(booking::Column::StartDate)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let ids: Vec<Uuid> = rows.iter().map(|(b, _)| b.id).collect();
    let mut counts: HashMap<Uuid, u64> = HashMap::new();
    if !ids.is_empty() {
        let guests = guest::Entity::find()
            .filter(guest::Column::BookingId.is_in(ids))
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        for g in guests {
            *counts.entry(g.booking_id).or_default() += 1;
        }
    }

    rows.into_iter()
        .map(|(b, h)| {
            let h = h.ok_or_else(|| ServiceError::Db("booking row missing hotel".into()))?;
            Ok(BookingSummary {
                id: b.id,
                hotel_id: b.hotel_id,
                hotel_name: h.name,
                city: h.city,
                photo_url: h.photo_url,
                start_date: b.start_date,
                end_date: b.end_date,
                responsible_name: b.responsible_name,
                guest_count: counts.get(&b.id).copied().unwrap_or(0),
                created_at: b.created_at,
            })
        })
        .collect()
}

/// Delete a booking; dependent guests cascade at the store layer. Returns
/// whether the booking existed.
pub async fn delete_booking(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = booking::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
