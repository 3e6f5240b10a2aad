use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::auth::domain::AuthUser;
use service::errors::ServiceError;
use service::services::booking_service::{
    self, BookingSummary, CreateBookingInput, UpdateBookingInput,
};

#[derive(Serialize)]
pub struct CreateBookingOutput {
    pub message: &'static str,
    pub booking: models::booking::Model,
}

pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateBookingInput>,
) -> Result<(StatusCode, Json<CreateBookingOutput>), ApiError> {
    let booking = booking_service::create_booking(&state.db, user.id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateBookingOutput { message: "booking confirmed", booking }),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<BookingSummary>>, ApiError> {
    let summaries = booking_service::list_bookings(&state.db).await?;
    Ok(Json(summaries))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateBookingInput>,
) -> Result<Json<models::booking::Model>, ApiError> {
    let booking = booking_service::update_booking(&state.db, id, input).await?;
    Ok(Json(booking))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !booking_service::delete_booking(&state.db, id).await? {
        return Err(ServiceError::not_found("booking").into());
    }
    Ok(StatusCode::NO_CONTENT)
}
