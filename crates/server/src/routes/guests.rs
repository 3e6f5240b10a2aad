use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::services::guest_service;

#[derive(Deserialize)]
pub struct CreateGuestInput {
    pub booking_id: Uuid,
    pub name: String,
    pub document: String,
}

#[derive(Deserialize)]
pub struct UpdateGuestInput {
    pub name: Option<String>,
    pub document: Option<String>,
}

#[derive(Serialize)]
pub struct CreateGuestOutput {
    pub message: &'static str,
    pub guest: models::guest::Model,
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateGuestInput>,
) -> Result<(StatusCode, Json<CreateGuestOutput>), ApiError> {
    let guest =
        guest_service::create_guest(&state.db, input.booking_id, &input.name, &input.document)
            .await?;
    Ok((StatusCode::CREATED, Json(CreateGuestOutput { message: "guest added", guest })))
}

pub async fn list_by_booking(
    State(state): State<ServerState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Vec<models::guest::Model>>, ApiError> {
    let guests = guest_service::list_guests_by_booking(&state.db, booking_id).await?;
    Ok(Json(guests))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateGuestInput>,
) -> Result<Json<models::guest::Model>, ApiError> {
    let guest = guest_service::update_guest(&state.db, id, input.name, input.document).await?;
    Ok(Json(guest))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    guest_service::delete_guest(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
