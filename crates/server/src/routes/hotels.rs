use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::errors::ServiceError;
use service::services::hotel_service::{self, HotelInput};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::hotel::Model>>, ApiError> {
    let hotels = hotel_service::list_hotels(&state.db).await?;
    Ok(Json(hotels))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<HotelInput>,
) -> Result<(StatusCode, Json<models::hotel::Model>), ApiError> {
    let hotel = hotel_service::create_hotel(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<HotelInput>,
) -> Result<Json<models::hotel::Model>, ApiError> {
    let hotel = hotel_service::update_hotel(&state.db, id, input).await?;
    Ok(Json(hotel))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !hotel_service::delete_hotel(&state.db, id).await? {
        return Err(ServiceError::not_found("hotel").into());
    }
    Ok(StatusCode::NO_CONTENT)
}
