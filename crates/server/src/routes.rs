use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod auth;
pub mod bookings;
pub mod guests;
pub mod hotels;

pub use auth::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public login/health plus the
/// bearer-token-gated admin surface.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/login", post(auth::login));

    let protected = Router::new()
        .route("/hotels", get(hotels::list).post(hotels::create))
        .route("/hotels/:id", put(hotels::update).delete(hotels::remove))
        .route("/bookings", get(bookings::list).post(bookings::create))
        .route("/bookings/:id", put(bookings::update).delete(bookings::remove))
        .route("/bookings/:id/guests", get(guests::list_by_booking))
        .route("/guests", post(guests::create))
        .route("/guests/:id", put(guests::update).delete(guests::remove))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
