use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::errors::ApiError;
use service::auth::domain::{AuthUser, LoginInput};
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};
use service::auth::token;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub user: AuthUser,
    pub token: String,
}

pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginOutput>, ApiError> {
    let repo = Arc::new(SeaOrmAuthRepository { db: state.db.clone() });
    let svc = AuthService::new(
        repo,
        AuthConfig {
            jwt_secret: state.auth.jwt_secret.clone(),
            token_ttl_secs: state.auth.token_ttl_secs,
        },
    );
    let session = svc.login(input).await?;
    Ok(Json(LoginOutput { user: session.user, token: session.token }))
}

/// Gate for every route except `/health` and `/login`: verifies the
/// `Authorization: Bearer` token and injects the caller's identity into the
/// request extensions.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let raw = token::from_bearer_header(header)?;
    let claims = token::verify(&state.auth.jwt_secret, raw)?;
    req.extensions_mut().insert(AuthUser { id: claims.uid, username: claims.sub });
    Ok(next.run(req).await)
}
