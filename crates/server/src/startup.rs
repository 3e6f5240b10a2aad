use std::{env, net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::init_logging;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::routes::{self, auth};
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};

fn build_cors(cfg: &configs::CorsConfig) -> CorsLayer {
    if cfg.allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::very_permissive();
    }
    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// One-shot admin provisioning: users are created out of band, so the only
/// built-in path is the seed pair in the environment.
async fn seed_admin_user(
    db: &DatabaseConnection,
    auth_cfg: &configs::AuthConfig,
) -> anyhow::Result<()> {
    let (Ok(username), Ok(password)) = (env::var("ADMIN_USERNAME"), env::var("ADMIN_PASSWORD"))
    else {
        return Ok(());
    };
    if models::user::find_by_username(db, &username).await?.is_some() {
        return Ok(());
    }
    let repo = Arc::new(SeaOrmAuthRepository { db: db.clone() });
    let svc = AuthService::new(
        repo,
        AuthConfig {
            jwt_secret: auth_cfg.jwt_secret.clone(),
            token_ttl_secs: auth_cfg.token_ttl_secs,
        },
    );
    svc.provision_user(&username, &password).await?;
    info!(%username, "admin user seeded");
    Ok(())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Fails closed: no database URL or signing secret means no server.
    let cfg = configs::AppConfig::load_and_validate()?;

    let db = models::db::connect(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    seed_admin_user(&db, &cfg.auth).await?;

    let state = auth::ServerState {
        db,
        auth: auth::ServerAuthConfig {
            jwt_secret: cfg.auth.jwt_secret.clone(),
            token_ttl_secs: cfg.auth.token_ttl_secs,
        },
    };

    let cors = build_cors(&cfg.cors);
    let app: Router = routes::build_router(cors, state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting hotel admin server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
