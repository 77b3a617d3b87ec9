use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::service::AuthConfig;
use service::auth::AuthService;
use service::catalog::{seed as catalog_seed, CatalogService, InMemoryCatalog, RegistrationDefaults};
use service::report::{seed as report_seed, InMemoryReports, ReportService};
use service::storage::SessionStore;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: &configs::AppConfig) -> Result<SocketAddr, StartupError> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| cfg.server.host.clone());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.server.port);
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Build the application state: seeded in-memory stores behind the services.
pub async fn build_state(cfg: &configs::AppConfig) -> anyhow::Result<ServerState> {
    let latency = (cfg.catalog.latency_ms > 0)
        .then(|| std::time::Duration::from_millis(cfg.catalog.latency_ms));

    let mut catalog_repo = InMemoryCatalog::new(catalog_seed::pets());
    let mut report_repo = InMemoryReports::new(report_seed::reports());
    if let Some(delay) = latency {
        catalog_repo = catalog_repo.with_latency(delay);
        report_repo = report_repo.with_latency(delay);
    }

    let defaults = RegistrationDefaults {
        shelter: cfg.catalog.shelter_name.clone(),
        ..RegistrationDefaults::default()
    };
    let catalog = Arc::new(CatalogService::new(Arc::new(catalog_repo), defaults));
    let reports = Arc::new(ReportService::new(Arc::new(report_repo)));

    let auth = Arc::new(AuthService::new(
        Arc::new(service::auth::repository::in_memory::InMemoryAccounts::default()),
        AuthConfig {
            jwt_secret: cfg.auth.jwt_secret.clone(),
            token_ttl_hours: cfg.auth.token_ttl_hours,
        },
    ));
    auth.seed_demo_accounts().await?;

    let sessions = SessionStore::new(&cfg.session.store_path).await?;

    Ok(ServerState {
        catalog,
        reports,
        auth,
        sessions,
        jwt_secret: cfg.auth.jwt_secret.clone(),
    })
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;
    common::env::ensure_env("data").await?;

    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr(&cfg)?;
    info!(%addr, "starting adopet api server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Bind(e.to_string()))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}
