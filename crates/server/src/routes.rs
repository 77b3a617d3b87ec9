use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use models::user::AccountRole;
use service::auth::service::Claims;
use service::auth::AuthService;
use service::catalog::{CatalogService, InMemoryCatalog};
use service::report::{InMemoryReports, ReportService};
use service::storage::SessionStore;

pub mod auth;
pub mod pets;
pub mod reports;

use crate::openapi::ApiDoc;

#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService<InMemoryCatalog>>,
    pub reports: Arc<ReportService<InMemoryReports>>,
    pub auth: Arc<AuthService<service::auth::repository::in_memory::InMemoryAccounts>>,
    pub sessions: SessionStore,
    pub jwt_secret: String,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public catalog/report/auth routes plus
/// shelter-only management routes behind the bearer-token guard.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/pets/search", get(pets::search))
        .route("/pets/:id", get(pets::get_by_id))
        .route("/reports", post(reports::create))
        .route("/reports/types", get(reports::types))
        .route("/reports/:protocol", get(reports::get_by_protocol))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/recover", post(auth::recover));

    // Shelter-side management: registering animals and reviewing reports.
    let shelter = Router::new()
        .route("/pets", post(pets::register))
        .route("/reports", get(reports::list))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_shelter_token));

    public
        .merge(shelter)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
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

/// Guard for shelter-only routes: a valid bearer token (Authorization
/// header, `auth_token` cookie fallback) carrying the ONG role.
pub async fn require_shelter_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = match bearer_or_cookie_token(&req) {
        Some(t) => t,
        None => {
            tracing::warn!(path = %req.uri().path(), "missing bearer token and auth_token cookie");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    let key = DecodingKey::from_secret(state.jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let claims = match decode::<Claims>(&token, &key, &validation) {
        Ok(data) => data.claims,
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), error = %e, "invalid or expired token");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };
    if claims.role != AccountRole::Shelter {
        tracing::warn!(subject = %claims.sub, "non-shelter account on shelter route");
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(req).await)
}

fn bearer_or_cookie_token(req: &Request) -> Option<String> {
    if let Some(h) = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        return h.strip_prefix("Bearer ").map(|t| t.to_string());
    }

    let cookie_header = req
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())?;
    for part in cookie_header.split(';') {
        if let Some(rest) = part.trim().strip_prefix("auth_token=") {
            if !rest.is_empty() {
                return Some(rest.to_string());
            }
        }
    }
    None
}
