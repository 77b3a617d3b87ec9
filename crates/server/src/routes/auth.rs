use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use models::user::AccountRole;
use service::auth::domain::{LoginInput, RegisterInput};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Serialize)]
pub struct RegisterOutput {
    pub registered: bool,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    pub token: String,
}

#[derive(Deserialize)]
pub struct RecoverInput {
    pub email: String,
}

#[derive(Serialize)]
pub struct RecoverOutput {
    pub exists: bool,
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 200, description = "Registered"), (status = 400, description = "Bad Request"), (status = 409, description = "E-mail already in use")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<RegisterOutput>, ApiError> {
    state.auth.register(input).await?;
    Ok(Json(RegisterOutput { registered: true }))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in"), (status = 401, description = "Incorrect email or password")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let session = state.auth.login(input).await?;
    let profile = session.profile;

    state
        .sessions
        .open(profile.role.into(), &profile.name, &profile.email, &session.token)
        .await?;

    let mut cookie = Cookie::new("auth_token", session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    Ok((
        jar,
        Json(LoginOutput {
            name: profile.name,
            email: profile.email,
            role: profile.role,
            token: session.token,
        }),
    ))
}

#[utoipa::path(post, path = "/auth/logout", tag = "auth", responses((status = 204, description = "Session ended")))]
pub async fn logout(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError> {
    state.sessions.clear().await?;
    let jar = jar.remove(Cookie::from("auth_token"));
    Ok((jar, StatusCode::NO_CONTENT))
}

#[utoipa::path(post, path = "/auth/recover", tag = "auth", request_body = crate::openapi::RecoverRequest, responses((status = 200, description = "Existence check result")))]
pub async fn recover(
    State(state): State<ServerState>,
    Json(input): Json<RecoverInput>,
) -> Result<Json<RecoverOutput>, ApiError> {
    let exists = state.auth.recover_password(&input.email).await?;
    Ok(Json(RecoverOutput { exists }))
}
