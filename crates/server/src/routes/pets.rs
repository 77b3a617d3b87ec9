use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use models::pet::{Pet, PetDraft};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct RegisterOutput {
    pub pet_id: u64,
}

#[utoipa::path(get, path = "/pets/search", tag = "pets", params(("q" = Option<String>, Query, description = "Free-text query over name and species")), responses((status = 200, description = "Ranked matches")))]
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = state.catalog.search(&query.q).await?;
    Ok(Json(pets))
}

#[utoipa::path(get, path = "/pets/{id}", tag = "pets", responses((status = 200, description = "Found"), (status = 404, description = "No such pet")))]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<Pet>, StatusCode> {
    match state.catalog.get(id).await {
        Ok(Some(pet)) => Ok(Json(pet)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(post, path = "/pets", tag = "pets", request_body = crate::openapi::PetDraftDoc, responses((status = 200, description = "Registered"), (status = 400, description = "Bad Request"), (status = 401, description = "Unauthorized")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(draft): Json<PetDraft>,
) -> Result<Json<RegisterOutput>, ApiError> {
    let pet_id = state.catalog.register(draft).await?;
    Ok(Json(RegisterOutput { pet_id }))
}
