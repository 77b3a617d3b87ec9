use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use models::report::{Report, ReportDraft, REPORT_TYPES};
use service::pagination::Pagination;
use service::report::ReportFilter;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Serialize)]
pub struct CreateOutput {
    pub protocol: String,
}

#[utoipa::path(post, path = "/reports", tag = "reports", request_body = crate::openapi::ReportDraftDoc, responses((status = 200, description = "Created"), (status = 400, description = "Validation failure")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<ReportDraft>,
) -> Result<Json<CreateOutput>, ApiError> {
    let protocol = state.reports.create(draft).await?;
    Ok(Json(CreateOutput { protocol }))
}

/// Suggested report types for the submission form; the field stays free text.
#[utoipa::path(get, path = "/reports/types", tag = "reports", responses((status = 200, description = "Suggestions")))]
pub async fn types() -> Json<Vec<&'static str>> {
    Json(REPORT_TYPES.to_vec())
}

#[utoipa::path(get, path = "/reports/{protocol}", tag = "reports", responses((status = 200, description = "Found"), (status = 404, description = "No such protocol")))]
pub async fn get_by_protocol(
    State(state): State<ServerState>,
    Path(protocol): Path<String>,
) -> Result<Json<Report>, StatusCode> {
    match state.reports.find_by_protocol(&protocol).await {
        Ok(Some(report)) => Ok(Json(report)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// List or search reports, most recent first. Without filters this is the
/// full listing the shelter dashboard shows.
#[utoipa::path(get, path = "/reports", tag = "reports", params(("protocol" = Option<String>, Query, description = "Protocol substring"), ("type" = Option<String>, Query, description = "Exact report type")), responses((status = 200, description = "Matches"), (status = 401, description = "Unauthorized")))]
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Report>>, ApiError> {
    let filter = ReportFilter {
        protocol: query.protocol,
        report_type: query.report_type,
    };
    let results = state.reports.search(filter).await?;

    let paged = match (query.page, query.per_page) {
        (None, None) => results,
        (page, per_page) => Pagination {
            page: page.unwrap_or(1),
            per_page: per_page.unwrap_or(20),
        }
        .slice(&results),
    };
    Ok(Json(paged))
}
