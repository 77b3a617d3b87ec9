use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub password: String,
    /// "ONG" or "TUTOR"
    pub role: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct RecoverRequest {
    pub email: String,
}

#[derive(ToSchema)]
pub struct PetDraftDoc {
    pub name: String,
    /// "Dog", "Cat", or "Other"
    pub species: String,
    pub age: String,
    /// "Male" or "Female"
    pub gender: String,
    /// "Small", "Medium", or "Large"
    pub size: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct ReportDraftDoc {
    pub report_type: String,
    pub location: String,
    pub description: String,
    pub evidence: Vec<String>,
    pub reporter_email: Option<String>,
    pub anonymous: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::pets::search,
        crate::routes::pets::get_by_id,
        crate::routes::pets::register,
        crate::routes::reports::create,
        crate::routes::reports::types,
        crate::routes::reports::get_by_protocol,
        crate::routes::reports::list,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::recover,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            RecoverRequest,
            PetDraftDoc,
            ReportDraftDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "pets"),
        (name = "reports"),
        (name = "auth")
    )
)]
pub struct ApiDoc;
