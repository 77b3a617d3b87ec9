use serde::{Deserialize, Serialize};

use models::user::AccountRole;

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    /// CPF for adopters (validated), CNPJ or other id for shelters.
    pub national_id: String,
    pub password: String,
    pub role: AccountRole,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Profile view returned to callers; never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthProfile {
    pub name: String,
    pub email: String,
    pub role: AccountRole,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub profile: AuthProfile,
    pub token: String,
}
