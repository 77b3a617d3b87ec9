use serde::{Deserialize, Serialize};

use crate::user::AccountRole;

/// Which role is currently "logged in" on this client. Persisted under the
/// `session_type` key with the marketplace wire names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "TUTOR")]
    Adopter,
    #[serde(rename = "ONG")]
    Shelter,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::None => "NONE",
            SessionKind::Adopter => "TUTOR",
            SessionKind::Shelter => "ONG",
        }
    }

    /// Unknown or missing markers read back as no session.
    pub fn parse(value: &str) -> SessionKind {
        match value {
            "TUTOR" => SessionKind::Adopter,
            "ONG" => SessionKind::Shelter,
            _ => SessionKind::None,
        }
    }
}

impl From<AccountRole> for SessionKind {
    fn from(role: AccountRole) -> Self {
        match role {
            AccountRole::Adopter => SessionKind::Adopter,
            AccountRole::Shelter => SessionKind::Shelter,
        }
    }
}
