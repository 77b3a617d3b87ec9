use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Account role. Wire names use the marketplace vocabulary:
/// a shelter is an "ONG", an adopter a "TUTOR".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    #[serde(rename = "ONG")]
    Shelter,
    #[serde(rename = "TUTOR")]
    Adopter,
}

/// A registered account. The password is stored hashed, never in clear.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    /// CPF for adopters, CNPJ for shelters; stored as entered.
    pub national_id: String,
    pub password_hash: String,
    pub role: AccountRole,
}

/// Basic email-shape check: one `@`, non-empty local part, domain with a
/// dot, no whitespace anywhere.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation("invalid email format".into());
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(l), Some(d), None) => (l, d),
        _ => return Err(invalid()),
    };
    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }
    let (host, tld) = match domain.rsplit_once('.') {
        Some(split) => split,
        None => return Err(invalid()),
    };
    if host.is_empty() || tld.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

/// CPF-like check: exactly 11 digits once separators are stripped.
pub fn validate_national_id(id: &str) -> Result<(), ModelError> {
    let digits = id.chars().filter(char::is_ascii_digit).count();
    if digits != 11 {
        return Err(ModelError::Validation("invalid CPF format".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@nodomain").is_err());
        assert!(validate_email("user@dot.").is_err());
        assert!(validate_email("sp ace@example.com").is_err());
    }

    #[test]
    fn national_id_strips_separators() {
        assert!(validate_national_id("000.000.000-00").is_ok());
        assert!(validate_national_id("00000000000").is_ok());
        assert!(validate_national_id("123").is_err());
        assert!(validate_national_id("00.000.000/0000-00").is_err()); // CNPJ, 14 digits
    }

    #[test]
    fn role_wire_names() {
        assert_eq!(serde_json::to_string(&AccountRole::Shelter).unwrap(), "\"ONG\"");
        assert_eq!(serde_json::to_string(&AccountRole::Adopter).unwrap(), "\"TUTOR\"");
    }
}
