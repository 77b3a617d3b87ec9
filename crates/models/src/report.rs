use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::user::validate_email;

/// Status stamped onto every newly created report. No workflow transitions
/// happen inside this system; investigators update status elsewhere.
pub const STATUS_RECEIVED: &str = "Received";

/// Suggested report types offered to the reporter. The field itself stays
/// free text.
pub const REPORT_TYPES: &[&str] = &["Abuse", "Abandonment", "Neglect", "Hoarding", "Other"];

/// A submitted animal-welfare complaint, tracked by protocol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// `RPT-` + zero-padded 4-digit sequence number.
    pub protocol: String,
    pub report_type: String,
    pub location: String,
    pub description: String,
    /// Evidence references (image names etc.); may be empty.
    pub evidence: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub reporter_email: Option<String>,
    pub anonymous: bool,
}

/// Submission input. Protocol, timestamp, and status are system-assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportDraft {
    pub report_type: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub reporter_email: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

impl ReportDraft {
    /// Rejects drafts before any store mutation happens.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.location.trim().len() < 5 {
            return Err(ModelError::Validation(
                "location must be at least 5 characters".into(),
            ));
        }
        if self.description.trim().len() < 10 {
            return Err(ModelError::Validation(
                "description must be at least 10 characters".into(),
            ));
        }
        if !self.anonymous {
            if let Some(email) = self.reporter_email.as_deref() {
                if !email.is_empty() {
                    validate_email(email)?;
                }
            }
        }
        Ok(())
    }
}
