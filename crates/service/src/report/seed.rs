//! Demo report contents for a fresh process.

use chrono::Utc;
use models::report::{Report, STATUS_RECEIVED};

/// Two demo reports so protocol lookup can be exercised out of the box.
pub fn reports() -> Vec<Report> {
    vec![
        Report {
            protocol: "RPT-0001".to_string(),
            report_type: "Abuse".to_string(),
            location: "Rua das Flores, 123, Centro".to_string(),
            description: "Animal chained without water or food for several days.".to_string(),
            evidence: vec!["photo1.jpg".to_string()],
            created_at: Utc::now(),
            status: "Under investigation".to_string(),
            reporter_email: Some("tutor1@example.com".to_string()),
            anonymous: false,
        },
        Report {
            protocol: "RPT-0002".to_string(),
            report_type: "Abandonment".to_string(),
            location: "Parque da Lagoa, bus stop".to_string(),
            description: "Elderly dog left near the lake. No sign of an owner.".to_string(),
            evidence: vec![],
            created_at: Utc::now(),
            status: STATUS_RECEIVED.to_string(),
            reporter_email: None,
            anonymous: true,
        },
    ]
}
