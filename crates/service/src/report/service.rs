use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use models::report::{Report, ReportDraft, STATUS_RECEIVED};

use crate::errors::ServiceError;
use crate::report::repository::ReportRepository;

/// Optional, conjunctive filters for report search.
#[derive(Clone, Debug, Default)]
pub struct ReportFilter {
    /// Case-insensitive protocol substring.
    pub protocol: Option<String>,
    /// Case-insensitive exact type match; blank is ignored.
    pub report_type: Option<String>,
}

/// Report business service: submission, protocol lookup, and listing.
pub struct ReportService<R: ReportRepository> {
    repo: Arc<R>,
}

impl<R: ReportRepository> ReportService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Submit a report; returns the assigned protocol.
    ///
    /// Validation failures surface before any store mutation. An anonymous
    /// submission drops the reporter email.
    #[instrument(skip(self, draft), fields(report_type = %draft.report_type))]
    pub async fn create(&self, draft: ReportDraft) -> Result<String, ServiceError> {
        draft.validate()?;
        let sequence = self.repo.next_sequence().await?;
        let protocol = format!("RPT-{sequence:04}");
        let report = Report {
            protocol: protocol.clone(),
            report_type: draft.report_type,
            location: draft.location,
            description: draft.description,
            evidence: draft.evidence,
            created_at: Utc::now(),
            status: STATUS_RECEIVED.to_string(),
            reporter_email: if draft.anonymous { None } else { draft.reporter_email },
            anonymous: draft.anonymous,
        };
        self.repo.insert(report).await?;
        info!(%protocol, "report_created");
        Ok(protocol)
    }

    /// Trimmed, case-insensitive exact protocol match.
    pub async fn find_by_protocol(&self, protocol: &str) -> Result<Option<Report>, ServiceError> {
        let needle = protocol.trim().to_lowercase();
        let reports = self.repo.list().await?;
        Ok(reports.into_iter().find(|r| r.protocol.to_lowercase() == needle))
    }

    /// All reports, most recently created first.
    pub async fn list_all(&self) -> Result<Vec<Report>, ServiceError> {
        let mut reports = self.repo.list().await?;
        reports.reverse();
        Ok(reports)
    }

    /// Filtered search, most recently created first.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: ReportFilter) -> Result<Vec<Report>, ServiceError> {
        let mut results = self.repo.list().await?;
        if let Some(protocol) = filter.protocol.as_deref() {
            let q = protocol.trim().to_lowercase();
            if !q.is_empty() {
                results.retain(|r| r.protocol.to_lowercase().contains(&q));
            }
        }
        if let Some(report_type) = filter.report_type.as_deref() {
            let t = report_type.trim().to_lowercase();
            if !t.is_empty() {
                results.retain(|r| r.report_type.to_lowercase() == t);
            }
        }
        results.reverse();
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::repository::InMemoryReports;
    use crate::report::seed;

    fn svc() -> ReportService<InMemoryReports> {
        ReportService::new(Arc::new(InMemoryReports::new(seed::reports())))
    }

    fn draft() -> ReportDraft {
        ReportDraft {
            report_type: "Neglect".into(),
            location: "Avenida Central, 45".into(),
            description: "Dog kept on a short chain all day.".into(),
            evidence: vec!["img.jpg".into()],
            reporter_email: Some("witness@example.com".into()),
            anonymous: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_protocol() {
        let svc = svc();
        let protocol = svc.create(draft()).await.unwrap();
        assert_eq!(protocol, "RPT-0003");
        let again = svc.create(draft()).await.unwrap();
        assert_eq!(again, "RPT-0004");
    }

    #[tokio::test]
    async fn create_stamps_status_and_timestamp() {
        let svc = svc();
        let protocol = svc.create(draft()).await.unwrap();
        let report = svc.find_by_protocol(&protocol).await.unwrap().unwrap();
        assert_eq!(report.status, STATUS_RECEIVED);
        assert!(report.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn validation_failure_leaves_store_untouched() {
        let svc = svc();
        let mut bad = draft();
        bad.location = "ab".into();
        assert!(matches!(
            svc.create(bad).await,
            Err(ServiceError::Model(models::errors::ModelError::Validation(_)))
        ));
        assert_eq!(svc.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn anonymous_submission_drops_email() {
        let svc = svc();
        let mut d = draft();
        d.anonymous = true;
        let protocol = svc.create(d).await.unwrap();
        let report = svc.find_by_protocol(&protocol).await.unwrap().unwrap();
        assert!(report.reporter_email.is_none());
        assert!(report.anonymous);
    }

    #[tokio::test]
    async fn lookup_ignores_case_and_whitespace() {
        let svc = svc();
        let protocol = svc.create(draft()).await.unwrap();
        let found = svc.find_by_protocol("  rpt-0003  ").await.unwrap().unwrap();
        assert_eq!(found.protocol, protocol);
        assert!(svc.find_by_protocol("RPT-9999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_all_is_most_recent_first() {
        let svc = svc();
        svc.create(draft()).await.unwrap();
        let all = svc.list_all().await.unwrap();
        let protocols: Vec<_> = all.iter().map(|r| r.protocol.as_str()).collect();
        assert_eq!(protocols, vec!["RPT-0003", "RPT-0002", "RPT-0001"]);
    }

    #[tokio::test]
    async fn search_filters_are_conjunctive() {
        let svc = svc();
        svc.create(draft()).await.unwrap();

        let by_protocol = svc
            .search(ReportFilter { protocol: Some("0001".into()), report_type: None })
            .await
            .unwrap();
        assert_eq!(by_protocol.len(), 1);
        assert_eq!(by_protocol[0].protocol, "RPT-0001");

        let by_type = svc
            .search(ReportFilter { protocol: None, report_type: Some("  neglect ".into()) })
            .await
            .unwrap();
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].protocol, "RPT-0003");

        let both = svc
            .search(ReportFilter {
                protocol: Some("rpt".into()),
                report_type: Some("Abuse".into()),
            })
            .await
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].protocol, "RPT-0001");

        // Blank type filter is ignored, not matched literally.
        let blank = svc
            .search(ReportFilter { protocol: None, report_type: Some("   ".into()) })
            .await
            .unwrap();
        assert_eq!(blank.len(), 3);
    }
}
