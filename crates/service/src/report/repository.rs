use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::report::Report;

use crate::errors::ServiceError;
use crate::latency;

/// Repository abstraction for report storage.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// All records in creation order.
    async fn list(&self) -> Result<Vec<Report>, ServiceError>;
    async fn insert(&self, report: Report) -> Result<(), ServiceError>;
    /// Claim the next protocol sequence number. Monotonic; decoupled from
    /// the store's current size so deleting records can never produce a
    /// duplicate protocol.
    async fn next_sequence(&self) -> Result<u64, ServiceError>;
}

/// Process-lifetime report store backed by a `Vec` plus a dedicated
/// sequence counter.
pub struct InMemoryReports {
    reports: RwLock<Vec<Report>>,
    sequence: AtomicU64,
    delay: Option<Duration>,
}

impl InMemoryReports {
    pub fn new(seed: Vec<Report>) -> Self {
        let sequence = seed.len() as u64 + 1;
        Self {
            reports: RwLock::new(seed),
            sequence: AtomicU64::new(sequence),
            delay: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Simulate upstream latency on every operation.
    pub fn with_latency(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ReportRepository for InMemoryReports {
    async fn list(&self) -> Result<Vec<Report>, ServiceError> {
        latency::simulate(self.delay).await;
        Ok(self.reports.read().await.clone())
    }

    async fn insert(&self, report: Report) -> Result<(), ServiceError> {
        latency::simulate(self.delay).await;
        self.reports.write().await.push(report);
        Ok(())
    }

    async fn next_sequence(&self) -> Result<u64, ServiceError> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst))
    }
}
