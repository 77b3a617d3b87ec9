use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::pet::Pet;

use crate::errors::ServiceError;
use crate::latency;

/// Repository abstraction for the pet catalog. The in-memory implementation
/// is the default; a persistent one can share the contract.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Pet>, ServiceError>;
    async fn find_by_id(&self, id: u64) -> Result<Option<Pet>, ServiceError>;
    /// Claim the next identifier. Ids are monotonic and never reused, even
    /// if a caller abandons a claimed id or records are later removed.
    async fn reserve_id(&self) -> Result<u64, ServiceError>;
    async fn insert(&self, pet: Pet) -> Result<(), ServiceError>;
}

/// Process-lifetime catalog backed by a `Vec` behind a lock, with a
/// dedicated id counter.
pub struct InMemoryCatalog {
    pets: RwLock<Vec<Pet>>,
    next_id: AtomicU64,
    delay: Option<Duration>,
}

impl InMemoryCatalog {
    pub fn new(seed: Vec<Pet>) -> Self {
        let next_id = seed.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            pets: RwLock::new(seed),
            next_id: AtomicU64::new(next_id),
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
impl CatalogRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Pet>, ServiceError> {
        latency::simulate(self.delay).await;
        Ok(self.pets.read().await.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Pet>, ServiceError> {
        latency::simulate(self.delay).await;
        Ok(self.pets.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn reserve_id(&self) -> Result<u64, ServiceError> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn insert(&self, pet: Pet) -> Result<(), ServiceError> {
        latency::simulate(self.delay).await;
        self.pets.write().await.push(pet);
        Ok(())
    }
}
