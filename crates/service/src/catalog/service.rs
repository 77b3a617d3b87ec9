use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{info, instrument};

use models::pet::{Pet, PetDraft};

use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;

/// Empty-query searches return at most this many records.
const BROWSE_LIMIT: usize = 6;

/// Values stamped onto registrations in place of the fields the form does
/// not collect.
#[derive(Clone, Debug)]
pub struct RegistrationDefaults {
    pub location: String,
    pub image: String,
    pub shelter: String,
}

impl Default for RegistrationDefaults {
    fn default() -> Self {
        Self {
            location: "São Paulo/SP".to_string(),
            image: "/assets/new_pet_placeholder.jpg".to_string(),
            shelter: "ONG Mock de Teste".to_string(),
        }
    }
}

/// Catalog business service: text search with starts-with ranking, id
/// lookup, and registration.
pub struct CatalogService<R: CatalogRepository> {
    repo: Arc<R>,
    defaults: RegistrationDefaults,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>, defaults: RegistrationDefaults) -> Self {
        Self { repo, defaults }
    }

    /// Free-text search over name and species.
    ///
    /// An empty or whitespace-only query browses the first few records in
    /// catalog order. A non-empty query matches records whose name or
    /// species contains it case-insensitively, ranked so that prefix matches
    /// come before mere substring matches; ties order by name.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Pet>, ServiceError> {
        let q = query.trim().to_lowercase();
        let pets = self.repo.list().await?;
        if q.is_empty() {
            return Ok(pets.into_iter().take(BROWSE_LIMIT).collect());
        }

        let mut results: Vec<Pet> = pets
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&q)
                    || p.species.as_str().to_lowercase().contains(&q)
            })
            .collect();

        results.sort_by(|a, b| {
            let a_name = a.name.to_lowercase();
            let b_name = b.name.to_lowercase();
            let a_starts = a_name.starts_with(&q)
                || a.species.as_str().to_lowercase().starts_with(&q);
            let b_starts = b_name.starts_with(&q)
                || b.species.as_str().to_lowercase().starts_with(&q);
            match (a_starts, b_starts) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => a_name.cmp(&b_name),
            }
        });

        Ok(results)
    }

    pub async fn get(&self, id: u64) -> Result<Option<Pet>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Register a new animal; returns its assigned id.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn register(&self, draft: PetDraft) -> Result<u64, ServiceError> {
        draft.validate()?;
        let id = self.repo.reserve_id().await?;
        let pet = Pet {
            id,
            name: draft.name,
            species: draft.species,
            age: draft.age,
            gender: draft.gender,
            size: draft.size,
            location: self.defaults.location.clone(),
            description: draft.description,
            image: self.defaults.image.clone(),
            adopted: false,
            shelter: self.defaults.shelter.clone(),
        };
        self.repo.insert(pet).await?;
        info!(pet_id = id, "pet_registered");
        Ok(id)
    }
}
