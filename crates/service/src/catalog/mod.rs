//! Catalog module: repository + service for adoptable animals.

pub mod repository;
pub mod seed;
pub mod service;

pub use repository::{CatalogRepository, InMemoryCatalog};
pub use service::{CatalogService, RegistrationDefaults};
