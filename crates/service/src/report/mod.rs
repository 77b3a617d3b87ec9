//! Report module: repository + service for animal-welfare complaints.

pub mod repository;
pub mod seed;
pub mod service;

pub use repository::{InMemoryReports, ReportRepository};
pub use service::{ReportFilter, ReportService};
