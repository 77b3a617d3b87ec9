//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login, and password recovery live here; the HTTP layer only
//! maps errors to status codes.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;

pub use service::AuthService;
