//! Domain types shared across the workspace.
//! - Plain serde-serializable structs, no storage coupling.
//! - Field validation lives next to the types it checks.

pub mod errors;
pub mod pet;
pub mod report;
pub mod session;
pub mod user;
