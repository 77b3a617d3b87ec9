//! Service layer providing business operations on top of `models`.
//! - Each store sits behind a repository trait; the in-memory
//!   implementations keep data for the process lifetime only.
//! - Services own validation and sequencing; repositories own the data.

pub mod auth;
pub mod catalog;
pub mod errors;
mod latency;
pub mod pagination;
pub mod report;
pub mod storage;
