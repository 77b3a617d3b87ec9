//! File-backed key-value storage, the server-side analog of the browser's
//! per-origin local storage.

pub mod json_map_store;
pub mod session_store;

pub use json_map_store::JsonMapStore;
pub use session_store::SessionStore;
