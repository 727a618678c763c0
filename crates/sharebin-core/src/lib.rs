//! Sharebin core library
//!
//! Wire-level data models shared by the API client and the CLI front-end.
//! Nothing here is persisted or cached; every value lives only for the
//! duration of a single request/response exchange. All paste invariants
//! (expiry, view accounting, identifier assignment) are owned by the backend.

pub mod models;

// Re-export commonly used types
pub use models::{CreatePasteRequest, CreatedPaste, ErrorBody, Paste};
