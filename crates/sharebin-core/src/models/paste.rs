use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request DTO for creating a paste.
///
/// The optional limits are omitted from the JSON body entirely when unset so
/// the backend applies its own defaults instead of seeing explicit nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePasteRequest {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_views: Option<u32>,
}

/// Creation response: the server-assigned identifier and the fully-qualified
/// shareable address of the new paste.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPaste {
    pub id: String,
    pub url: String,
}

/// A paste as returned by the read endpoint.
///
/// `remaining_views: None` means the paste is unbounded; `expires_at: None`
/// means it never expires. Both limits are enforced server-side; the client
/// displays them and nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paste {
    pub content: String,
    #[serde(default)]
    pub remaining_views: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Error shape the backend may attach to a non-success response.
///
/// `message` is optional by contract, so its absence is part of the model
/// rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
