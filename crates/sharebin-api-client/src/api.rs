//! Paste operations on top of [`ApiClient`].
//!
//! Each operation collapses transport and status failures into a single
//! user-facing message: the backend's own `message` when it sent one, a
//! fixed fallback otherwise. Callers never see status codes or reqwest
//! errors, only the message.

use anyhow::Result;

use sharebin_core::{CreatePasteRequest, CreatedPaste, Paste};

use crate::{ApiClient, ApiError, API_PREFIX};

/// Shown when paste creation fails without a backend-provided message.
pub const CREATE_PASTE_FALLBACK: &str = "Failed to create paste. Please try again.";

/// Shown when a paste fetch fails without a backend-provided message.
pub const GET_PASTE_FALLBACK: &str = "Failed to get paste. Please try again.";

impl ApiClient {
    /// Create a paste from `content`, optionally limited by a time-to-live
    /// and a view budget. Surrounding whitespace is not part of the paste.
    pub async fn create_paste(
        &self,
        content: &str,
        ttl_seconds: Option<u64>,
        max_views: Option<u32>,
    ) -> Result<CreatedPaste> {
        let request = CreatePasteRequest {
            content: content.trim().to_string(),
            ttl_seconds,
            max_views,
        };

        self.post_json(&format!("{API_PREFIX}/pastes"), &request)
            .await
            .map_err(|err| user_error(err, CREATE_PASTE_FALLBACK))
    }

    /// Fetch a paste by id. Fetching counts against the paste's view budget
    /// on the backend, so callers fetch at most once per command.
    pub async fn get_paste(&self, id: &str) -> Result<Paste> {
        self.get_json(&format!("{API_PREFIX}/pastes/{id}"))
            .await
            .map_err(|err| user_error(err, GET_PASTE_FALLBACK))
    }
}

/// Collapse an [`ApiError`] into the message shown to the user, logging the
/// full error first. An empty backend message counts as absent.
fn user_error(err: ApiError, fallback: &'static str) -> anyhow::Error {
    tracing::debug!("paste request failed: {err:?}");
    match err {
        ApiError::Status {
            message: Some(message),
            ..
        } if !message.is_empty() => anyhow::Error::msg(message),
        _ => anyhow::Error::msg(fallback),
    }
}
