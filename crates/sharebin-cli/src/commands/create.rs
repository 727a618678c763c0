//! Create flow: validate the content locally, submit it once, and hand the
//! share link back for rendering.

use anyhow::{Context, Result};

use sharebin_api_client::ApiClient;
use sharebin_core::CreatedPaste;

use crate::platform::Platform;

/// Rejection for empty or whitespace-only content. Checked before any
/// request is made.
pub const EMPTY_CONTENT_ERROR: &str = "Content cannot be empty";

/// What a create invocation produced.
#[derive(Debug)]
pub enum CreateOutcome {
    /// Rejected locally; no request was made.
    Invalid { reason: &'static str },
    Created(CreatedPaste),
    /// The submission failed; `message` is ready to show as-is.
    Failed { message: String },
}

/// Submit `content` as a new paste. One submission per call, awaited to
/// completion, so a second create can never race this one.
pub async fn run(
    client: &ApiClient,
    content: &str,
    ttl_seconds: Option<u64>,
    max_views: Option<u32>,
) -> CreateOutcome {
    if content.trim().is_empty() {
        return CreateOutcome::Invalid {
            reason: EMPTY_CONTENT_ERROR,
        };
    }

    match client.create_paste(content, ttl_seconds, max_views).await {
        Ok(created) => CreateOutcome::Created(created),
        Err(err) => CreateOutcome::Failed {
            message: err.to_string(),
        },
    }
}

/// Apply the share affordances to a freshly created paste. Returns the
/// acknowledgment lines to render, in the order the actions ran.
pub fn share_actions(
    platform: &dyn Platform,
    url: &str,
    copy: bool,
    open: bool,
) -> Result<Vec<String>> {
    let mut acks = Vec::new();

    if copy {
        platform
            .copy_to_clipboard(url)
            .context("Failed to copy the share link")?;
        acks.push("Copied to clipboard".to_string());
    }

    if open {
        platform
            .open_url(url)
            .context("Failed to open the share link")?;
        acks.push("Opened in browser".to_string());
    }

    Ok(acks)
}
