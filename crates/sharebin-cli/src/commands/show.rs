//! Show flow: fetch a paste once and classify the result.

use anyhow::{Context, Result};

use sharebin_api_client::ApiClient;
use sharebin_core::Paste;

use crate::platform::Platform;

/// Shown for every failed fetch. Expired, deleted, never-existed, and
/// unreachable-backend all read the same from the outside.
pub const NOT_FOUND_MESSAGE: &str = "This paste has expired or does not exist.";

/// What a show invocation produced.
#[derive(Debug)]
pub enum ShowOutcome {
    Loaded(Paste),
    /// Terminal state; the cause only goes to the debug log.
    NotFound,
}

/// Fetch the paste exactly once. Fetching counts against the paste's view
/// budget, so there is no retry and no second look.
pub async fn run(client: &ApiClient, id: &str) -> ShowOutcome {
    match client.get_paste(id).await {
        Ok(paste) => ShowOutcome::Loaded(paste),
        Err(err) => {
            tracing::debug!("fetch of paste {id} failed: {err:#}");
            ShowOutcome::NotFound
        }
    }
}

/// Apply the copy affordance to a fetched paste. Returns the acknowledgment
/// lines to render.
pub fn copy_actions(platform: &dyn Platform, content: &str, copy: bool) -> Result<Vec<String>> {
    let mut acks = Vec::new();

    if copy {
        platform
            .copy_to_clipboard(content)
            .context("Failed to copy the paste content")?;
        acks.push("Copied to clipboard".to_string());
    }

    Ok(acks)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::platform::test_support::{FailingPlatform, RecordingPlatform};

    #[tokio::test]
    async fn a_paste_is_fetched_exactly_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/pastes/abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content":"hello","remaining_views":3,"expires_at":null}"#)
            .expect(1)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let outcome = run(&client, "abc").await;

        match outcome {
            ShowOutcome::Loaded(paste) => {
                assert_eq!(paste.content, "hello");
                assert_eq!(paste.remaining_views, Some(3));
                assert_eq!(paste.expires_at, None);
            }
            other => panic!("expected a loaded paste, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn a_missing_paste_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/pastes/gone")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"no such paste"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        assert!(matches!(run(&client, "gone").await, ShowOutcome::NotFound));
    }

    #[tokio::test]
    async fn a_server_error_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/pastes/abc")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        assert!(matches!(run(&client, "abc").await, ShowOutcome::NotFound));
    }

    #[tokio::test]
    async fn an_unreachable_backend_is_not_found() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        assert!(matches!(run(&client, "abc").await, ShowOutcome::NotFound));
    }

    #[test]
    fn copy_receives_exactly_the_paste_content() {
        let platform = RecordingPlatform::default();
        let acks = copy_actions(&platform, "fn main() {}\n", true).unwrap();

        assert_eq!(
            platform.copied.lock().unwrap().as_slice(),
            ["fn main() {}\n"]
        );
        assert_eq!(acks, ["Copied to clipboard"]);
    }

    #[test]
    fn no_copy_flag_means_no_clipboard_call() {
        let platform = RecordingPlatform::default();
        let acks = copy_actions(&platform, "hello", false).unwrap();

        assert!(acks.is_empty());
        assert!(platform.copied.lock().unwrap().is_empty());
    }

    #[test]
    fn clipboard_failures_surface_with_context() {
        let err = copy_actions(&FailingPlatform, "hello", true).unwrap_err();

        assert!(err.to_string().contains("Failed to copy the paste content"));
    }
}
