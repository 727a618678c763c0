//! Paste target resolution.
//!
//! The show command accepts either a bare paste id or the full share link
//! the service hands out. Share links carry the id as a `/p/{id}` path, so
//! both forms resolve to the same identifier.

use anyhow::{bail, Context, Result};
use reqwest::Url;

/// Resolve a user-supplied target to a paste id. Rejects empty targets and
/// links that do not follow the `/p/{id}` shape before any request is made.
pub fn resolve_paste_id(target: &str) -> Result<String> {
    let target = target.trim();
    if target.is_empty() {
        bail!("Paste id cannot be empty");
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        return id_from_share_link(target);
    }

    Ok(target.to_string())
}

fn id_from_share_link(link: &str) -> Result<String> {
    let url = Url::parse(link).with_context(|| format!("Invalid share link '{link}'"))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        ["p", id] => Ok((*id).to_string()),
        _ => bail!("Unrecognized share link '{link}': expected a /p/<paste-id> path"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(resolve_paste_id("abc123").unwrap(), "abc123");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(resolve_paste_id("  abc123\n").unwrap(), "abc123");
    }

    #[test]
    fn share_link_and_bare_id_resolve_to_the_same_paste() {
        let from_link = resolve_paste_id("https://paste.example/p/abc123").unwrap();
        let from_id = resolve_paste_id("abc123").unwrap();
        assert_eq!(from_link, from_id);
    }

    #[test]
    fn http_share_link_is_accepted() {
        assert_eq!(
            resolve_paste_id("http://localhost:8080/p/xyz").unwrap(),
            "xyz"
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(
            resolve_paste_id("https://paste.example/p/abc123/").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn empty_target_is_rejected() {
        assert!(resolve_paste_id("").is_err());
        assert!(resolve_paste_id("   ").is_err());
    }

    #[test]
    fn link_without_the_paste_route_is_rejected() {
        assert!(resolve_paste_id("https://paste.example/").is_err());
        assert!(resolve_paste_id("https://paste.example/q/abc").is_err());
        assert!(resolve_paste_id("https://paste.example/p").is_err());
        assert!(resolve_paste_id("https://paste.example/p/abc/extra").is_err());
    }

    #[test]
    fn unparseable_link_is_rejected() {
        assert!(resolve_paste_id("http://").is_err());
    }
}
