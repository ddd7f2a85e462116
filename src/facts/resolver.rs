//! Identity resolution: free-form query to canonical account handle.
//!
//! A query may be a raw handle, a profile URL, or an email address. URLs
//! yield their first path segment; anything containing `@` is treated as an
//! email-search attempt, so a handle-like string with `@` always goes
//! through search. Bare handles are returned as-is and validated later by
//! the account lookup.

use super::FetchError;
use super::github::Provider;
use regex::Regex;
use std::sync::LazyLock;

/// Pattern for a profile URL: optional scheme and `www.`, the source's web
/// domain, then the handle as the first path segment.
static PROFILE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9-]+)").expect("invalid regex"));

/// Resolve a free-form query into a canonical handle.
pub async fn resolve(provider: &Provider, query: &str) -> Result<String, FetchError> {
    let candidate = extract_handle(query);

    if candidate.contains('@') {
        return match provider.search_by_email(&candidate).await? {
            Some(login) => Ok(login),
            None => Err(FetchError::NotFound(format!("No GitHub user found with email: {candidate}"))),
        };
    }

    Ok(candidate)
}

/// Extract the handle candidate from a query without touching the network.
fn extract_handle(query: &str) -> String {
    let query = query.trim();

    if let Some(captures) = PROFILE_URL_REGEX.captures(query) {
        return captures[1].to_string();
    }

    query.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_handle_is_returned_unchanged() {
        assert_eq!(extract_handle("torvalds"), "torvalds");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(extract_handle("  torvalds\n"), "torvalds");
    }

    #[test]
    fn https_profile_url() {
        assert_eq!(extract_handle("https://github.com/torvalds"), "torvalds");
    }

    #[test]
    fn http_profile_url() {
        assert_eq!(extract_handle("http://github.com/octocat"), "octocat");
    }

    #[test]
    fn schemeless_profile_url() {
        assert_eq!(extract_handle("github.com/octocat"), "octocat");
    }

    #[test]
    fn www_profile_url() {
        assert_eq!(extract_handle("https://www.github.com/rust-lang"), "rust-lang");
    }

    #[test]
    fn url_with_trailing_path_keeps_first_segment() {
        assert_eq!(extract_handle("https://github.com/torvalds/linux"), "torvalds");
    }

    #[test]
    fn email_is_left_for_the_search_branch() {
        assert_eq!(extract_handle("foo@example.com"), "foo@example.com");
        assert!(extract_handle("foo@example.com").contains('@'));
    }

    #[test]
    fn at_sign_without_domain_is_still_an_email_attempt() {
        assert!(extract_handle("weird@handle").contains('@'));
    }
}
