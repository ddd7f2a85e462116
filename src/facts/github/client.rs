//! GitHub API client
//!
//! Minimal GitHub API client that classifies every response and tracks
//! rate-limit headroom from response metadata.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// Public endpoint of the GitHub REST API.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
pub struct RateLimitInfo {
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

/// Last-observed rate-limit headroom, for the status endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RateLimitStatus {
    pub remaining: Option<usize>,
    pub reset_at: Option<DateTime<Utc>>,
    pub has_token: bool,
}

/// Result of a GitHub API call
#[derive(Debug)]
pub enum ApiResult<T> {
    /// Request succeeded - contains data and optional rate limit info
    Success(T, Option<RateLimitInfo>),

    /// The quota is exhausted - retry only after the reset instant
    RateLimited(RateLimitInfo),

    /// The requested resource was not found (404)
    NotFound(Option<RateLimitInfo>),

    /// Any other non-success HTTP status
    HttpError(StatusCode, Option<RateLimitInfo>),

    /// Transport-level failure before a status was received
    Failed(ohno::AppError),
}

/// GitHub API client with optional bearer credential.
///
/// The credential only affects the remote source's rate-limit tier, never
/// correctness; all endpoints used here are public.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    has_token: bool,
    rate_limit: Mutex<Option<RateLimitInfo>>,
}

impl Client {
    /// Create a new GitHub API client with optional authentication token and base URL
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> crate::Result<Self> {
        use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};

        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let http = reqwest::Client::builder()
            .user_agent("profile-rank")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            has_token: token.is_some(),
            rate_limit: Mutex::new(None),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Last-observed rate-limit headroom.
    #[must_use]
    pub fn rate_limit_status(&self) -> RateLimitStatus {
        let observed = *self.rate_limit.lock().unwrap_or_else(PoisonError::into_inner);
        RateLimitStatus {
            remaining: observed.map(|rl| rl.remaining),
            reset_at: observed.map(|rl| rl.reset_at),
            has_token: self.has_token,
        }
    }

    /// Make an API call and classify the result
    pub async fn api_call(&self, url: &str) -> ApiResult<reqwest::Response> {
        let resp = match self.http.get(url).send().await {
            Ok(r) => r,
            Err(e) => return ApiResult::Failed(e.into()),
        };

        // Rate-limit metadata is present on successes and failures alike,
        // and must be recorded regardless of status.
        let rate_limit = extract_rate_limit_from_headers(resp.headers());
        if rate_limit.is_some() {
            *self.rate_limit.lock().unwrap_or_else(PoisonError::into_inner) = rate_limit;
        }

        let status = resp.status();
        if status.is_success() {
            return ApiResult::Success(resp, rate_limit);
        }

        // 429 always means throttling; 403 only does when the quota headers
        // confirm exhaustion (other 403s are ordinary HTTP failures).
        let quota_exhausted = rate_limit.is_some_and(|rl| rl.remaining == 0);
        if status == StatusCode::TOO_MANY_REQUESTS || (status == StatusCode::FORBIDDEN && quota_exhausted) {
            let rate_limit = rate_limit.unwrap_or_else(|| RateLimitInfo {
                remaining: 0,
                reset_at: Utc::now() + chrono::Duration::hours(1),
            });
            return ApiResult::RateLimited(rate_limit);
        }

        if status == StatusCode::NOT_FOUND {
            return ApiResult::NotFound(rate_limit);
        }

        ApiResult::HttpError(status, rate_limit)
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}
