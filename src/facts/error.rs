//! Error taxonomy for remote data acquisition.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::github::RateLimitInfo;

/// What went wrong while fetching remote data.
///
/// The three classes are deliberately distinguishable so callers can map
/// them to different responses: a missing identity, a throttled request
/// with retry-after information, or a generic failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The identity does not exist, or an email search matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// The remote source rejected the request because the quota is exhausted.
    #[error("{}", rate_limit_message(.retry_after_secs))]
    RateLimited {
        /// Seconds until the quota resets, when the reset instant is known.
        retry_after_secs: Option<u64>,
    },

    /// Any other transport or HTTP failure.
    #[error("{0}")]
    Failed(ohno::AppError),
}

impl From<ohno::AppError> for FetchError {
    fn from(err: ohno::AppError) -> Self {
        Self::Failed(err)
    }
}

impl FetchError {
    /// Build a `RateLimited` error from response metadata, computing the
    /// seconds remaining until the advertised reset instant.
    #[must_use]
    pub fn rate_limited(info: &RateLimitInfo, now: DateTime<Utc>) -> Self {
        let retry_after_secs = u64::try_from((info.reset_at - now).num_seconds()).ok();
        Self::RateLimited { retry_after_secs }
    }

    /// Returns `true` for the not-found class.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn rate_limit_message(retry_after_secs: &Option<u64>) -> String {
    match retry_after_secs {
        Some(secs) => format!("GitHub API rate limit exceeded, resets in {secs} seconds"),
        None => "GitHub API rate limit exceeded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn rate_limited_computes_retry_after() {
        let now = Utc::now();
        let info = RateLimitInfo {
            remaining: 0,
            reset_at: now + TimeDelta::seconds(120),
        };

        match FetchError::rate_limited(&info, now) {
            FetchError::RateLimited { retry_after_secs } => assert_eq!(retry_after_secs, Some(120)),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn rate_limited_with_past_reset_has_no_retry_after() {
        let now = Utc::now();
        let info = RateLimitInfo {
            remaining: 0,
            reset_at: now - TimeDelta::seconds(5),
        };

        match FetchError::rate_limited(&info, now) {
            FetchError::RateLimited { retry_after_secs } => assert_eq!(retry_after_secs, None),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn display_messages() {
        let err = FetchError::NotFound("GitHub user 'nobody' not found".to_string());
        assert_eq!(err.to_string(), "GitHub user 'nobody' not found");

        let err = FetchError::RateLimited { retry_after_secs: Some(30) };
        assert!(err.to_string().contains("resets in 30 seconds"));

        let err = FetchError::RateLimited { retry_after_secs: None };
        assert_eq!(err.to_string(), "GitHub API rate limit exceeded");
    }

    #[test]
    fn classes_are_distinguishable() {
        let not_found = FetchError::NotFound("x".to_string());
        let limited = FetchError::RateLimited { retry_after_secs: None };

        assert!(not_found.is_not_found());
        assert!(!limited.is_not_found());
    }
}
