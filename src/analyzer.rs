//! The inbound surface: one query in, one analysis out.

use crate::analysis::{self, ProfileAnalysis};
use crate::facts::github::{CachedValue, GITHUB_API_BASE_URL, RateLimitStatus};
use crate::facts::{CacheStats, Collector, FetchError, MemoryCache, resolve};
use chrono::Utc;

const LOG_TARGET: &str = "  analyzer";

/// Resolves a query, aggregates the raw dataset, and derives the analysis.
///
/// Holds the process-lifetime cache; construct once and reuse across
/// queries so repeated analyses stay within the cache TTL.
#[derive(Debug)]
pub struct ProfileAnalyzer {
    collector: Collector,
}

impl ProfileAnalyzer {
    /// Create an analyzer against the public GitHub API.
    pub fn new(token: Option<&str>, cache: MemoryCache<CachedValue>) -> crate::Result<Self> {
        Self::with_base_url(token, GITHUB_API_BASE_URL, cache)
    }

    /// Create an analyzer against a specific API endpoint.
    pub fn with_base_url(token: Option<&str>, base_url: impl Into<String>, cache: MemoryCache<CachedValue>) -> crate::Result<Self> {
        Ok(Self {
            collector: Collector::new(token, base_url, cache)?,
        })
    }

    /// Analyze a free-form query (handle, profile URL, or email address).
    pub async fn analyze(&self, query: &str) -> Result<ProfileAnalysis, FetchError> {
        let login = resolve(self.collector.provider(), query).await?;
        log::info!(target: LOG_TARGET, "Analyzing profile '{login}'");

        let facts = self.collector.collect(&login).await?;
        Ok(analysis::analyze(&facts, Utc::now()))
    }

    /// Last-observed rate-limit headroom.
    #[must_use]
    pub fn rate_limit_status(&self) -> RateLimitStatus {
        self.collector.provider().rate_limit_status()
    }

    /// Current cache counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.collector.provider().cache().stats()
    }

    /// Drop all cached entries.
    pub fn clear_cache(&self) {
        self.collector.provider().cache().clear();
    }
}
