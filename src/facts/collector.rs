//! Builds the full raw dataset for one account.
//!
//! Account, repositories, organizations, and the event feed are fetched
//! sequentially (each has its own cache line); per-repository language maps
//! are then fetched as one concurrent batch. Only the language batch
//! tolerates partial failure — everything else propagates.

use super::FetchError;
use super::github::{CachedValue, Event, LanguageByteMap, Provider};
use super::github::{Account, Repository};
use crate::facts::cache::MemoryCache;
use std::collections::BTreeMap;

const LOG_TARGET: &str = " collector";

/// How many repositories get a language lookup.
const LANGUAGE_FETCH_LIMIT: usize = 20;

/// Activity counters derived from the (sampled) event feed.
#[derive(Debug, Clone, Default)]
pub struct EventStats {
    pub push_events: usize,
    pub pull_request_events: usize,
    pub issue_events: usize,
    /// Hour of day of each push event, in feed order.
    pub commit_hours: Vec<u32>,
    /// Weekday name of each push event, in feed order.
    pub commit_days: Vec<String>,
}

/// The raw dataset an analysis run is computed from.
#[derive(Debug, Clone)]
pub struct ProfileFacts {
    pub account: Account,
    pub repos: Vec<Repository>,
    pub repo_languages: BTreeMap<String, LanguageByteMap>,
    pub event_stats: EventStats,
    pub orgs: Vec<String>,
}

/// Sequences the remote calls needed to build one profile's dataset.
#[derive(Debug)]
pub struct Collector {
    provider: Provider,
}

impl Collector {
    /// Create a collector with an explicitly constructed cache.
    pub fn new(token: Option<&str>, base_url: impl Into<String>, cache: MemoryCache<CachedValue>) -> crate::Result<Self> {
        Ok(Self {
            provider: Provider::new(token, base_url, cache)?,
        })
    }

    /// The underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Fetch everything needed to analyze `login`.
    pub async fn collect(&self, login: &str) -> Result<ProfileFacts, FetchError> {
        let account = self.provider.get_account(login).await?;
        let repos = self.provider.get_repositories(login).await?;
        let orgs = self.provider.get_organizations(login).await?;
        let events = self.provider.get_events(login).await?;

        let repo_names: Vec<String> = repos.iter().take(LANGUAGE_FETCH_LIMIT).map(|repo| repo.name.clone()).collect();
        let repo_languages = self.provider.get_multiple_repo_languages(login, &repo_names).await;

        log::debug!(
            target: LOG_TARGET,
            "Collected dataset for '{login}': {} repos, {} language maps, {} events, {} orgs",
            repos.len(),
            repo_languages.len(),
            events.len(),
            orgs.len()
        );

        Ok(ProfileFacts {
            account,
            repos,
            repo_languages,
            event_stats: event_stats(&events),
            orgs,
        })
    }
}

/// Derive activity counters from the raw event feed.
#[must_use]
pub fn event_stats(events: &[Event]) -> EventStats {
    use chrono::Timelike;

    let mut stats = EventStats::default();

    for event in events {
        match event.event_type.as_str() {
            "PushEvent" => {
                stats.push_events += 1;
                stats.commit_hours.push(event.created_at.hour());
                stats.commit_days.push(event.created_at.format("%A").to_string());
            }
            "PullRequestEvent" => stats.pull_request_events += 1,
            "IssuesEvent" => stats.issue_events += 1,
            _ => {}
        }
    }

    stats
}
