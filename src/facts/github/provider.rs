//! Cached operations against the GitHub API.
//!
//! Every operation checks the shared cache first, keyed by operation name
//! plus its arguments, and records what it fetched (including negative
//! results) so repeated analyses within the TTL issue no remote calls.

use super::client::{ApiResult, Client, RateLimitStatus};
use super::models::{Account, Event, LanguageByteMap, Organization, Repository, UserSearchResults};
use crate::facts::FetchError;
use crate::facts::cache::{MemoryCache, cache_key};
use chrono::Utc;
use core::time::Duration;
use futures_util::future::join_all;
use ohno::IntoAppError;
use std::collections::BTreeMap;
use url::Url;

const LOG_TARGET: &str = "    github";

const REPO_PAGE_SIZE: u32 = 100;
const MAX_REPO_PAGES: u32 = 5;
const EVENT_PAGE_SIZE: u32 = 100;
const MAX_EVENT_PAGES: u32 = 3;

/// Activity pages go stale quickly, so they get a shorter TTL than the rest.
const EVENTS_CACHE_TTL: Duration = Duration::from_secs(1800);

/// One cached value, tagged by the operation that produced it.
///
/// `EmailMatch(None)`, an empty language map, and an empty organization
/// list are all cacheable negatives.
#[derive(Debug, Clone)]
pub enum CachedValue {
    Account(Account),
    Repositories(Vec<Repository>),
    Languages(LanguageByteMap),
    Events(Vec<Event>),
    Organizations(Vec<String>),
    EmailMatch(Option<String>),
}

/// Unwrap an `ApiResult` into its payload or convert the failure into the
/// matching `FetchError` class.
macro_rules! unwrap_api {
    ($expr:expr, $not_found:expr) => {
        match $expr {
            ApiResult::Success(data, _) => data,
            ApiResult::RateLimited(info) => return Err(FetchError::rate_limited(&info, Utc::now())),
            ApiResult::NotFound(_) => return Err(FetchError::NotFound($not_found)),
            ApiResult::HttpError(status, _) => {
                return Err(ohno::app_err!("GitHub API returned HTTP {status}").into());
            }
            ApiResult::Failed(e) => return Err(FetchError::Failed(e)),
        }
    };
}

/// All interaction with the GitHub API, behind the shared TTL cache.
#[derive(Debug)]
pub struct Provider {
    client: Client,
    cache: MemoryCache<CachedValue>,
}

impl Provider {
    /// Create a new provider over an explicitly constructed cache.
    pub fn new(token: Option<&str>, base_url: impl Into<String>, cache: MemoryCache<CachedValue>) -> crate::Result<Self> {
        Ok(Self {
            client: Client::new(token, base_url)?,
            cache,
        })
    }

    /// Last-observed rate-limit headroom.
    #[must_use]
    pub fn rate_limit_status(&self) -> RateLimitStatus {
        self.client.rate_limit_status()
    }

    /// The cache backing this provider.
    #[must_use]
    pub const fn cache(&self) -> &MemoryCache<CachedValue> {
        &self.cache
    }

    /// Fetch a single account profile.
    pub async fn get_account(&self, login: &str) -> Result<Account, FetchError> {
        let key = cache_key("account", &[login]);
        if let Some(CachedValue::Account(account)) = self.cache.get(&key) {
            return Ok(account);
        }

        log::info!(target: LOG_TARGET, "Querying GitHub for account '{login}'");
        let url = format!("{}/users/{login}", self.client.base_url());
        let resp = unwrap_api!(self.client.api_call(&url).await, format!("GitHub user '{login}' not found"));
        let account: Account = resp.json().await.map_err(ohno::AppError::from)?;

        self.cache.set(key, CachedValue::Account(account.clone()), None);
        Ok(account)
    }

    /// Fetch all owned repositories, most recently updated first.
    ///
    /// Pages are concatenated in source order until an empty page or the
    /// page cap is reached.
    pub async fn get_repositories(&self, login: &str) -> Result<Vec<Repository>, FetchError> {
        let key = cache_key("repos", &[login]);
        if let Some(CachedValue::Repositories(repos)) = self.cache.get(&key) {
            return Ok(repos);
        }

        log::info!(target: LOG_TARGET, "Querying GitHub for repositories of '{login}'");
        let mut repos = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!(
                "{}/users/{login}/repos?per_page={REPO_PAGE_SIZE}&page={page}&sort=updated&type=owner",
                self.client.base_url()
            );
            let resp = unwrap_api!(self.client.api_call(&url).await, format!("GitHub user '{login}' not found"));
            let batch: Vec<Repository> = resp.json().await.map_err(ohno::AppError::from)?;

            if batch.is_empty() {
                break;
            }
            repos.extend(batch);
            page += 1;

            if page > MAX_REPO_PAGES {
                log::debug!(target: LOG_TARGET, "Reached repository page cap ({MAX_REPO_PAGES}) for '{login}', stopping after {} repos", repos.len());
                break;
            }
        }

        self.cache.set(key, CachedValue::Repositories(repos.clone()), None);
        Ok(repos)
    }

    /// Fetch the language byte distribution of one repository.
    ///
    /// Languages are best-effort: any non-success status degrades to an
    /// empty (cached) map. Throttling and transport failures stay errors so
    /// the fan-out can drop just the affected lookup.
    pub async fn get_repo_languages(&self, login: &str, repo: &str) -> Result<LanguageByteMap, FetchError> {
        let key = cache_key("languages", &[login, repo]);
        if let Some(CachedValue::Languages(map)) = self.cache.get(&key) {
            return Ok(map);
        }

        let url = format!("{}/repos/{login}/{repo}/languages", self.client.base_url());
        match self.client.api_call(&url).await {
            ApiResult::Success(resp, _) => {
                let map: LanguageByteMap = resp.json().await.map_err(ohno::AppError::from)?;
                self.cache.set(key, CachedValue::Languages(map.clone()), None);
                Ok(map)
            }
            ApiResult::RateLimited(info) => Err(FetchError::rate_limited(&info, Utc::now())),
            ApiResult::NotFound(_) | ApiResult::HttpError(..) => {
                log::debug!(target: LOG_TARGET, "No language data for '{login}/{repo}'");
                self.cache.set(key, CachedValue::Languages(LanguageByteMap::new()), None);
                Ok(LanguageByteMap::new())
            }
            ApiResult::Failed(e) => Err(FetchError::Failed(e)),
        }
    }

    /// Fetch language maps for many repositories concurrently.
    ///
    /// Each lookup is isolated: a failed one is logged and omitted from the
    /// result map, and never aborts the batch.
    pub async fn get_multiple_repo_languages(&self, login: &str, repo_names: &[String]) -> BTreeMap<String, LanguageByteMap> {
        let fetches = repo_names.iter().map(|name| async move {
            let result = self.get_repo_languages(login, name).await;
            (name.clone(), result)
        });

        let mut by_repo = BTreeMap::new();
        for (name, result) in join_all(fetches).await {
            match result {
                Ok(map) => {
                    let _ = by_repo.insert(name, map);
                }
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "Could not fetch languages for '{login}/{name}': {e}");
                }
            }
        }
        by_repo
    }

    /// Fetch the recent public activity feed.
    ///
    /// The feed is capped at a few pages server-side; pagination stops early
    /// on an empty page or a non-success status, keeping what was read.
    pub async fn get_events(&self, login: &str) -> Result<Vec<Event>, FetchError> {
        let key = cache_key("events", &[login]);
        if let Some(CachedValue::Events(events)) = self.cache.get(&key) {
            return Ok(events);
        }

        log::info!(target: LOG_TARGET, "Querying GitHub for events of '{login}'");
        let mut events = Vec::new();
        let mut page = 1u32;

        while page <= MAX_EVENT_PAGES {
            let url = format!(
                "{}/users/{login}/events/public?per_page={EVENT_PAGE_SIZE}&page={page}",
                self.client.base_url()
            );
            match self.client.api_call(&url).await {
                ApiResult::Success(resp, _) => {
                    let batch: Vec<Event> = resp.json().await.map_err(ohno::AppError::from)?;
                    if batch.is_empty() {
                        break;
                    }
                    events.extend(batch);
                    page += 1;
                }
                ApiResult::RateLimited(info) => return Err(FetchError::rate_limited(&info, Utc::now())),
                ApiResult::NotFound(_) | ApiResult::HttpError(..) => {
                    log::debug!(target: LOG_TARGET, "Event feed for '{login}' ended early on page {page}");
                    break;
                }
                ApiResult::Failed(e) => return Err(FetchError::Failed(e)),
            }
        }

        self.cache.set(key, CachedValue::Events(events.clone()), Some(EVENTS_CACHE_TTL));
        Ok(events)
    }

    /// Fetch the organizations the account belongs to.
    ///
    /// Best-effort: any non-success status degrades to an empty (cached)
    /// list.
    pub async fn get_organizations(&self, login: &str) -> Result<Vec<String>, FetchError> {
        let key = cache_key("orgs", &[login]);
        if let Some(CachedValue::Organizations(orgs)) = self.cache.get(&key) {
            return Ok(orgs);
        }

        let url = format!("{}/users/{login}/orgs", self.client.base_url());
        match self.client.api_call(&url).await {
            ApiResult::Success(resp, _) => {
                let orgs: Vec<Organization> = resp.json().await.map_err(ohno::AppError::from)?;
                let orgs: Vec<String> = orgs.into_iter().map(|org| org.login).collect();
                self.cache.set(key, CachedValue::Organizations(orgs.clone()), None);
                Ok(orgs)
            }
            ApiResult::RateLimited(info) => Err(FetchError::rate_limited(&info, Utc::now())),
            ApiResult::NotFound(_) | ApiResult::HttpError(..) => {
                log::debug!(target: LOG_TARGET, "No organization data for '{login}'");
                self.cache.set(key, CachedValue::Organizations(Vec::new()), None);
                Ok(Vec::new())
            }
            ApiResult::Failed(e) => Err(FetchError::Failed(e)),
        }
    }

    /// Search for an account by email address.
    ///
    /// A miss is cached (negative caching) so repeated lookups for a
    /// known-absent email stay local.
    pub async fn search_by_email(&self, email: &str) -> Result<Option<String>, FetchError> {
        let key = cache_key("search_email", &[email]);
        if let Some(CachedValue::EmailMatch(login)) = self.cache.get(&key) {
            return Ok(login);
        }

        log::info!(target: LOG_TARGET, "Searching GitHub for email '{email}'");
        let url = Url::parse_with_params(
            &format!("{}/search/users", self.client.base_url()),
            [("q", format!("{email} in:email"))],
        )
        .into_app_err("building search URL")?;

        match self.client.api_call(url.as_str()).await {
            ApiResult::Success(resp, _) => {
                let results: UserSearchResults = resp.json().await.map_err(ohno::AppError::from)?;
                let login = if results.total_count > 0 {
                    results.items.into_iter().next().map(|item| item.login)
                } else {
                    None
                };
                self.cache.set(key, CachedValue::EmailMatch(login.clone()), None);
                Ok(login)
            }
            ApiResult::RateLimited(info) => Err(FetchError::rate_limited(&info, Utc::now())),
            ApiResult::NotFound(_) | ApiResult::HttpError(..) => {
                self.cache.set(key, CachedValue::EmailMatch(None), None);
                Ok(None)
            }
            ApiResult::Failed(e) => Err(FetchError::Failed(e)),
        }
    }
}
