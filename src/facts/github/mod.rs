mod client;
mod models;
mod provider;

pub use client::{ApiResult, Client, GITHUB_API_BASE_URL, RateLimitInfo, RateLimitStatus};
pub use models::{Account, Event, LanguageByteMap, Organization, Repository, UserSearchItem, UserSearchResults};
pub use provider::{CachedValue, Provider};
