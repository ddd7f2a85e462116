//! Wire models for the GitHub REST API, with only the fields we need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-repository distribution of source bytes by language name.
///
/// A `BTreeMap` keeps iteration deterministic when maps from many
/// repositories are merged into one aggregate distribution.
pub type LanguageByteMap = BTreeMap<String, u64>;

/// A user profile as returned by the single-account endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub html_url: String,
}

/// A repository row from the paginated listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub html_url: String,
}

/// A public activity event. The feed only exposes a bounded recent window,
/// so any collection of these is a sample, never the full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
}

/// An organization membership row.
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub login: String,
}

/// Response envelope of the user search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchResults {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<UserSearchItem>,
}

/// A single hit in a user search.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchItem {
    pub login: String,
}
