//! The derived, immutable output of one analysis run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One language's share of the aggregate byte distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    pub percentage: f64,
    pub bytes: u64,
    pub color: String,
}

/// A repository worth surfacing, picked by star count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoHighlight {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub url: String,
}

/// Activity rhythm derived from the sampled event feed.
///
/// `total_commits_last_year` is an estimate extrapolated from the bounded
/// recent sample, not a true annual count. The streak fields are always 0:
/// the feed window is too small to compute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPattern {
    pub most_active_day: String,
    pub most_active_hour: u32,
    pub total_commits_last_year: u64,
    pub longest_streak: u32,
    pub current_streak: u32,
    pub consistency_score: f64,
}

/// Community and collaboration counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationMetrics {
    pub public_repos: u64,
    pub public_gists: u64,
    pub followers: u64,
    pub following: u64,
    pub follower_ratio: f64,
    pub organizations: Vec<String>,
}

/// One year of repository creation activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthTimeline {
    pub year: i32,
    pub repos_created: u32,
    pub languages_used: Vec<String>,
    pub stars_earned: u64,
}

/// Coarse experience tier, first matching tier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ExperienceLevel {
    Expert,
    Senior,
    #[serde(rename = "Mid-Level")]
    #[strum(serialize = "Mid-Level")]
    MidLevel,
    Junior,
}

/// The complete derived analysis for one account and dataset snapshot.
///
/// Never mutated after construction; a new query always produces a new
/// instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    // Identity
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,

    // Account
    pub created_at: DateTime<Utc>,
    pub account_age_years: f64,
    pub profile_url: String,

    // Technical skills
    pub languages: Vec<LanguageStat>,
    pub primary_language: Option<String>,
    pub tech_diversity_score: f64,

    // Top repositories
    pub top_repos: Vec<RepoHighlight>,
    pub total_stars: u64,
    pub total_forks: u64,

    // Activity and collaboration
    pub activity: ActivityPattern,
    pub collaboration: CollaborationMetrics,
    pub growth_timeline: Vec<GrowthTimeline>,

    // Overall
    pub overall_score: f64,
    pub experience_level: ExperienceLevel,
    pub focus_areas: Vec<String>,
    pub summary: String,
}
