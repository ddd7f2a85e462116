//! Pure, deterministic transforms from a raw dataset to a [`ProfileAnalysis`].
//!
//! Everything here is referentially transparent: the only non-input is the
//! evaluation instant, which the caller captures once per run and passes in.

mod activity;
mod languages;
mod profile;
mod scoring;
mod summary;
mod timeline;

pub use activity::analyze_activity;
pub use languages::{aggregate_languages, language_color};
pub use profile::{
    ActivityPattern, CollaborationMetrics, ExperienceLevel, GrowthTimeline, LanguageStat, ProfileAnalysis,
    RepoHighlight,
};
pub use scoring::{experience_level, focus_areas, overall_score, tech_diversity_score};
pub use summary::narrative;
pub use timeline::growth_timeline;

use crate::facts::ProfileFacts;
use crate::facts::github::{Account, Repository};
use chrono::{DateTime, Utc};

/// Default number of repositories highlighted by star count.
pub const TOP_REPO_LIMIT: usize = 5;

const DAYS_PER_YEAR: f64 = 365.25;

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Account age in years at the evaluation instant, one decimal.
#[expect(clippy::cast_precision_loss, reason = "day counts are far below f64 precision limits")]
#[must_use]
pub fn account_age_years(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_days = (now - created_at).num_days();
    round1(age_days as f64 / DAYS_PER_YEAR)
}

/// Follower/following counters taken verbatim, plus the follower ratio.
#[expect(clippy::cast_precision_loss, reason = "follower counts are far below f64 precision limits")]
#[must_use]
pub fn collaboration_metrics(account: &Account, orgs: &[String]) -> CollaborationMetrics {
    let follower_ratio = account.followers as f64 / account.following.max(1) as f64;

    CollaborationMetrics {
        public_repos: account.public_repos,
        public_gists: account.public_gists,
        followers: account.followers,
        following: account.following,
        follower_ratio: round2(follower_ratio),
        organizations: orgs.to_vec(),
    }
}

/// Highlight the most-starred repositories.
#[must_use]
pub fn top_repositories(repos: &[Repository], limit: usize) -> Vec<RepoHighlight> {
    let mut sorted: Vec<&Repository> = repos.iter().collect();
    sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    sorted
        .into_iter()
        .take(limit)
        .map(|repo| RepoHighlight {
            name: repo.name.clone(),
            description: repo.description.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language.clone(),
            url: repo.html_url.clone(),
        })
        .collect()
}

/// Transform a raw dataset into the complete derived analysis.
#[must_use]
pub fn analyze(facts: &ProfileFacts, now: DateTime<Utc>) -> ProfileAnalysis {
    let account = &facts.account;

    let age = account_age_years(account.created_at, now);
    let languages = aggregate_languages(&facts.repo_languages);
    let top_repos = top_repositories(&facts.repos, TOP_REPO_LIMIT);
    let activity = analyze_activity(&facts.event_stats);
    let collaboration = collaboration_metrics(account, &facts.orgs);
    let growth = growth_timeline(&facts.repos);
    let focus = focus_areas(&languages);

    let total_stars: u64 = facts.repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks: u64 = facts.repos.iter().map(|r| r.forks_count).sum();

    let score = overall_score(&facts.repos, &languages, &activity, &collaboration);
    let level = experience_level(age, facts.repos.len(), score);

    let summary = narrative(account, &languages, &facts.repos, &activity, &collaboration, level, &focus, age);

    ProfileAnalysis {
        username: account.login.clone(),
        name: account.name.clone(),
        avatar_url: account.avatar_url.clone(),
        bio: account.bio.clone(),
        location: account.location.clone(),
        company: account.company.clone(),
        blog: account.blog.clone(),
        twitter: account.twitter_username.clone(),
        email: account.email.clone(),
        hireable: account.hireable,
        created_at: account.created_at,
        account_age_years: age,
        profile_url: account.html_url.clone(),
        primary_language: languages.first().map(|l| l.name.clone()),
        tech_diversity_score: tech_diversity_score(languages.len()),
        languages,
        top_repos,
        total_stars,
        total_forks,
        activity,
        collaboration,
        growth_timeline: growth,
        overall_score: score,
        experience_level: level,
        focus_areas: focus,
        summary,
    }
}
