//! Deterministic narrative assembly.
//!
//! The summary is a pure string-formatting function: given identical
//! inputs it reproduces its output byte for byte.

use super::profile::{ActivityPattern, CollaborationMetrics, ExperienceLevel, LanguageStat};
use crate::facts::github::{Account, Repository};

const SUMMARY_FOCUS_LIMIT: usize = 2;
const SUMMARY_LANGUAGE_LIMIT: usize = 3;

/// Assemble the narrative summary of a profile.
#[must_use]
pub fn narrative(
    account: &Account,
    languages: &[LanguageStat],
    repos: &[Repository],
    activity: &ActivityPattern,
    collaboration: &CollaborationMetrics,
    experience_level: ExperienceLevel,
    focus_areas: &[String],
    account_age_years: f64,
) -> String {
    let name = account.name.as_deref().unwrap_or(&account.login);
    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();

    let mut summary = format!("{name} is a {}-level developer", experience_level.to_string().to_lowercase());

    if account_age_years >= 1.0 {
        summary.push_str(&format!(" with {account_age_years:.0}+ years on GitHub"));
    }

    if !focus_areas.is_empty() {
        let shown = focus_areas.len().min(SUMMARY_FOCUS_LIMIT);
        summary.push_str(&format!(", focusing on {}", focus_areas[..shown].join(", ")));
    }

    summary.push_str(". ");

    if !languages.is_empty() {
        let top: Vec<&str> = languages.iter().take(SUMMARY_LANGUAGE_LIMIT).map(|l| l.name.as_str()).collect();
        summary.push_str(&format!("Primary expertise in {}. ", top.join(", ")));
    }

    if total_stars > 0 {
        summary.push_str(&format!("Has earned {total_stars} stars across {} public repositories. ", repos.len()));
    }

    if collaboration.followers >= 10 {
        summary.push_str(&format!("Active community member with {} followers", collaboration.followers));
        if !collaboration.organizations.is_empty() {
            summary.push_str(&format!(" and contributions to {} organizations", collaboration.organizations.len()));
        }
        summary.push_str(". ");
    }

    summary.push_str(&format!("Most active on {}s", activity.most_active_day));
    if activity.most_active_hour < 12 {
        summary.push_str(" (morning coder)");
    } else if activity.most_active_hour < 18 {
        summary.push_str(" (afternoon coder)");
    } else {
        summary.push_str(" (evening coder)");
    }
    summary.push('.');

    summary
}
