//! Composite developer score and its derived labels.

use super::profile::{ActivityPattern, CollaborationMetrics, ExperienceLevel, LanguageStat};
use super::round1;
use crate::facts::github::Repository;

/// How many of the top languages feed focus-area detection.
const FOCUS_LANGUAGE_WINDOW: usize = 5;

/// Maximum number of focus areas reported.
const MAX_FOCUS_AREAS: usize = 3;

/// Domain labels with their characteristic language sets, in report order.
static FOCUS_AREAS: &[(&str, &[&str])] = &[
    ("Web Development", &["JavaScript", "TypeScript", "HTML", "CSS", "Vue", "React", "Angular", "Svelte", "PHP"]),
    ("Data Science", &["Python", "R", "Jupyter Notebook"]),
    ("Mobile Development", &["Swift", "Kotlin", "Dart", "Java"]),
    ("Systems Programming", &["C", "C++", "Rust", "Go"]),
    ("DevOps", &["Shell", "Python", "Go", "Dockerfile"]),
    ("Backend Development", &["Java", "Python", "Go", "Ruby", "PHP", "C#"]),
    ("Game Development", &["C++", "C#", "GDScript"]),
];

/// Detect focus areas from the top languages.
#[must_use]
pub fn focus_areas(languages: &[LanguageStat]) -> Vec<String> {
    let top_names: Vec<&str> = languages.iter().take(FOCUS_LANGUAGE_WINDOW).map(|l| l.name.as_str()).collect();

    FOCUS_AREAS
        .iter()
        .filter(|(_, area_languages)| top_names.iter().any(|name| area_languages.contains(name)))
        .map(|(area, _)| (*area).to_string())
        .take(MAX_FOCUS_AREAS)
        .collect()
}

/// Overall developer score in [0, 100]: the sum of five capped sub-scores
/// (repositories 25, stars 25, language diversity 15, activity 20,
/// community engagement 15).
#[expect(clippy::cast_precision_loss, reason = "profile counts are far below f64 precision limits")]
#[must_use]
pub fn overall_score(
    repos: &[Repository],
    languages: &[LanguageStat],
    activity: &ActivityPattern,
    collaboration: &CollaborationMetrics,
) -> f64 {
    let repo_score = (repos.len() as f64 * 1.5).min(25.0);

    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
    let star_score = (total_stars as f64 * 0.5).min(25.0);

    let diversity_score = (languages.len() as f64 * 2.0).min(15.0);

    let activity_score = (activity.consistency_score * 0.2).min(20.0);

    let engagement_score =
        (collaboration.followers as f64 / 10.0 + collaboration.organizations.len() as f64 * 2.0).min(15.0);

    round1(repo_score + star_score + diversity_score + activity_score + engagement_score)
}

/// Assign the experience tier, first match wins.
#[must_use]
pub fn experience_level(account_age_years: f64, repo_count: usize, score: f64) -> ExperienceLevel {
    if score >= 70.0 || (account_age_years >= 5.0 && repo_count >= 30) {
        ExperienceLevel::Expert
    } else if score >= 50.0 || (account_age_years >= 3.0 && repo_count >= 15) {
        ExperienceLevel::Senior
    } else if score >= 30.0 || (account_age_years >= 1.0 && repo_count >= 5) {
        ExperienceLevel::MidLevel
    } else {
        ExperienceLevel::Junior
    }
}

/// Breadth-of-stack score in [0, 100].
#[expect(clippy::cast_precision_loss, reason = "language count is at most ten")]
#[must_use]
pub fn tech_diversity_score(language_count: usize) -> f64 {
    round1((language_count as f64 * 12.0).min(100.0))
}
