//! Growth-over-time view of repository creation.

use super::profile::GrowthTimeline;
use crate::facts::github::Repository;
use chrono::Datelike;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Default)]
struct YearAccumulator {
    repos: u32,
    languages: BTreeSet<String>,
    stars: u64,
}

/// Group repositories by creation year, ascending.
#[must_use]
pub fn growth_timeline(repos: &[Repository]) -> Vec<GrowthTimeline> {
    let mut years: BTreeMap<i32, YearAccumulator> = BTreeMap::new();

    for repo in repos {
        let entry = years.entry(repo.created_at.year()).or_default();
        entry.repos += 1;
        entry.stars += repo.stargazers_count;
        if let Some(language) = &repo.language {
            let _ = entry.languages.insert(language.clone());
        }
    }

    years
        .into_iter()
        .map(|(year, acc)| GrowthTimeline {
            year,
            repos_created: acc.repos,
            languages_used: acc.languages.into_iter().collect(),
            stars_earned: acc.stars,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, created_at: &str, stars: u64, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            stargazers_count: stars,
            forks_count: 0,
            language: language.map(str::to_string),
            created_at: created_at.parse().unwrap(),
            html_url: format!("https://github.com/someone/{name}"),
        }
    }

    #[test]
    fn groups_by_creation_year_ascending() {
        let repos = vec![
            repo("late", "2023-05-01T00:00:00Z", 5, Some("Rust")),
            repo("early", "2019-02-01T00:00:00Z", 1, Some("Python")),
            repo("mid", "2021-08-01T00:00:00Z", 3, None),
        ];

        let timeline = growth_timeline(&repos);
        let years: Vec<i32> = timeline.iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2019, 2021, 2023]);
    }

    #[test]
    fn aggregates_counts_stars_and_distinct_languages() {
        let repos = vec![
            repo("a", "2022-01-01T00:00:00Z", 10, Some("Rust")),
            repo("b", "2022-06-01T00:00:00Z", 7, Some("Python")),
            repo("c", "2022-12-01T00:00:00Z", 3, Some("Rust")),
        ];

        let timeline = growth_timeline(&repos);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].repos_created, 3);
        assert_eq!(timeline[0].stars_earned, 20);
        assert_eq!(timeline[0].languages_used, vec!["Python".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn repos_without_language_count_but_add_no_language() {
        let repos = vec![repo("a", "2022-01-01T00:00:00Z", 0, None)];

        let timeline = growth_timeline(&repos);
        assert_eq!(timeline[0].repos_created, 1);
        assert!(timeline[0].languages_used.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_timeline() {
        assert!(growth_timeline(&[]).is_empty());
    }
}
