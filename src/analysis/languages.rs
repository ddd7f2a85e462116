//! Aggregate language distribution across a set of repositories.

use super::profile::LanguageStat;
use super::round1;
use crate::facts::github::LanguageByteMap;
use std::collections::BTreeMap;

/// How many languages the aggregate distribution keeps.
const TOP_LANGUAGE_LIMIT: usize = 10;

/// Shown for languages with no entry in the color table.
const DEFAULT_LANGUAGE_COLOR: &str = "#858585";

/// Display colors matching the source's own language palette.
static LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Python", "#3572A5"),
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#2b7489"),
    ("Java", "#b07219"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
    ("Dart", "#00B4AB"),
    ("Scala", "#c22d40"),
    ("R", "#198CE7"),
    ("Shell", "#89e051"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Vue", "#41b883"),
    ("Svelte", "#ff3e00"),
    ("Jupyter Notebook", "#DA5B0B"),
];

/// Look up the display color for a language.
#[must_use]
pub fn language_color(name: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(lang, _)| *lang == name)
        .map_or(DEFAULT_LANGUAGE_COLOR, |(_, color)| color)
}

/// Sum byte counts per language across all repositories and convert to the
/// top-10 percentage distribution, largest first.
#[expect(clippy::cast_precision_loss, reason = "byte counts are far below f64 precision limits")]
#[must_use]
pub fn aggregate_languages(repo_languages: &BTreeMap<String, LanguageByteMap>) -> Vec<LanguageStat> {
    let mut total_bytes: BTreeMap<&str, u64> = BTreeMap::new();
    for map in repo_languages.values() {
        for (language, bytes) in map {
            *total_bytes.entry(language).or_insert(0) += bytes;
        }
    }

    // Floor the denominator at 1 so an all-empty dataset divides cleanly.
    let total = total_bytes.values().sum::<u64>().max(1);

    let mut languages: Vec<LanguageStat> = total_bytes
        .into_iter()
        .map(|(name, bytes)| LanguageStat {
            name: name.to_string(),
            percentage: round1(bytes as f64 / total as f64 * 100.0),
            bytes,
            color: language_color(name).to_string(),
        })
        .collect();

    // Bytes descending; the accumulator's name ordering breaks ties.
    languages.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    languages.truncate(TOP_LANGUAGE_LIMIT);
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang_map(entries: &[(&str, u64)]) -> LanguageByteMap {
        entries.iter().map(|(name, bytes)| (name.to_string(), *bytes)).collect()
    }

    fn repo_languages(repos: &[(&str, &[(&str, u64)])]) -> BTreeMap<String, LanguageByteMap> {
        repos.iter().map(|(name, langs)| (name.to_string(), lang_map(langs))).collect()
    }

    #[test]
    fn sums_bytes_across_repositories() {
        let input = repo_languages(&[
            ("a", &[("Rust", 600), ("Shell", 100)]),
            ("b", &[("Rust", 300)]),
        ]);

        let languages = aggregate_languages(&input);
        assert_eq!(languages[0].name, "Rust");
        assert_eq!(languages[0].bytes, 900);
        assert_eq!(languages[0].percentage, 90.0);
        assert_eq!(languages[1].name, "Shell");
        assert_eq!(languages[1].percentage, 10.0);
    }

    #[test]
    fn percentages_sum_to_roughly_one_hundred() {
        let input = repo_languages(&[("a", &[("Rust", 123), ("C", 456), ("Go", 789), ("Shell", 11)])]);

        let sum: f64 = aggregate_languages(&input).iter().map(|l| l.percentage).sum();
        assert!((sum - 100.0).abs() < 0.5, "sum was {sum}");
    }

    #[test]
    fn empty_maps_produce_no_languages() {
        let input = repo_languages(&[("a", &[]), ("b", &[])]);
        assert!(aggregate_languages(&input).is_empty());
    }

    #[test]
    fn no_repositories_produce_no_languages() {
        assert!(aggregate_languages(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn truncates_to_top_ten() {
        let entries: Vec<(String, u64)> = (0..15).map(|i| (format!("Lang{i:02}"), 1000 - i)).collect();
        let map: LanguageByteMap = entries.iter().map(|(n, b)| (n.clone(), *b)).collect();
        let mut input = BTreeMap::new();
        let _ = input.insert("repo".to_string(), map);

        let languages = aggregate_languages(&input);
        assert_eq!(languages.len(), 10);
        assert_eq!(languages[0].name, "Lang00");
    }

    #[test]
    fn sorted_by_bytes_descending_with_name_tiebreak() {
        let input = repo_languages(&[("a", &[("Zig", 500), ("Ada", 500), ("Rust", 900)])]);

        let languages = aggregate_languages(&input);
        let names: Vec<&str> = languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Ada", "Zig"]);
    }

    #[test]
    fn known_language_gets_its_color() {
        let input = repo_languages(&[("a", &[("Rust", 100)])]);
        assert_eq!(aggregate_languages(&input)[0].color, "#dea584");
    }

    #[test]
    fn unknown_language_gets_default_color() {
        assert_eq!(language_color("Befunge"), "#858585");
    }
}
