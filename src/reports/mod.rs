mod console;

pub use console::generate as generate_console;

use crate::Result;
use crate::analysis::ProfileAnalysis;
use ohno::IntoAppError;

/// Render a full analysis as pretty-printed JSON.
pub fn generate_json(analysis: &ProfileAnalysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).into_app_err("serializing analysis to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ActivityPattern, CollaborationMetrics, ExperienceLevel};

    #[test]
    fn json_round_trips() {
        let analysis = ProfileAnalysis {
            username: "octocat".to_string(),
            name: None,
            avatar_url: String::new(),
            bio: None,
            location: None,
            company: None,
            blog: None,
            twitter: None,
            email: None,
            hireable: None,
            created_at: "2011-01-25T18:44:36Z".parse().unwrap(),
            account_age_years: 13.0,
            profile_url: String::new(),
            languages: Vec::new(),
            primary_language: None,
            tech_diversity_score: 0.0,
            top_repos: Vec::new(),
            total_stars: 0,
            total_forks: 0,
            activity: ActivityPattern {
                most_active_day: "Monday".to_string(),
                most_active_hour: 12,
                total_commits_last_year: 0,
                longest_streak: 0,
                current_streak: 0,
                consistency_score: 0.0,
            },
            collaboration: CollaborationMetrics {
                public_repos: 0,
                public_gists: 0,
                followers: 0,
                following: 0,
                follower_ratio: 0.0,
                organizations: Vec::new(),
            },
            growth_timeline: Vec::new(),
            overall_score: 0.0,
            experience_level: ExperienceLevel::Junior,
            focus_areas: Vec::new(),
            summary: String::new(),
        };

        let json = generate_json(&analysis).unwrap();
        let parsed: ProfileAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, analysis);
    }
}
