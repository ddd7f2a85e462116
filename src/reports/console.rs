//! Console rendering of a profile analysis.

use crate::Result;
use crate::analysis::{ExperienceLevel, ProfileAnalysis};
use core::fmt::Write;
use owo_colors::OwoColorize;

const RULE: &str = "═══════════════════════════════════════";

/// Render a full analysis into `writer`.
pub fn generate<W: Write>(analysis: &ProfileAnalysis, use_colors: bool, writer: &mut W) -> Result<()> {
    let display_name = analysis.name.as_deref().unwrap_or(&analysis.username);

    writeln!(writer, "{RULE}")?;
    if use_colors {
        writeln!(writer, "  {} (@{})", display_name.bold(), analysis.username)?;
    } else {
        writeln!(writer, "  {display_name} (@{})", analysis.username)?;
    }
    writeln!(writer, "{RULE}")?;

    let score = format!("{:.1} / 100", analysis.overall_score);
    let colored_score = if use_colors {
        match analysis.experience_level {
            ExperienceLevel::Expert => score.green().bold().to_string(),
            ExperienceLevel::Senior => score.cyan().bold().to_string(),
            ExperienceLevel::MidLevel => score.yellow().bold().to_string(),
            ExperienceLevel::Junior => score.red().bold().to_string(),
        }
    } else {
        score
    };

    writeln!(writer, "  Overall score : {colored_score}")?;
    writeln!(writer, "  Experience    : {}", analysis.experience_level)?;
    writeln!(writer, "  Account age   : {:.1} years", analysis.account_age_years)?;
    if !analysis.focus_areas.is_empty() {
        writeln!(writer, "  Focus areas   : {}", analysis.focus_areas.join(", "))?;
    }
    if let Some(location) = &analysis.location {
        writeln!(writer, "  Location      : {location}")?;
    }

    writeln!(writer)?;
    section_header(writer, "Summary", use_colors)?;
    writeln!(writer, "  {}", analysis.summary)?;

    if !analysis.languages.is_empty() {
        writeln!(writer)?;
        section_header(writer, "Languages", use_colors)?;
        let max_name_len = analysis.languages.iter().map(|l| l.name.len()).max().unwrap_or(0);
        for language in &analysis.languages {
            writeln!(
                writer,
                "  {:<width$}  {:>5.1}%  ({} bytes)",
                language.name,
                language.percentage,
                language.bytes,
                width = max_name_len
            )?;
        }
    }

    if !analysis.top_repos.is_empty() {
        writeln!(writer)?;
        section_header(writer, "Top Repositories", use_colors)?;
        for repo in &analysis.top_repos {
            let language = repo.language.as_deref().unwrap_or("-");
            writeln!(writer, "  {}  ★ {}  ⑂ {}  [{language}]", repo.name, repo.stars, repo.forks)?;
            if let Some(description) = &repo.description {
                writeln!(writer, "      {description}")?;
            }
        }
    }

    writeln!(writer)?;
    section_header(writer, "Activity", use_colors)?;
    writeln!(
        writer,
        "  Most active      : {}s around {:02}:00",
        analysis.activity.most_active_day, analysis.activity.most_active_hour
    )?;
    writeln!(writer, "  Est. commits/yr  : {}", analysis.activity.total_commits_last_year)?;
    writeln!(writer, "  Consistency      : {:.1} / 100", analysis.activity.consistency_score)?;
    writeln!(writer, "  Tech diversity   : {:.1} / 100", analysis.tech_diversity_score)?;

    writeln!(writer)?;
    section_header(writer, "Collaboration", use_colors)?;
    writeln!(
        writer,
        "  Followers        : {} (ratio {:.2})",
        analysis.collaboration.followers, analysis.collaboration.follower_ratio
    )?;
    writeln!(writer, "  Following        : {}", analysis.collaboration.following)?;
    writeln!(
        writer,
        "  Public repos     : {} ({} gists)",
        analysis.collaboration.public_repos, analysis.collaboration.public_gists
    )?;
    if analysis.collaboration.organizations.is_empty() {
        writeln!(writer, "  Organizations    : none")?;
    } else {
        writeln!(writer, "  Organizations    : {}", analysis.collaboration.organizations.join(", "))?;
    }
    writeln!(writer, "  Total stars      : {} ({} forks)", analysis.total_stars, analysis.total_forks)?;

    if !analysis.growth_timeline.is_empty() {
        writeln!(writer)?;
        section_header(writer, "Growth", use_colors)?;
        for year in &analysis.growth_timeline {
            let languages = if year.languages_used.is_empty() {
                "-".to_string()
            } else {
                year.languages_used.join(", ")
            };
            writeln!(
                writer,
                "  {}  +{} repos  ★ {}  [{languages}]",
                year.year, year.repos_created, year.stars_earned
            )?;
        }
    }

    Ok(())
}

fn section_header<W: Write>(writer: &mut W, title: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    Ok(())
}
