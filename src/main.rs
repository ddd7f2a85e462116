//! A tool to analyze and score public GitHub developer profiles.
//!
//! # Overview
//!
//! `profile-rank` resolves a query (handle, profile URL, or email address)
//! to a GitHub account, aggregates the account's public data (profile,
//! repositories, per-repository languages, recent activity, organizations),
//! and derives a set of analytics: language mix, activity rhythm,
//! collaboration metrics, growth over time, and an overall score with a
//! narrative summary.
//!
//! # Quick Start
//!
//! ```bash
//! profile-rank torvalds
//! profile-rank https://github.com/rust-lang
//! profile-rank someone@example.com
//! ```
//!
//! # Authentication
//!
//! All endpoints used are public; a token only raises the API rate-limit
//! tier from 60 to 5000 requests/hour:
//!
//! ```bash
//! export GITHUB_TOKEN=ghp_xxxxxxxxxxxxxxxxxxxx
//! profile-rank torvalds
//! ```
//!
//! # Output
//!
//! The default console report shows the score, experience tier, language
//! distribution, top repositories, activity pattern, collaboration
//! metrics, and a year-by-year growth timeline. Use `--json` for the full
//! analysis as JSON.
//!
//! ```bash
//! profile-rank --json torvalds > torvalds.json
//! ```
//!
//! Several queries can be analyzed in one run; they share one cache, so
//! overlapping lookups within the TTL are served locally:
//!
//! ```bash
//! profile-rank torvalds gvanrossum BurntSushi
//! ```

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use profile_rank::Result;

mod commands;

use crate::commands::{AnalyzeArgs, process_analyze};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "profile-rank", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    process_analyze(&cli.args).await
}
