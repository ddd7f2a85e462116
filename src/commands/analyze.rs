//! The analyze command: resolve, aggregate, score, and report.

use crate::commands::common::{ColorMode, LogLevel, init_logging};
use clap::Args;
use core::time::Duration;
use ohno::bail;
use profile_rank::Result;
use profile_rank::analyzer::ProfileAnalyzer;
use profile_rank::facts::{DEFAULT_CACHE_CAPACITY, FetchError, MemoryCache};
use profile_rank::reports::{generate_console, generate_json};

/// Default TTL for cached remote lookups, in seconds.
const CACHE_TTL_SECS: u64 = 3600;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Profiles to analyze: a handle, a profile URL, or an email address
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Output the analysis as JSON instead of a console report
    #[arg(long)]
    pub json: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Maximum number of cached remote lookups held at once
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: usize,

    /// Show rate-limit status after the run
    #[arg(long)]
    pub rate_limit: bool,
}

pub async fn process_analyze(args: &AnalyzeArgs) -> Result<()> {
    init_logging(args.log_level);

    let cache = MemoryCache::new(Duration::from_secs(CACHE_TTL_SECS), args.cache_capacity);
    let analyzer = ProfileAnalyzer::new(args.github_token.as_deref(), cache)?;
    let use_colors = args.color.use_colors();

    let mut failures = 0usize;

    for (index, query) in args.queries.iter().enumerate() {
        match analyzer.analyze(query).await {
            Ok(analysis) => {
                if index > 0 && !args.json {
                    println!();
                }
                if args.json {
                    println!("{}", generate_json(&analysis)?);
                } else {
                    let mut output = String::new();
                    generate_console(&analysis, use_colors, &mut output)?;
                    print!("{output}");
                }
            }
            Err(e @ FetchError::RateLimited { .. }) => {
                eprintln!("✗ {query}: {e}");
                eprintln!("  Provide a GitHub token via GITHUB_TOKEN for a higher request quota.");
                failures += 1;
            }
            Err(e) => {
                eprintln!("✗ {query}: {e}");
                failures += 1;
            }
        }
    }

    if args.rate_limit {
        let status = analyzer.rate_limit_status();
        let remaining = status.remaining.map_or_else(|| "unknown".to_string(), |r| r.to_string());
        let reset = status.reset_at.map_or_else(|| "unknown".to_string(), |at| at.to_rfc3339());
        eprintln!("\nRate limit: {remaining} remaining, resets at {reset} (token: {})", status.has_token);
    }

    if failures > 0 {
        bail!("failed to analyze {failures} profile(s)");
    }

    Ok(())
}
