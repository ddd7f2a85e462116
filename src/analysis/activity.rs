//! Activity rhythm derived from the sampled event feed.

use super::profile::ActivityPattern;
use super::round1;
use crate::facts::EventStats;

/// Fallbacks when the sample contains no push events.
const DEFAULT_ACTIVE_HOUR: u32 = 12;
const DEFAULT_ACTIVE_DAY: &str = "Monday";

/// Push events per month considered fully consistent.
const CONSISTENT_PUSHES_PER_MONTH: f64 = 30.0;

/// The feed only covers the recent window, so the annual commit count is
/// extrapolated from it.
const ANNUAL_ESTIMATE_FACTOR: u64 = 4;

/// Derive the activity pattern from event-feed counters.
#[expect(clippy::cast_precision_loss, reason = "event counts are small")]
#[must_use]
pub fn analyze_activity(stats: &EventStats) -> ActivityPattern {
    let most_active_hour = stable_mode(stats.commit_hours.iter().copied()).unwrap_or(DEFAULT_ACTIVE_HOUR);
    let most_active_day =
        stable_mode(stats.commit_days.iter().cloned()).unwrap_or_else(|| DEFAULT_ACTIVE_DAY.to_string());

    let pushes = stats.push_events as f64;
    let consistency = (pushes / CONSISTENT_PUSHES_PER_MONTH * 100.0).min(100.0);

    ActivityPattern {
        most_active_day,
        most_active_hour,
        total_commits_last_year: stats.push_events as u64 * ANNUAL_ESTIMATE_FACTOR,
        longest_streak: 0,
        current_streak: 0,
        consistency_score: round1(consistency),
    }
}

/// Most frequent value, with ties broken by first appearance in the input.
fn stable_mode<T: PartialEq>(items: impl Iterator<Item = T>) -> Option<T> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        if let Some(slot) = counts.iter_mut().find(|(value, _)| *value == item) {
            slot.1 += 1;
        } else {
            counts.push((item, 1));
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        let beats_best = best.as_ref().is_none_or(|(_, best_count)| count > *best_count);
        if beats_best {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
