use std::time::Duration;

use chrono::NaiveDate;
use fxhash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::posts::Notifier;
use crate::posts::top_picks::TopPicks;
use crate::props::PropScore;
use crate::props::ratings::Ratings;
use crate::report::table::PicksTable;
use crate::util::pitching::{DerivedRates, PitcherGameContext, SeasonStats};
use crate::util::round_to;
use crate::util::statsapi::StatsProvider;

pub mod table;

pub const TOP_PICKS: usize = 5;

/// Everything shown for one scored pitcher.
#[derive(Clone, Debug)]
pub struct PitcherReport {
    pub context: PitcherGameContext,
    pub stats: SeasonStats,
    pub rates: DerivedRates,
    pub score: PropScore,
    pub ratings: Ratings,
}

impl PitcherReport {
    pub fn new(context: PitcherGameContext, stats: SeasonStats) -> Self {
        let rates = DerivedRates::from_stats(&stats);
        let score = PropScore::new(&stats, &rates);
        let ratings = Ratings::new(stats.era, stats.whip, rates.k_per_9, rates.bb_per_9);
        Self {
            context,
            stats,
            rates,
            score,
            ratings,
        }
    }

    /// Confidence at display precision; this is what the report is ranked by.
    pub fn confidence(&self) -> f64 {
        round_to(self.score.confidence, 3)
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SkipReason {
    #[error("no season pitching stats")]
    NoStats,
    #[error("stats lookup failed: {0}")]
    Lookup(String),
}

#[derive(Debug, Default)]
pub struct Analysis {
    pub scheduled: usize,
    /// Sorted by confidence, best first.
    pub reports: Vec<PitcherReport>,
    pub skipped: Vec<(PitcherGameContext, SkipReason)>,
}

fn lookup(provider: &impl StatsProvider, pitcher_id: i64) -> Result<SeasonStats, SkipReason> {
    match provider.season_stats(pitcher_id) {
        Ok(Some(stats)) => Ok(stats),
        Ok(None) => Err(SkipReason::NoStats),
        Err(e) => Err(SkipReason::Lookup(format!("{e:#}"))),
    }
}

/// Scores every probable starter for `date`, one lookup at a time with `delay` after each
/// request. A pitcher listed twice (doubleheader) is only fetched once.
pub fn analyze_pitchers(provider: &impl StatsProvider, date: NaiveDate, delay: Duration) -> Analysis {
    let pitchers = match provider.today_pitchers(date) {
        Ok(pitchers) => pitchers,
        Err(e) => {
            warn!("Could not load the schedule for {date}: {e:#}");
            Vec::new()
        }
    };

    let mut analysis = Analysis {
        scheduled: pitchers.len(),
        ..Analysis::default()
    };
    let mut cache = FxHashMap::<i64, Result<SeasonStats, SkipReason>>::default();

    for context in pitchers {
        let stats = match cache.get(&context.pitcher_id) {
            Some(cached) => cached.clone(),
            None => {
                let fetched = lookup(provider, context.pitcher_id);
                cache.insert(context.pitcher_id, fetched.clone());
                std::thread::sleep(delay);
                fetched
            }
        };
        match stats {
            Ok(stats) => {
                let report = PitcherReport::new(context, stats);
                debug!(pitcher = %report.stats.name, prop = %report.score.best_prop, confidence = report.confidence(), "scored");
                analysis.reports.push(report);
            }
            Err(reason) => {
                debug!(pitcher_id = context.pitcher_id, team = %context.team, %reason, "skipped");
                analysis.skipped.push((context, reason));
            }
        }
    }

    analysis.reports.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));
    info!(
        "Scored {} of {} probable pitchers ({} skipped)",
        analysis.reports.len(),
        analysis.scheduled,
        analysis.skipped.len(),
    );
    analysis
}

/// One full run: analyze, print the table, notify with the top picks.
pub fn run(provider: &impl StatsProvider, notifier: &impl Notifier, date: NaiveDate, delay: Duration) -> Analysis {
    let analysis = analyze_pitchers(provider, date, delay);
    if analysis.scheduled == 0 {
        println!("❌ No usable pitcher data found today.");
        return analysis;
    }
    if analysis.reports.is_empty() {
        info!("No probable pitcher had season stats, nothing to report");
        return analysis;
    }

    println!("{}", PicksTable::new(date, &analysis.reports));
    notifier.notify(&TopPicks::new(date, &analysis.reports, TOP_PICKS).to_string());
    analysis
}
