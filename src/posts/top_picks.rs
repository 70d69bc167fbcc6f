use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::report::PitcherReport;
use crate::util::decimal;

/// The condensed summary posted to chat.
pub struct TopPicks<'a> {
    date: NaiveDate,
    limit: usize,
    picks: &'a [PitcherReport],
}

impl<'a> TopPicks<'a> {
    /// `reports` must already be sorted best-first.
    pub fn new(date: NaiveDate, reports: &'a [PitcherReport], limit: usize) -> Self {
        Self {
            date,
            limit,
            picks: &reports[..reports.len().min(limit)],
        }
    }
}

impl Display for TopPicks<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { date, limit, picks } = self;
        write!(f, "🔥 **Top {limit} Pitcher Props for {}**", date.format("%Y-%m-%d"))?;
        for pick in *picks {
            let PitcherReport { context, stats, score, .. } = pick;
            write!(
                f,
                "\n- **{name} ({team} vs {opponent})**\n  ➤ {prop} (Confidence: {confidence}, Grade: {grade})",
                name = stats.name,
                team = context.team,
                opponent = context.opponent,
                prop = score.best_prop,
                confidence = decimal(pick.confidence()),
                grade = score.grade,
            )?;
        }
        Ok(())
    }
}
