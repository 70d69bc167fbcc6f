use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::report::PitcherReport;
use crate::util::decimal;

const COLUMNS: [&str; 21] = [
    "Name", "Team", "Opponent", "K/Start", "Hits/IP", "ERA", "ERA Rating", "WHIP", "WHIP Rating",
    "K/9", "K/9 Rating", "BB/9", "BB/9 Rating", "BB/Game", "Outs/Game", "Best Prop",
    "Confidence Score", "Bet Grade", "Fade", "Fade Suggestion", "Track Bet",
];

const CONFIDENCE_RANGES: [(&str, &str); 3] = [
    ("Strong Bet", "≥ 0.6"),
    ("Consider", "0.3 – 0.59"),
    ("Avoid/Fade", "< 0.3"),
];

/// The full console report, one row per pitcher in the order given.
pub struct PicksTable<'a> {
    date: NaiveDate,
    reports: &'a [PitcherReport],
}

impl<'a> PicksTable<'a> {
    pub fn new(date: NaiveDate, reports: &'a [PitcherReport]) -> Self {
        Self {
            date,
            reports,
        }
    }
}

fn row(report: &PitcherReport) -> [String; 21] {
    let PitcherReport { context, stats, rates, score, ratings } = report;
    [
        stats.name.clone(),
        context.team.clone(),
        context.opponent.clone(),
        format!("{:.2}", rates.k_per_start),
        format!("{:.2}", rates.hits_per_ip),
        format!("{:.2}", stats.era),
        ratings.era.to_string(),
        format!("{:.2}", stats.whip),
        ratings.whip.to_string(),
        format!("{:.2}", rates.k_per_9),
        ratings.k_per_9.to_string(),
        format!("{:.2}", rates.bb_per_9),
        ratings.bb_per_9.to_string(),
        format!("{:.2}", rates.bb_per_game),
        format!("{:.1}", rates.outs_per_game),
        score.best_prop.to_string(),
        decimal(report.confidence()),
        score.grade.to_string(),
        score.fade.to_string(),
        score.fade_suggestion.clone(),
        String::new(),
    ]
}

impl Display for PicksTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rows = self.reports.iter().map(row).collect::<Vec<_>>();
        let mut widths = COLUMNS.map(|name| name.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(f, "\n📘 Confidence Score Ranges:")?;
        for (grade, range) in CONFIDENCE_RANGES {
            writeln!(f, "- {grade}: {range}")?;
        }
        writeln!(f, "\n✅ Ant's Nova Picks for {}", self.date.format("%Y-%m-%d"))?;

        let header = COLUMNS.iter().zip(&widths).map(|(name, &width)| format!("{name: <width$}")).collect::<Vec<_>>();
        writeln!(f, "{}", header.join(" | ").trim_end())?;
        writeln!(f, "{}", widths.iter().map(|&width| "-".repeat(width)).collect::<Vec<_>>().join("-+-"))?;
        for row in &rows {
            let cells = row.iter().zip(&widths).map(|(cell, &width)| format!("{cell: <width$}")).collect::<Vec<_>>();
            writeln!(f, "{}", cells.join(" | ").trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::pitching::{sample_stats, PitcherGameContext};

    #[test]
    fn renders_legend_header_and_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let reports = vec![PitcherReport::new(
            PitcherGameContext::new(1, "Toronto Blue Jays".to_owned(), "Boston Red Sox".to_owned()),
            sample_stats(),
        )];
        let table = PicksTable::new(date, &reports).to_string();
        let lines = table.lines().collect::<Vec<_>>();

        assert!(table.contains("- Strong Bet: ≥ 0.6"));
        assert!(table.contains("✅ Ant's Nova Picks for 2024-06-01"));
        let header = lines.iter().find(|line| line.starts_with("Name")).unwrap();
        assert!(header.ends_with("Track Bet"));
        let row = lines.iter().find(|line| line.starts_with("Test Pitcher")).unwrap();
        for cell in ["Toronto Blue Jays", "0.78", "Good Strikeout Pitcher", "Under Hits Allowed", "0.291", "Avoid", "Bet Over Hits Allowed"] {
            assert!(row.contains(cell), "missing {cell} in {row}");
        }
    }

    #[test]
    fn columns_line_up() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let context = PitcherGameContext::new(1, "A".to_owned(), "B".to_owned());
        let reports = vec![PitcherReport::new(context.clone(), sample_stats()), PitcherReport::new(context, sample_stats())];
        let table = PicksTable::new(date, &reports).to_string();
        let pipes = table
            .lines()
            .filter(|line| line.contains(" | "))
            .map(|line| line.char_indices().filter(|&(_, c)| c == '|').map(|(i, _)| line[..i].chars().count()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(pipes.len(), 3);
        assert!(pipes.windows(2).all(|w| w[0] == w[1]));
    }
}
