use std::fmt::{Display, Formatter};

use crate::util::pitching::{DerivedRates, SeasonStats};

pub mod ratings;

const AVG_K_PER_START: f64 = 6.0;
const AVG_HITS_PER_IP: f64 = 1.1;
const AVG_ERA: f64 = 4.0;
const AVG_WHIP: f64 = 1.25;
const AVG_OUTS_PER_GAME: f64 = 18.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Prop {
    OverStrikeouts,
    UnderStrikeouts,
    OverHitsAllowed,
    UnderHitsAllowed,
    UnderEarnedRuns,
    OverEarnedRuns,
    OverPitchingOuts,
    UnderPitchingOuts,
}

impl Prop {
    /// Tie-break order: the first of equal scores wins.
    pub const ALL: [Prop; 8] = [
        Self::OverStrikeouts,
        Self::UnderStrikeouts,
        Self::OverHitsAllowed,
        Self::UnderHitsAllowed,
        Self::UnderEarnedRuns,
        Self::OverEarnedRuns,
        Self::OverPitchingOuts,
        Self::UnderPitchingOuts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OverStrikeouts => "Over Strikeouts",
            Self::UnderStrikeouts => "Under Strikeouts",
            Self::OverHitsAllowed => "Over Hits Allowed",
            Self::UnderHitsAllowed => "Under Hits Allowed",
            Self::UnderEarnedRuns => "Under Earned Runs",
            Self::OverEarnedRuns => "Over Earned Runs",
            Self::OverPitchingOuts => "Over Pitching Outs",
            Self::UnderPitchingOuts => "Under Pitching Outs",
        }
    }
}

impl Display for Prop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BetGrade {
    StrongBet,
    Consider,
    Avoid,
}

impl BetGrade {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.6 {
            Self::StrongBet
        } else if confidence >= 0.3 {
            Self::Consider
        } else {
            Self::Avoid
        }
    }

    pub fn fade(self) -> Fade {
        match self {
            Self::StrongBet => Fade::No,
            Self::Consider => Fade::Optional,
            Self::Avoid => Fade::Yes,
        }
    }
}

impl Display for BetGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::StrongBet => "Strong Bet",
            Self::Consider => "Consider",
            Self::Avoid => "Avoid",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fade {
    Yes,
    Optional,
    No,
}

impl Display for Fade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Yes => "Yes",
            Self::Optional => "Optional",
            Self::No => "No",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropScore {
    pub best_prop: Prop,
    pub confidence: f64,
    pub grade: BetGrade,
    pub fade: Fade,
    pub fade_suggestion: String,
}

impl PropScore {
    pub fn new(stats: &SeasonStats, rates: &DerivedRates) -> Self {
        let (best_prop, confidence) = best_prop(&prop_scores(stats, rates));
        let grade = BetGrade::from_confidence(confidence);
        Self {
            best_prop,
            confidence,
            grade,
            fade: grade.fade(),
            fade_suggestion: fade_suggestion(best_prop, grade),
        }
    }
}

/// Each signal measured against its league-average baseline, split into an Over and an Under
/// score of which at most one is non-zero.
pub fn prop_scores(stats: &SeasonStats, rates: &DerivedRates) -> [(Prop, f64); 8] {
    fn split(raw: f64) -> (f64, f64) {
        (raw.max(0.0), (-raw).max(0.0))
    }

    let k = (rates.k_per_start - AVG_K_PER_START) / AVG_K_PER_START;
    let hits = (rates.hits_per_ip - AVG_HITS_PER_IP) / AVG_HITS_PER_IP;
    // positive favours the under
    let earned_runs = ((AVG_ERA - stats.era) / AVG_ERA + (AVG_WHIP - stats.whip) / AVG_WHIP) / 2.0;
    let outs = (rates.outs_per_game - AVG_OUTS_PER_GAME) / AVG_OUTS_PER_GAME;

    let (over_k, under_k) = split(k);
    let (over_hits, under_hits) = split(hits);
    let (under_er, over_er) = split(earned_runs);
    let (over_outs, under_outs) = split(outs);

    [
        (Prop::OverStrikeouts, over_k),
        (Prop::UnderStrikeouts, under_k),
        (Prop::OverHitsAllowed, over_hits),
        (Prop::UnderHitsAllowed, under_hits),
        (Prop::UnderEarnedRuns, under_er),
        (Prop::OverEarnedRuns, over_er),
        (Prop::OverPitchingOuts, over_outs),
        (Prop::UnderPitchingOuts, under_outs),
    ]
}

pub fn best_prop(scores: &[(Prop, f64); 8]) -> (Prop, f64) {
    let mut best = scores[0];
    for &(prop, score) in &scores[1..] {
        if score > best.1 {
            best = (prop, score);
        }
    }
    best
}

/// Only an `Avoid` grade gets a suggestion: the opposite side of the same prop.
pub fn fade_suggestion(prop: Prop, grade: BetGrade) -> String {
    if grade != BetGrade::Avoid {
        return String::new();
    }
    let label = prop.label();
    if let Some(rest) = label.strip_prefix("Over ") {
        format!("Bet Under {rest}")
    } else if let Some(rest) = label.strip_prefix("Under ") {
        format!("Bet Over {rest}")
    } else {
        String::new()
    }
}
