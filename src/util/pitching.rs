use crate::util::round_to;

/// A probable starter and the matchup he is scheduled for.
#[derive(Clone, Debug, PartialEq)]
pub struct PitcherGameContext {
    pub pitcher_id: i64,
    pub team: String,
    pub opponent: String,
}

impl PitcherGameContext {
    pub fn new(pitcher_id: i64, team: String, opponent: String) -> Self {
        Self {
            pitcher_id,
            team,
            opponent,
        }
    }
}

/// Season totals for one pitcher. `games_started` and `innings_pitched` fall back to 1 when the
/// API leaves them out.
#[derive(Clone, Debug, PartialEq)]
pub struct SeasonStats {
    pub name: String,
    pub era: f64,
    pub whip: f64,
    pub strikeouts: i64,
    pub walks: i64,
    pub games_started: i64,
    pub hits: i64,
    pub innings_pitched: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedRates {
    pub k_per_start: f64,
    pub hits_per_ip: f64,
    pub bb_per_game: f64,
    pub outs_per_game: f64,
    pub k_per_9: f64,
    pub bb_per_9: f64,
}

impl DerivedRates {
    /// All rates are zero when either denominator is zero.
    pub fn from_stats(stats: &SeasonStats) -> Self {
        let SeasonStats { strikeouts, walks, games_started, hits, innings_pitched, .. } = *stats;
        if games_started == 0 || innings_pitched == 0.0 {
            return Self::default();
        }
        let (k, bb, h, gs, ip) = (strikeouts as f64, walks as f64, hits as f64, games_started as f64, innings_pitched);
        Self {
            k_per_start: round_to(k / gs, 2),
            hits_per_ip: round_to(h / ip, 2),
            bb_per_game: round_to(bb / gs, 2),
            outs_per_game: round_to(ip * 3.0 / gs, 1),
            k_per_9: round_to(k * 9.0 / ip, 2),
            bb_per_9: round_to(bb * 9.0 / ip, 2),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_stats() -> SeasonStats {
    SeasonStats {
        name: "Test Pitcher".to_owned(),
        era: 3.0,
        whip: 1.1,
        strikeouts: 180,
        walks: 40,
        games_started: 30,
        hits: 140,
        innings_pitched: 180.0,
    }
}
