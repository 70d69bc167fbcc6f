use anyhow::Result;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::get;
use crate::util::number;
use crate::util::pitching::{PitcherGameContext, SeasonStats};

pub const DEFAULT_API_BASE: &str = "https://statsapi.mlb.com/api/v1";

/// Where the probable starters and their season lines come from.
pub trait StatsProvider {
    fn today_pitchers(&self, date: NaiveDate) -> Result<Vec<PitcherGameContext>>;

    /// `Ok(None)` when the pitcher has no season pitching record.
    fn season_stats(&self, pitcher_id: i64) -> Result<Option<SeasonStats>>;
}

pub struct StatsApi {
    base: String,
}

impl StatsApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_owned(),
        }
    }
}

impl StatsProvider for StatsApi {
    fn today_pitchers(&self, date: NaiveDate) -> Result<Vec<PitcherGameContext>> {
        let url = format!("{}/schedule?sportId=1&date={}&hydrate=team,linescore,probablePitcher", self.base, date.format("%Y-%m-%d"));
        debug!(%url, "fetching schedule");
        Ok(probable_pitchers(&get(&url)?))
    }

    fn season_stats(&self, pitcher_id: i64) -> Result<Option<SeasonStats>> {
        let url = format!("{}/people/{pitcher_id}/stats?stats=season&group=pitching", self.base);
        debug!(%url, "fetching season stats");
        Ok(season_stats(&get(&url)?))
    }
}

/// Both sides of every game on the first listed date. A side without an announced starter or a
/// team name is left out.
pub fn probable_pitchers(schedule: &Value) -> Vec<PitcherGameContext> {
    let Some(games) = schedule["dates"][0]["games"].as_array() else { return Vec::new() };
    let mut pitchers = Vec::with_capacity(games.len() * 2);
    for game in games {
        for (side, other) in [("away", "home"), ("home", "away")] {
            let teams = &game["teams"];
            let Some(id) = teams[side]["probablePitcher"]["id"].as_i64() else { continue };
            let Some(team) = teams[side]["team"]["name"].as_str() else { continue };
            let Some(opponent) = teams[other]["team"]["name"].as_str() else { continue };
            pitchers.push(PitcherGameContext::new(id, team.to_owned(), opponent.to_owned()));
        }
    }
    pitchers
}

pub fn season_stats(response: &Value) -> Option<SeasonStats> {
    let split = &response["stats"][0]["splits"][0];
    let name = split["player"]["fullName"].as_str()?;
    let stat = split["stat"].as_object()?;
    let field = |key: &str| stat.get(key).and_then(number);
    Some(SeasonStats {
        name: name.to_owned(),
        era: field("era").unwrap_or(0.0),
        whip: field("whip").unwrap_or(0.0),
        strikeouts: field("strikeOuts").unwrap_or(0.0) as i64,
        walks: field("baseOnBalls").unwrap_or(0.0) as i64,
        games_started: field("gamesStarted").unwrap_or(1.0) as i64,
        hits: field("hits").unwrap_or(0.0) as i64,
        innings_pitched: field("inningsPitched").unwrap_or(1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn side(id: Option<i64>, team: &str) -> Value {
        match id {
            Some(id) => json!({ "probablePitcher": { "id": id, "fullName": "x" }, "team": { "name": team } }),
            None => json!({ "team": { "name": team } }),
        }
    }

    #[test]
    fn reads_both_sides_of_each_game() {
        let schedule = json!({
            "dates": [{
                "games": [
                    { "teams": { "away": side(Some(1), "Toronto Blue Jays"), "home": side(Some(2), "New York Yankees") } },
                    { "teams": { "away": side(None, "Boston Red Sox"), "home": side(Some(3), "Tampa Bay Rays") } },
                ]
            }]
        });
        let pitchers = probable_pitchers(&schedule);
        assert_eq!(pitchers, vec![
            PitcherGameContext::new(1, "Toronto Blue Jays".to_owned(), "New York Yankees".to_owned()),
            PitcherGameContext::new(2, "New York Yankees".to_owned(), "Toronto Blue Jays".to_owned()),
            PitcherGameContext::new(3, "Tampa Bay Rays".to_owned(), "Boston Red Sox".to_owned()),
        ]);
    }

    #[test]
    fn empty_schedule_has_no_pitchers() {
        assert!(probable_pitchers(&json!({ "dates": [] })).is_empty());
        assert!(probable_pitchers(&json!({})).is_empty());
    }

    #[test]
    fn parses_season_line() {
        let response = json!({
            "stats": [{
                "splits": [{
                    "player": { "id": 7, "fullName": "Kevin Gausman" },
                    "stat": {
                        "era": "3.12", "whip": "1.05", "strikeOuts": 190, "baseOnBalls": 41,
                        "gamesStarted": 29, "hits": 150, "inningsPitched": "172.1"
                    }
                }]
            }]
        });
        let stats = season_stats(&response).unwrap();
        assert_eq!(stats.name, "Kevin Gausman");
        assert_eq!(stats.era, 3.12);
        assert_eq!(stats.whip, 1.05);
        assert_eq!(stats.strikeouts, 190);
        assert_eq!(stats.walks, 41);
        assert_eq!(stats.games_started, 29);
        assert_eq!(stats.hits, 150);
        assert_eq!(stats.innings_pitched, 172.1);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let response = json!({ "stats": [{ "splits": [{ "player": { "fullName": "Rookie" }, "stat": { "era": "-.--" } }] }] });
        let stats = season_stats(&response).unwrap();
        assert_eq!(stats.era, 0.0);
        assert_eq!(stats.strikeouts, 0);
        assert_eq!(stats.games_started, 1);
        assert_eq!(stats.innings_pitched, 1.0);
    }

    #[test]
    fn no_splits_is_no_data() {
        assert_eq!(season_stats(&json!({ "stats": [] })), None);
        assert_eq!(season_stats(&json!({ "stats": [{ "splits": [] }] })), None);
    }
}
