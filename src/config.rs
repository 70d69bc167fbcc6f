use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use chrono_tz::Tz::America__Toronto;

use crate::util::statsapi::DEFAULT_API_BASE;

/// "Today" is the schedule date in this zone.
pub const TIMEZONE: Tz = America__Toronto;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// `None` disables notifications.
    pub webhook_url: Option<String>,
    pub api_base: String,
    pub date: Option<NaiveDate>,
    /// Courtesy pause after each stats request.
    pub delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).map(|value| value.trim().to_owned()).filter(|value| !value.is_empty());

        let date = match var("PITCHER_PROPS_DATE") {
            Some(date) => Some(NaiveDate::parse_from_str(&date, "%Y-%m-%d").with_context(|| format!("PITCHER_PROPS_DATE '{date}' is not a YYYY-MM-DD date"))?),
            None => None,
        };
        let delay = match var("PITCHER_PROPS_DELAY_MS") {
            Some(ms) => Duration::from_millis(ms.parse::<u64>().with_context(|| format!("PITCHER_PROPS_DELAY_MS '{ms}' is not a whole number of milliseconds"))?),
            None => DEFAULT_DELAY,
        };

        Ok(Self {
            webhook_url: var("DISCORD_WEBHOOK_URL"),
            api_base: var("MLB_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
            date,
            delay,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().with_timezone(&TIMEZONE).date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        Config::from_lookup(|key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned()))
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.webhook_url, None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.date, None);
        assert_eq!(config.delay, DEFAULT_DELAY);
    }

    #[test]
    fn blank_webhook_disables_notifications() {
        assert_eq!(config(&[("DISCORD_WEBHOOK_URL", "  ")]).unwrap().webhook_url, None);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("DISCORD_WEBHOOK_URL", "https://discord.com/api/webhooks/1/abc"),
            ("MLB_API_BASE", "http://localhost:8080/api/v1"),
            ("PITCHER_PROPS_DATE", "2024-06-01"),
            ("PITCHER_PROPS_DELAY_MS", "0"),
        ])
        .unwrap();
        assert_eq!(config.webhook_url.as_deref(), Some("https://discord.com/api/webhooks/1/abc"));
        assert_eq!(config.api_base, "http://localhost:8080/api/v1");
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(config.delay, Duration::ZERO);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("PITCHER_PROPS_DATE", "06/01/2024")]).is_err());
        assert!(config(&[("PITCHER_PROPS_DELAY_MS", "fast")]).is_err());
    }
}
