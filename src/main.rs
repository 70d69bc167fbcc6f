use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::posts::Webhook;
use crate::util::statsapi::StatsApi;

pub mod config;
pub mod posts;
pub mod props;
pub mod report;
pub mod util;

fn main() {
    init_tracing();
    if let Err(e) = main0() {
        error!("Error while picking pitcher props: {e:#}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main0() -> Result<()> {
    let config = Config::from_env()?;
    let date = config.today();
    let api = StatsApi::new(&config.api_base);
    let webhook = Webhook::new(config.webhook_url.clone());
    info!(%date, api = %config.api_base, notifications = webhook.is_enabled(), "Picking pitcher props");
    report::run(&api, &webhook, date, config.delay);
    Ok(())
}

pub fn get(url: &str) -> Result<Value> {
    ureq::get(url)
        .call()
        .with_context(|| format!("Request to {url} failed"))?
        .into_json::<Value>()
        .context("Response was not a valid json")
}

/// The url is left out of errors; webhook urls carry their token.
pub fn post(url: &str, body: Value) -> Result<()> {
    match ureq::post(url).send_json(body) {
        Ok(_) => Ok(()),
        Err(ureq::Error::Status(code, _)) => Err(anyhow!("Webhook answered with status {code}")),
        Err(e) => Err(anyhow!("Webhook request failed: {}", e.kind())),
    }
}
