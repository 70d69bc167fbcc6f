use anyhow::Result;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::post;

pub mod top_picks;

/// Outbound chat sink. Delivery is fire-and-forget: a failure is logged and swallowed here.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// A Discord-compatible webhook. `None` disables notifications.
pub struct Webhook {
    url: Option<String>,
}

impl Webhook {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    fn send(url: &str, message: &str) -> Result<()> {
        post(url, json!({ "content": message }))
    }
}

impl Notifier for Webhook {
    fn notify(&self, message: &str) {
        let Some(url) = self.url.as_deref() else {
            debug!("No webhook configured, skipping notification");
            return;
        };
        match Self::send(url, message) {
            Ok(()) => info!("Sent top picks to webhook"),
            Err(e) => warn!("Failed to send to Discord: {e:#}"),
        }
    }
}
