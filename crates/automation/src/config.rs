//! Automation engine settings, read from the environment.

use std::env;
use std::time::Duration;

use crate::DispatchError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the automation engine.
#[derive(Debug, Clone)]
pub struct AutomationConfig {
    /// Trigger endpoint. `None` disables outbound calls.
    pub webhook_url: Option<String>,
    /// Sent as the `x-webhook-secret` header when set.
    pub webhook_secret: Option<String>,
    pub timeout: Duration,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            webhook_secret: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AutomationConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Load from `AUTOMATION_WEBHOOK_URL`, `AUTOMATION_WEBHOOK_SECRET` and
    /// `AUTOMATION_TIMEOUT_SECS`, reading `.env` first if present.
    pub fn from_env() -> Result<Self, DispatchError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`AutomationConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DispatchError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty("AUTOMATION_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| DispatchError::InvalidConfig(format!(
                    "AUTOMATION_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                )))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            webhook_url: non_empty("AUTOMATION_WEBHOOK_URL"),
            webhook_secret: non_empty("AUTOMATION_WEBHOOK_SECRET"),
            timeout,
        })
    }
}
