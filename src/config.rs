use crate::entity::{CurrencyCode, DisplaySettings};
use log::warn;
use std::env;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend origin serving `/api/wallet/balance` and `/api/offramp/rates`
    pub api_base_url: String,

    /// Bearer token for the backend; without it fetches are skipped
    pub api_token: Option<String>,

    pub display_currency: CurrencyCode,

    pub haptics_enabled: bool,

    /// Seconds between balance refreshes while the view is shown
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            display_currency: CurrencyCode::Usd,
            haptics_enabled: false,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Build configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let display_currency = match lookup("DISPLAY_CURRENCY") {
            Some(code) => code.parse::<CurrencyCode>().unwrap_or_else(|e| {
                warn!("{}, showing balances in USD", e);
                CurrencyCode::Usd
            }),
            None => defaults.display_currency,
        };

        let poll_interval_secs = lookup("POLL_INTERVAL_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(defaults.poll_interval_secs);

        Self {
            api_base_url: lookup("API_BASE_URL").unwrap_or(defaults.api_base_url),
            api_token: lookup("API_TOKEN").filter(|t| !t.trim().is_empty()),
            display_currency,
            haptics_enabled: lookup("HAPTICS_ENABLED")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(defaults.haptics_enabled),
            poll_interval_secs,
        }
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            currency: self.display_currency,
            haptics_enabled: self.haptics_enabled,
        }
    }
}
