//! Environment-driven configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use crate::models::token::DEFAULT_ICON_BASE;
use crate::providers::price_provider::DEFAULT_PRICE_FEED_URL;
use crate::swap::settlement::DEFAULT_SETTLEMENT_DELAY;

/// Spendable amount of the source asset when none is configured
pub const DEFAULT_BALANCE_CEILING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub price_feed_url: String,
    pub icon_base_url: String,
    pub balance_ceiling: f64,
    pub settlement_delay: Duration,
    pub default_from: String,
    pub default_to: String,
    pub balances_file: Option<PathBuf>,
    pub receipts_file: Option<PathBuf>,
    pub swap_amount: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_feed_url: DEFAULT_PRICE_FEED_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE.to_string(),
            balance_ceiling: DEFAULT_BALANCE_CEILING,
            settlement_delay: DEFAULT_SETTLEMENT_DELAY,
            default_from: "ETH".to_string(),
            default_to: "USDC".to_string(),
            balances_file: None,
            receipts_file: None,
            swap_amount: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let balance_ceiling = match lookup("BALANCE_CEILING") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid BALANCE_CEILING: {}", raw))?,
            None => defaults.balance_ceiling,
        };

        let settlement_delay = match lookup("SETTLEMENT_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid SETTLEMENT_DELAY_MS: {}", raw))?,
            ),
            None => defaults.settlement_delay,
        };

        Ok(Self {
            price_feed_url: lookup("PRICE_FEED_URL").unwrap_or(defaults.price_feed_url),
            icon_base_url: lookup("ICON_BASE_URL").unwrap_or(defaults.icon_base_url),
            balance_ceiling,
            settlement_delay,
            default_from: lookup("DEFAULT_FROM_TOKEN").unwrap_or(defaults.default_from),
            default_to: lookup("DEFAULT_TO_TOKEN").unwrap_or(defaults.default_to),
            balances_file: lookup("BALANCES_FILE").map(PathBuf::from),
            receipts_file: lookup("RECEIPTS_FILE").map(PathBuf::from),
            swap_amount: lookup("SWAP_AMOUNT"),
        })
    }
}
