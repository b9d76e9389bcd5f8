use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::models::token::RawPriceRecord;
use crate::traits::price_feed::PriceFeed;

/// Default endpoint serving the price list
pub const DEFAULT_PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";

/// HTTP price feed. The last successful fetch is cached and served again
/// when a later request fails.
pub struct HttpPriceFeed {
    client: Client,
    url: String,
    /// currency -> (first position in the feed, last usable price)
    price_cache: Arc<DashMap<String, (usize, f64)>>,
}

impl HttpPriceFeed {
    /// Create a new HTTP price feed
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            price_cache: Arc::new(DashMap::new()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Last fetched usable price for a currency
    pub fn cached_price(&self, currency: &str) -> Option<f64> {
        self.price_cache.get(currency).map(|entry| entry.1)
    }

    /// Replace the cache with the usable prices of a fresh fetch
    fn remember(&self, records: &[RawPriceRecord]) {
        self.price_cache.clear();
        for (position, record) in records.iter().enumerate() {
            if let Some(price) = record.usable_price() {
                self.price_cache
                    .entry(record.currency.clone())
                    .and_modify(|entry| entry.1 = price)
                    .or_insert((position, price));
            }
        }
    }

    /// Cached prices as records, in feed order
    fn cached_records(&self) -> Vec<RawPriceRecord> {
        let mut cached: Vec<(usize, RawPriceRecord)> = self
            .price_cache
            .iter()
            .map(|entry| {
                let (position, price) = *entry.value();
                (position, RawPriceRecord::new(entry.key().clone(), price))
            })
            .collect();
        cached.sort_by_key(|(position, _)| *position);
        cached.into_iter().map(|(_, record)| record).collect()
    }

    async fn request_prices(&self) -> anyhow::Result<Vec<RawPriceRecord>> {
        self.client
            .get(&self.url)
            .header("accept", "application/json")
            .send()
            .await
            .context("price feed: request failed")?
            .error_for_status()
            .context("price feed: non-success status")?
            .json()
            .await
            .context("price feed: parse JSON failed")
    }
}

impl Default for HttpPriceFeed {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_FEED_URL)
    }
}

#[async_trait]
impl PriceFeed for HttpPriceFeed {
    async fn fetch_prices(&self) -> anyhow::Result<Vec<RawPriceRecord>> {
        debug!("Fetching prices from {}", self.url);

        match self.request_prices().await {
            Ok(records) => {
                self.remember(&records);
                info!("Fetched {} price records", records.len());
                Ok(records)
            }
            Err(e) if !self.price_cache.is_empty() => {
                warn!(
                    "Price fetch failed, serving {} cached prices: {:#}",
                    self.price_cache.len(),
                    e
                );
                Ok(self.cached_records())
            }
            Err(e) => Err(e),
        }
    }
}

/// Price feed backed by a fixed list of records
#[derive(Debug, Clone, Default)]
pub struct StaticPriceFeed {
    records: Vec<RawPriceRecord>,
}

impl StaticPriceFeed {
    pub fn new(records: Vec<RawPriceRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl PriceFeed for StaticPriceFeed {
    async fn fetch_prices(&self) -> anyhow::Result<Vec<RawPriceRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_keeps_last_usable_price() {
        let feed = HttpPriceFeed::default();
        feed.remember(&[
            RawPriceRecord::new("ETH", 1900.0),
            RawPriceRecord::new("ETH", 2000.0),
            RawPriceRecord::new("ETH", 0.0),
            RawPriceRecord::new("DEAD", 0.0),
        ]);

        assert_eq!(feed.cached_price("ETH"), Some(2000.0));
        assert_eq!(feed.cached_price("DEAD"), None);
        assert_eq!(feed.url(), DEFAULT_PRICE_FEED_URL);
    }

    #[test]
    fn new_fetch_replaces_cache() {
        let feed = HttpPriceFeed::default();
        feed.remember(&[RawPriceRecord::new("ETH", 2000.0), RawPriceRecord::new("OSMO", 0.4)]);
        feed.remember(&[RawPriceRecord::new("USDC", 1.0)]);

        assert_eq!(feed.cached_price("ETH"), None);
        assert_eq!(feed.cached_records(), vec![RawPriceRecord::new("USDC", 1.0)]);
    }

    // nothing listens on the discard port, so the request is refused
    const UNREACHABLE_URL: &str = "http://127.0.0.1:9/prices.json";

    #[tokio::test]
    async fn failed_fetch_serves_cached_prices_in_feed_order() {
        let feed = HttpPriceFeed::new(UNREACHABLE_URL);
        feed.remember(&[
            RawPriceRecord::new("ETH", 1900.0),
            RawPriceRecord::new("USDC", 1.0),
            RawPriceRecord::new("ETH", 2000.0),
            RawPriceRecord::new("OSMO", 0.38),
        ]);

        let records = feed.fetch_prices().await.unwrap();
        assert_eq!(
            records,
            vec![
                RawPriceRecord::new("ETH", 2000.0),
                RawPriceRecord::new("USDC", 1.0),
                RawPriceRecord::new("OSMO", 0.38),
            ]
        );
    }

    #[tokio::test]
    async fn failed_fetch_without_cache_is_an_error() {
        let feed = HttpPriceFeed::new(UNREACHABLE_URL);
        let err = feed.fetch_prices().await.unwrap_err();
        assert!(err.to_string().contains("price feed"));
    }

    #[tokio::test]
    async fn static_feed_returns_its_records() {
        let feed = StaticPriceFeed::new(vec![RawPriceRecord::new("USDC", 1.0)]);
        let records = feed.fetch_prices().await.unwrap();
        assert_eq!(records, vec![RawPriceRecord::new("USDC", 1.0)]);
    }
}
