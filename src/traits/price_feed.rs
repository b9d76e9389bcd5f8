use async_trait::async_trait;

use crate::models::token::RawPriceRecord;

/// Source of spot prices
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch the current raw price records
    async fn fetch_prices(&self) -> anyhow::Result<Vec<RawPriceRecord>>;
}
