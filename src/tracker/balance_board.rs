use std::sync::Arc;

use tracing::info;

use crate::models::balance::{RankedBalanceRow, Valuation};
use crate::models::token::build_tokens;
use crate::ranking::{rank, total_value, PriorityTable};
use crate::traits::{PriceFeed, WalletBalanceSource};
use crate::utils::helper::{format_usd, truncate_string};

/// Ranked view of a wallet's balances
pub struct BalanceBoard {
    balance_source: Arc<dyn WalletBalanceSource>,
    price_feed: Arc<dyn PriceFeed>,
    priority: PriorityTable,
    icon_base: String,
}

impl BalanceBoard {
    /// Create a new balance board
    pub fn new(
        balance_source: Arc<dyn WalletBalanceSource>,
        price_feed: Arc<dyn PriceFeed>,
        priority: PriorityTable,
        icon_base: impl Into<String>,
    ) -> Self {
        Self {
            balance_source,
            price_feed,
            priority,
            icon_base: icon_base.into(),
        }
    }

    /// Fetch balances and prices and rank them
    pub async fn refresh(&self) -> anyhow::Result<Vec<RankedBalanceRow>> {
        let balances = self.balance_source.fetch_balances().await?;
        let records = self.price_feed.fetch_prices().await?;
        let tokens = build_tokens(&records, &self.icon_base);

        Ok(rank(&balances, &self.priority, &tokens))
    }

    /// Refresh and log the ranked board. Returns the total USD value.
    pub async fn log_board(&self) -> anyhow::Result<f64> {
        let rows = self.refresh().await?;

        info!("{}", "=".repeat(80));
        info!("WALLET BALANCES");
        info!(
            "Timestamp: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        info!("{}", "-".repeat(80));

        if rows.is_empty() {
            info!("No balances to display");
        }

        for (i, row) in rows.iter().enumerate() {
            let value = match row.value {
                Valuation::Valued(v) => format_usd(v),
                _ => "Price not available".to_string(),
            };
            info!(
                "{}. {:<10} {:>12} on {} (priority {})  {}",
                i + 1,
                truncate_string(&row.currency, 10),
                row.formatted_amount,
                row.chain,
                row.priority,
                value
            );
        }

        let total = total_value(&rows);
        info!("{}", "-".repeat(80));
        info!("➤ Total Value: {}", format_usd(total));
        info!("{}", "=".repeat(80));

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::balance::WalletBalance;
    use crate::models::token::{RawPriceRecord, DEFAULT_ICON_BASE};
    use crate::providers::{StaticBalanceSource, StaticPriceFeed};

    fn board() -> BalanceBoard {
        let balances = StaticBalanceSource::new(vec![
            WalletBalance::new("Neo", "NEO", 3.0),
            WalletBalance::new("Osmosis", "OSMO", 100.0),
            WalletBalance::new("Solana", "SOL", 5.0),
            WalletBalance::new("Ethereum", "ETH", 0.0),
            WalletBalance::new("Ethereum", "PEPE", 1000.0),
        ]);
        let prices = StaticPriceFeed::new(vec![
            RawPriceRecord::new("NEO", 10.0),
            RawPriceRecord::new("OSMO", 0.5),
            RawPriceRecord::new("SOL", 100.0),
            RawPriceRecord::new("PEPE", 0.0),
        ]);

        BalanceBoard::new(
            Arc::new(balances),
            Arc::new(prices),
            PriorityTable::default(),
            DEFAULT_ICON_BASE,
        )
    }

    #[tokio::test]
    async fn refresh_ranks_fetched_balances() {
        let rows = board().refresh().await.unwrap();

        let order: Vec<&str> = rows.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(order, vec!["OSMO", "PEPE", "NEO"]);
        // zero-priced feed entries never become tokens
        assert_eq!(rows[1].value, Valuation::PriceUnknown);
    }

    #[tokio::test]
    async fn log_board_totals_priced_rows() {
        let total = board().log_board().await.unwrap();
        assert_eq!(total, 80.0);
    }
}
