use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use crate::models::balance::WalletBalance;
use crate::traits::balance_source::WalletBalanceSource;

/// Balances read from a JSON file holding an array of wallet balances
pub struct JsonBalanceSource {
    path: PathBuf,
}

impl JsonBalanceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WalletBalanceSource for JsonBalanceSource {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read balances from {}", self.path.display()))?;

        let balances: Vec<WalletBalance> = serde_json::from_slice(&raw)
            .with_context(|| format!("Invalid balances JSON in {}", self.path.display()))?;

        info!("Loaded {} balances from {}", balances.len(), self.path.display());
        Ok(balances)
    }
}

/// Balances held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticBalanceSource {
    balances: Vec<WalletBalance>,
}

impl StaticBalanceSource {
    pub fn new(balances: Vec<WalletBalance>) -> Self {
        Self { balances }
    }
}

#[async_trait]
impl WalletBalanceSource for StaticBalanceSource {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        Ok(self.balances.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn reads_balances_with_blockchain_alias() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"blockchain": "Osmosis", "currency": "OSMO", "amount": 12.5}},
                {{"chain": "Ethereum", "currency": "ETH", "amount": 0.3}}
            ]"#
        )
        .unwrap();

        let source = JsonBalanceSource::new(file.path());
        let balances = source.fetch_balances().await.unwrap();

        assert_eq!(
            balances,
            vec![
                WalletBalance::new("Osmosis", "OSMO", 12.5),
                WalletBalance::new("Ethereum", "ETH", 0.3),
            ]
        );
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let source = JsonBalanceSource::new("/nonexistent/balances.json");
        let err = source.fetch_balances().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read balances"));
    }
}
