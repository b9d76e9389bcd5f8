use async_trait::async_trait;
use tracing::{error, info};

use crate::models::swap::SwapReceipt;
use crate::traits::event_handler::SwapEventHandler;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwapEventHandler for ConsoleEventHandler {
    async fn on_settlement_started(&self, receipt: &SwapReceipt) {
        info!("Swap committed: {}", receipt.summary());
        info!("     Rate source: {} @ ${}", receipt.from.currency, receipt.from.price);
        info!("     Rate target: {} @ ${}", receipt.to.currency, receipt.to.price);
        info!(
            "     Committed at: {}",
            receipt.committed_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    async fn on_settled(&self, receipt: &SwapReceipt) {
        info!("Swap settled: {}", receipt.summary());
        info!("{}", "=".repeat(80));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        error!("Swap error: {:#}", error);
    }
}
