use async_trait::async_trait;

use crate::models::swap::SwapReceipt;

/// Handler for swap settlement events
#[async_trait]
pub trait SwapEventHandler: Send + Sync {
    /// Called when a swap is committed and settlement begins
    async fn on_settlement_started(&self, receipt: &SwapReceipt);

    /// Called when the settlement delay has elapsed
    async fn on_settled(&self, receipt: &SwapReceipt);

    /// Handle an error raised while loading prices or settling
    async fn handle_error(&self, error: &anyhow::Error);
}
