use std::sync::Arc;

use async_trait::async_trait;

use crate::models::swap::SwapReceipt;
use crate::traits::event_handler::SwapEventHandler;

/// Delivers every settlement event to each handler in registration order
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn SwapEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn SwapEventHandler>) {
        self.handlers.push(handler);
    }

    /// Builder form of [`add_handler`](Self::add_handler)
    pub fn with_handler(mut self, handler: Arc<dyn SwapEventHandler>) -> Self {
        self.add_handler(handler);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwapEventHandler for CompositeEventHandler {
    async fn on_settlement_started(&self, receipt: &SwapReceipt) {
        for handler in &self.handlers {
            handler.on_settlement_started(receipt).await;
        }
    }

    async fn on_settled(&self, receipt: &SwapReceipt) {
        for handler in &self.handlers {
            handler.on_settled(receipt).await;
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    use super::*;
    use crate::handlers::journal::ReceiptJournal;
    use crate::models::token::{Token, DEFAULT_ICON_BASE};

    #[derive(Default)]
    struct Counting {
        started: AtomicUsize,
        settled: AtomicUsize,
        errors: AtomicUsize,
    }

    #[async_trait]
    impl SwapEventHandler for Counting {
        async fn on_settlement_started(&self, _receipt: &SwapReceipt) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }

        async fn on_settled(&self, _receipt: &SwapReceipt) {
            self.settled.fetch_add(1, Ordering::SeqCst);
        }

        async fn handle_error(&self, _error: &anyhow::Error) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn fans_out_to_every_handler() {
        let a = Arc::new(Counting::default());
        let b = Arc::new(Counting::default());

        let mut composite = CompositeEventHandler::new();
        composite.add_handler(a.clone());
        composite.add_handler(b.clone());
        assert_eq!(composite.len(), 2);

        let receipt = SwapReceipt {
            from: Token::new("ETH", 2000.0, DEFAULT_ICON_BASE),
            to: Token::new("USDC", 1.0, DEFAULT_ICON_BASE),
            source_amount: "1".into(),
            destination_amount: "2000.000000".into(),
            committed_at: Utc::now(),
        };

        composite.on_settlement_started(&receipt).await;
        composite.on_settled(&receipt).await;
        composite.handle_error(&anyhow::anyhow!("boom")).await;

        for handler in [&a, &b] {
            assert_eq!(handler.started.load(Ordering::SeqCst), 1);
            assert_eq!(handler.settled.load(Ordering::SeqCst), 1);
            assert_eq!(handler.errors.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn journal_and_counter_both_see_settlement() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipts.jsonl");
        let counter = Arc::new(Counting::default());

        let composite = CompositeEventHandler::new()
            .with_handler(Arc::new(ReceiptJournal::new(&path)))
            .with_handler(counter.clone());

        let receipt = SwapReceipt {
            from: Token::new("OSMO", 0.38, DEFAULT_ICON_BASE),
            to: Token::new("USDC", 1.0, DEFAULT_ICON_BASE),
            source_amount: "10".into(),
            destination_amount: "3.800000".into(),
            committed_at: Utc::now(),
        };
        composite.on_settled(&receipt).await;

        assert_eq!(counter.settled.load(Ordering::SeqCst), 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"destination_amount\":\"3.800000\""));
    }
}
