use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::models::swap::SwapReceipt;
use crate::traits::event_handler::SwapEventHandler;

#[derive(Serialize)]
struct JournalLine<'a> {
    event: &'a str,
    #[serde(flatten)]
    receipt: &'a SwapReceipt,
}

/// Appends settled swaps to a JSON-lines file
pub struct ReceiptJournal {
    path: PathBuf,
}

impl ReceiptJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn append(&self, event: &str, receipt: &SwapReceipt) -> anyhow::Result<()> {
        let mut line = serde_json::to_vec(&JournalLine { event, receipt })?;
        line.push(b'\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open receipt journal {}", self.path.display()))?;
        file.write_all(&line)
            .await
            .with_context(|| format!("Failed to write receipt journal {}", self.path.display()))?;

        debug!("Journaled {} swap to {}", event, self.path.display());
        Ok(())
    }
}

#[async_trait]
impl SwapEventHandler for ReceiptJournal {
    async fn on_settlement_started(&self, _receipt: &SwapReceipt) {}

    async fn on_settled(&self, receipt: &SwapReceipt) {
        if let Err(e) = self.append("settled", receipt).await {
            warn!("{:#}", e);
        }
    }

    async fn handle_error(&self, _error: &anyhow::Error) {}
}
