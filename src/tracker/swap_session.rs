use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::models::swap::SwapReceipt;
use crate::models::token::{build_tokens, find_token, selectable_tokens, Token};
use crate::swap::form::{SwapEvent, SwapForm};
use crate::swap::settlement::{SettlementHandle, SettlementTimer};
use crate::traits::event_handler::SwapEventHandler;
use crate::traits::price_feed::PriceFeed;

/// Message shown when the initial price load fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load token prices.";

/// Readiness of a session, decided by the initial price load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Ready,
    Failed(String),
}

/// Which side of the swap a token picker serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

/// A swap form bound to a loaded token list and a settlement timer
pub struct SwapSession {
    tokens: Vec<Token>,
    load_state: LoadState,
    form: Arc<Mutex<SwapForm>>,
    timer: SettlementTimer,
    settlement: Mutex<Option<SettlementHandle>>,
    event_handler: Arc<dyn SwapEventHandler>,
}

impl SwapSession {
    /// Create a session over an already built token list
    pub fn new(
        tokens: Vec<Token>,
        config: &Config,
        event_handler: Arc<dyn SwapEventHandler>,
    ) -> Self {
        let from = find_token(&tokens, &config.default_from).cloned();
        let to = find_token(&tokens, &config.default_to).cloned();
        let form = SwapForm::new(config.balance_ceiling).with_tokens(from, to);

        Self {
            tokens,
            load_state: LoadState::Ready,
            form: Arc::new(Mutex::new(form)),
            timer: SettlementTimer::new(config.settlement_delay),
            settlement: Mutex::new(None),
            event_handler,
        }
    }

    /// Fetch prices and build a session. A failed fetch yields a session in
    /// [`LoadState::Failed`] with no tokens.
    pub async fn load(
        feed: &dyn PriceFeed,
        config: &Config,
        event_handler: Arc<dyn SwapEventHandler>,
    ) -> Self {
        match feed.fetch_prices().await {
            Ok(records) => {
                let tokens = build_tokens(&records, &config.icon_base_url);
                info!("Loaded {} tokens from {} price records", tokens.len(), records.len());
                Self::new(tokens, config, event_handler)
            }
            Err(e) => {
                error!("Failed to fetch token prices: {:#}", e);
                event_handler.handle_error(&e).await;

                let form = SwapForm::new(config.balance_ceiling).with_error(LOAD_FAILED_MESSAGE);
                Self {
                    tokens: Vec::new(),
                    load_state: LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()),
                    form: Arc::new(Mutex::new(form)),
                    timer: SettlementTimer::new(config.settlement_delay),
                    settlement: Mutex::new(None),
                    event_handler,
                }
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Current form snapshot
    pub async fn snapshot(&self) -> SwapForm {
        self.form.lock().await.clone()
    }

    async fn dispatch(&self, event: SwapEvent) -> SwapForm {
        let mut form = self.form.lock().await;
        *form = form.clone().apply(event);
        form.clone()
    }

    /// Select the source token by currency
    pub async fn select_from(&self, currency: &str) -> anyhow::Result<SwapForm> {
        let token = self.token(currency)?;
        Ok(self.dispatch(SwapEvent::SelectFrom(token)).await)
    }

    /// Select the destination token by currency
    pub async fn select_to(&self, currency: &str) -> anyhow::Result<SwapForm> {
        let token = self.token(currency)?;
        Ok(self.dispatch(SwapEvent::SelectTo(token)).await)
    }

    pub async fn edit_amount(&self, value: &str) -> SwapForm {
        self.dispatch(SwapEvent::EditAmount(value.to_string())).await
    }

    pub async fn reverse(&self) -> SwapForm {
        self.dispatch(SwapEvent::Reverse).await
    }

    fn token(&self, currency: &str) -> anyhow::Result<Token> {
        find_token(&self.tokens, currency)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown token {}", currency))
    }

    /// Tokens a picker for `side` offers, excluding the opposite side's selection
    pub async fn picker_tokens(&self, side: Side, search: &str) -> Vec<Token> {
        let form = self.form.lock().await;
        let exclude = match side {
            Side::From => form.to.as_ref(),
            Side::To => form.from.as_ref(),
        };
        selectable_tokens(&self.tokens, exclude, search)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Commit the swap. Returns the receipt when settlement started, `None`
    /// when the form was not submittable or a settlement is already pending.
    pub async fn commit(&self) -> Option<SwapReceipt> {
        let mut form = self.form.lock().await;
        if form.is_pending() {
            debug!("Commit ignored: settlement already pending");
            return None;
        }
        if !form.can_submit() {
            debug!("Commit ignored: {}", form.action_label());
            return None;
        }
        let receipt = form.receipt()?;
        *form = form.clone().apply(SwapEvent::Commit);

        self.event_handler.on_settlement_started(&receipt).await;

        let shared = self.form.clone();
        let handler = self.event_handler.clone();
        let settled = receipt.clone();
        let handle = self.timer.schedule(move || async move {
            let was_pending = {
                let mut form = shared.lock().await;
                let was_pending = form.is_pending();
                *form = form.clone().apply(SwapEvent::Settled);
                was_pending
            };
            if was_pending {
                handler.on_settled(&settled).await;
            }
        });

        // stored before the form lock is released so a cancel always finds it
        *self.settlement.lock().await = Some(handle);
        drop(form);

        Some(receipt)
    }

    /// Cancel a pending settlement. Returns `false` when nothing is pending,
    /// including a settlement that has already been applied.
    pub async fn cancel_settlement(&self) -> bool {
        let mut form = self.form.lock().await;
        if !form.is_pending() {
            return false;
        }

        // the settlement task applies `Settled` under this same lock
        if let Some(handle) = self.settlement.lock().await.as_ref() {
            handle.cancel();
        }
        *form = form.clone().apply(SwapEvent::Cancelled);
        warn!("Pending settlement cancelled");
        true
    }

    /// Wait for the latest settlement. Returns whether it ran to completion.
    pub async fn wait_for_settlement(&self) -> bool {
        let waiter = match self.settlement.lock().await.as_ref() {
            Some(handle) => handle.waiter(),
            None => return false,
        };
        waiter.wait().await
    }
}
