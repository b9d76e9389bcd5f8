use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use swap_portfolio::{
    BalanceBoard, CompositeEventHandler, Config, ConsoleEventHandler, HttpPriceFeed,
    JsonBalanceSource, LoadState, PriorityTable, ReceiptJournal, StaticBalanceSource,
    SwapSession, WalletBalance, WalletBalanceSource,
};

/// Balances shown when no balances file is configured
fn sample_balances() -> Vec<WalletBalance> {
    vec![
        WalletBalance::new("Osmosis", "OSMO", 120.4),
        WalletBalance::new("Ethereum", "ETH", 1.75),
        WalletBalance::new("Arbitrum", "USDC", 250.0),
        WalletBalance::new("Zilliqa", "ZIL", 0.0),
        WalletBalance::new("Neo", "NEO", 12.5),
        WalletBalance::new("Solana", "SOL", 4.0),
    ]
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_file(true)
        .with_line_number(true)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let config = Config::from_env()?;

        info!("Initializing swap portfolio v{}...", swap_portfolio::VERSION);
        info!("Price feed: {}", config.price_feed_url);
        info!("Balance ceiling: {}", config.balance_ceiling);

        let price_feed = Arc::new(HttpPriceFeed::new(config.price_feed_url.clone()));
        let balance_source: Arc<dyn WalletBalanceSource> = match &config.balances_file {
            Some(path) => Arc::new(JsonBalanceSource::new(path.clone())),
            None => {
                warn!("BALANCES_FILE not set, using sample balances");
                Arc::new(StaticBalanceSource::new(sample_balances()))
            }
        };

        let board = BalanceBoard::new(
            balance_source,
            price_feed.clone(),
            PriorityTable::default(),
            config.icon_base_url.clone(),
        );
        if let Err(e) = board.log_board().await {
            error!("Failed to render balances: {:#}", e);
        }

        let mut handlers =
            CompositeEventHandler::new().with_handler(Arc::new(ConsoleEventHandler::new()));
        if let Some(path) = &config.receipts_file {
            info!("Journaling settled swaps to {}", path.display());
            handlers.add_handler(Arc::new(ReceiptJournal::new(path.clone())));
        }

        let session = SwapSession::load(price_feed.as_ref(), &config, Arc::new(handlers)).await;

        if let LoadState::Failed(message) = session.load_state() {
            error!("{}", message);
            return Ok(());
        }

        let Some(amount) = config.swap_amount.as_deref() else {
            info!("SWAP_AMOUNT not set, skipping swap");
            return Ok(());
        };

        let form = session.edit_amount(amount).await;
        info!(
            "Quote: {} {} -> {} {}",
            form.source_amount,
            form.from.as_ref().map_or("?", |t| t.currency.as_str()),
            form.destination_amount,
            form.to.as_ref().map_or("?", |t| t.currency.as_str()),
        );

        if session.commit().await.is_none() {
            warn!("Swap not submitted: {}", form.action_label());
            return Ok(());
        }

        if !session.wait_for_settlement().await {
            warn!("Settlement did not complete");
        }
        info!("Shutting down...");

        Ok(())
    })
}
