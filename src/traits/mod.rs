//! Collaborator traits for prices, balances and swap events

pub mod balance_source;
pub mod event_handler;
pub mod price_feed;

// Re-export for convenience
pub use balance_source::WalletBalanceSource;
pub use event_handler::SwapEventHandler;
pub use price_feed::PriceFeed;
