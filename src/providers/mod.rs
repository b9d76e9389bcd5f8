//! Price and balance providers

pub mod balance_provider;
pub mod price_provider;

// Re-export for convenience
pub use balance_provider::{JsonBalanceSource, StaticBalanceSource};
pub use price_provider::{HttpPriceFeed, StaticPriceFeed, DEFAULT_PRICE_FEED_URL};
