//! Swap Portfolio Library
//!
//! Ranks wallet balances for display and converts amounts between priced
//! tokens, with a simulated settlement for committed swaps.

// Public modules - these are the API surface
pub mod config;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod ranking;
pub mod swap;
pub mod tracker;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::Config;
pub use handlers::{CompositeEventHandler, ConsoleEventHandler, ReceiptJournal};
pub use models::{
    build_tokens, Conversion, RankedBalanceRow, RawPriceRecord, SwapReceipt, SwapStatus, Token,
    Validation, Valuation, WalletBalance,
};
pub use providers::{HttpPriceFeed, JsonBalanceSource, StaticBalanceSource, StaticPriceFeed};
pub use ranking::{rank, PriceIndex, PriorityTable, UNKNOWN_RANK};
pub use swap::{convert, SettlementTimer, SwapEvent, SwapForm};
pub use tracker::{BalanceBoard, LoadState, SwapSession};
pub use traits::{PriceFeed, SwapEventHandler, WalletBalanceSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
