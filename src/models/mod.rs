//! Data models for balances, tokens and swaps

pub mod balance;
pub mod swap;
pub mod token;

// Re-export for convenience
pub use balance::{RankedBalanceRow, Valuation, WalletBalance};
pub use swap::{Conversion, SwapReceipt, SwapStatus, Validation};
pub use token::{build_tokens, RawPriceRecord, Token};
