//! Rate conversion calculator, swap form state and settlement simulation

pub mod calculator;
pub mod form;
pub mod settlement;

pub use calculator::{convert, exchange_rate, validate};
pub use form::{SwapEvent, SwapForm};
pub use settlement::{SettlementHandle, SettlementTimer, SettlementWaiter, DEFAULT_SETTLEMENT_DELAY};
