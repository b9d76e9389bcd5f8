//! Orchestrators wiring providers to the ranking and swap logic

pub mod balance_board;
pub mod swap_session;

pub use balance_board::BalanceBoard;
pub use swap_session::{LoadState, Side, SwapSession, LOAD_FAILED_MESSAGE};
