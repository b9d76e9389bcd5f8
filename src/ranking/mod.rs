//! Balance ranking pipeline

pub mod pipeline;
pub mod priority;

pub use pipeline::{rank, total_value, value_balance, PriceIndex};
pub use priority::{PriorityTable, UNKNOWN_RANK};
