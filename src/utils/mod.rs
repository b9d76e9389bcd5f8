//! Formatting and parsing helpers

pub mod helper;

pub use helper::{format_fixed, format_usd, format_whole, parse_amount};
