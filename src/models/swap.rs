use chrono::{DateTime, Utc};
use serde::Serialize;

use super::token::Token;

/// Outcome of the balance ceiling check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Ok,
    InsufficientBalance(String),
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok)
    }

    /// User-facing message, if validation failed
    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Ok => None,
            Validation::InsufficientBalance(msg) => Some(msg.as_str()),
        }
    }
}

/// Result of one calculator evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Destination amount with six fractional digits
    pub destination_amount: Option<String>,
    /// Units of destination asset per unit of source asset
    pub rate: Option<f64>,
    pub validation: Validation,
}

/// Settlement state of the swap action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapStatus {
    #[default]
    Idle,
    Pending,
}

/// Record of a committed swap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapReceipt {
    pub from: Token,
    pub to: Token,
    pub source_amount: String,
    pub destination_amount: String,
    pub committed_at: DateTime<Utc>,
}

impl SwapReceipt {
    /// One-line summary for logs and notifications
    pub fn summary(&self) -> String {
        format!(
            "{} {} -> {} {}",
            self.source_amount, self.from.currency, self.destination_amount, self.to.currency
        )
    }
}
