use serde::{Deserialize, Serialize};

/// A wallet balance as reported by the balance source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(alias = "blockchain")]
    pub chain: String,
    pub currency: String,
    pub amount: f64,
}

impl WalletBalance {
    /// Create a new wallet balance
    pub fn new(chain: impl Into<String>, currency: impl Into<String>, amount: f64) -> Self {
        Self {
            chain: chain.into(),
            currency: currency.into(),
            amount,
        }
    }
}

/// Valuation outcome for a single balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Valuation {
    /// USD value of the balance
    Valued(f64),
    /// Balance is displayed but its currency has no price
    PriceUnknown,
    /// Balance does not reach the display (unknown chain or empty)
    Excluded,
}

impl Valuation {
    pub fn usd(&self) -> Option<f64> {
        match self {
            Valuation::Valued(v) => Some(*v),
            _ => None,
        }
    }
}

/// One row of the ranked balance view
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBalanceRow {
    pub chain: String,
    pub currency: String,
    pub amount: f64,
    pub priority: i32,
    pub value: Valuation,
    pub formatted_amount: String,
}

impl RankedBalanceRow {
    /// USD value, NaN when the currency has no price
    pub fn usd_value(&self) -> f64 {
        self.value.usd().unwrap_or(f64::NAN)
    }

    /// Key by currency alone.
    ///
    /// Not unique: the same asset held on two chains yields two rows with the
    /// same display key. Use [`RankedBalanceRow::row_key`] to reconcile rows.
    pub fn display_key(&self) -> &str {
        &self.currency
    }

    /// Unique key of the row
    pub fn row_key(&self) -> (&str, &str) {
        (&self.chain, &self.currency)
    }
}
