use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default location of the per-currency token icons
pub const DEFAULT_ICON_BASE: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// One entry of the raw price feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPriceRecord {
    pub currency: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RawPriceRecord {
    /// Create a priced record
    pub fn new(currency: impl Into<String>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            price: Some(price),
            date: None,
        }
    }

    /// Usable price, if any. Absent, zero, NaN and negative prices are all unusable.
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|p| *p > 0.0)
    }
}

/// A priced, displayable asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub currency: String,
    pub price: f64,
    pub icon: String,
}

impl Token {
    /// Create a token with its icon resolved against `icon_base`
    pub fn new(currency: impl Into<String>, price: f64, icon_base: &str) -> Self {
        let currency = currency.into();
        let icon = icon_url(icon_base, &currency);
        Self { currency, price, icon }
    }

    /// Whether the token carries a price the calculator can use
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }

    /// Same asset, compared by currency symbol
    pub fn same_asset(&self, other: &Token) -> bool {
        self.currency == other.currency
    }
}

/// Icon URI for a currency: `<base>/<currency>.svg`
pub fn icon_url(icon_base: &str, currency: &str) -> String {
    format!("{}/{}.svg", icon_base.trim_end_matches('/'), currency)
}

/// Build the token list from raw feed records.
///
/// Records without a usable price are dropped. Duplicate currencies keep the
/// position of their first occurrence and the price of their last.
pub fn build_tokens(records: &[RawPriceRecord], icon_base: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let Some(price) = record.usable_price() else {
            continue;
        };

        match index.get(record.currency.as_str()) {
            Some(&i) => tokens[i].price = price,
            None => {
                index.insert(record.currency.as_str(), tokens.len());
                tokens.push(Token::new(record.currency.clone(), price, icon_base));
            }
        }
    }

    tokens
}

/// Find a token by currency symbol
pub fn find_token<'a>(tokens: &'a [Token], currency: &str) -> Option<&'a Token> {
    tokens.iter().find(|t| t.currency == currency)
}

/// Tokens offered by a picker: everything except `exclude`, narrowed by a
/// case-insensitive substring match on the currency.
pub fn selectable_tokens<'a>(
    tokens: &'a [Token],
    exclude: Option<&Token>,
    search: &str,
) -> Vec<&'a Token> {
    let needle = search.to_lowercase();
    tokens
        .iter()
        .filter(|t| exclude.map_or(true, |ex| !t.same_asset(ex)))
        .filter(|t| t.currency.to_lowercase().contains(&needle))
        .collect()
}
