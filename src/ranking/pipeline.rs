use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use super::priority::{PriorityTable, UNKNOWN_RANK};
use crate::models::balance::{RankedBalanceRow, Valuation, WalletBalance};
use crate::models::token::Token;
use crate::utils::helper::format_whole;

/// Point-in-time price lookup by currency symbol
pub trait PriceIndex {
    fn price(&self, currency: &str) -> Option<f64>;
}

impl PriceIndex for HashMap<String, f64> {
    fn price(&self, currency: &str) -> Option<f64> {
        self.get(currency).copied()
    }
}

impl PriceIndex for [Token] {
    fn price(&self, currency: &str) -> Option<f64> {
        self.iter().find(|t| t.currency == currency).map(|t| t.price)
    }
}

impl PriceIndex for Vec<Token> {
    fn price(&self, currency: &str) -> Option<f64> {
        self.as_slice().price(currency)
    }
}

/// Classify a single balance
pub fn value_balance<P>(balance: &WalletBalance, priority: &PriorityTable, prices: &P) -> Valuation
where
    P: PriceIndex + ?Sized,
{
    if priority.priority(&balance.chain) <= UNKNOWN_RANK || !(balance.amount > 0.0) {
        return Valuation::Excluded;
    }
    appraise(balance, prices)
}

fn appraise<P>(balance: &WalletBalance, prices: &P) -> Valuation
where
    P: PriceIndex + ?Sized,
{
    match prices.price(&balance.currency) {
        Some(price) => Valuation::Valued(price * balance.amount),
        None => Valuation::PriceUnknown,
    }
}

/// Filter, order, value and format balances for display.
///
/// Rows are ordered by chain priority, highest first. Equal priorities keep
/// their input order.
pub fn rank<P>(balances: &[WalletBalance], priority: &PriorityTable, prices: &P) -> Vec<RankedBalanceRow>
where
    P: PriceIndex + ?Sized,
{
    let mut retained: Vec<(i32, &WalletBalance)> = balances
        .iter()
        .map(|b| (priority.priority(&b.chain), b))
        .filter(|(rank, b)| *rank > UNKNOWN_RANK && b.amount > 0.0)
        .collect();

    // stable: ties stay in input order
    retained.sort_by(|a, b| compare_priority(a.0, b.0));

    let rows: Vec<RankedBalanceRow> = retained
        .into_iter()
        .map(|(rank, balance)| RankedBalanceRow {
            chain: balance.chain.clone(),
            currency: balance.currency.clone(),
            amount: balance.amount,
            priority: rank,
            value: appraise(balance, prices),
            formatted_amount: format_whole(balance.amount),
        })
        .collect();

    debug!("Ranked {} of {} balances", rows.len(), balances.len());
    rows
}

/// Descending by priority
fn compare_priority(lhs: i32, rhs: i32) -> Ordering {
    rhs.cmp(&lhs)
}

/// Sum of the USD values of priced rows
pub fn total_value(rows: &[RankedBalanceRow]) -> f64 {
    rows.iter().filter_map(|r| r.value.usd()).sum()
}
