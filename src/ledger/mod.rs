//! Ledger views computed from the stored bets: balance, adjustments,
//! filter options, filtering/sorting and the profit/loss curve.

pub mod dates;
pub mod filter;
pub mod pnl;

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Bet, BetKind};
use crate::stats::{format_currency, parse_currency_opt};

pub use dates::{display_date, month_bounds, normalize_date_key};
pub use filter::{sort_bets, BetFilter, SortDir, SortKey};
pub use pnl::{daily_pnl, PnlPoint};

/// Sum of every row's Balance, adjustments and open bets included.
///
/// Each row's Balance is summed as stored; it is not treated as a running
/// snapshot. The sum saturates at the `Decimal` bounds.
pub fn current_balance(bets: &[Bet]) -> Decimal {
    bets.iter()
        .map(|b| parse_currency_opt(b.balance.as_deref()))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// A credit, deposit or withdrawal row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub date: Option<String>,
    pub amount: String,
}

/// Ledger adjustments, newest first. Rows with unreadable dates sort last.
pub fn ledger_adjustments(bets: &[Bet]) -> Vec<Adjustment> {
    let mut rows: Vec<&Bet> = bets
        .iter()
        .filter(|b| b.kind() == BetKind::Adjustment)
        .collect();
    rows.sort_by_key(|b| std::cmp::Reverse(b.date.as_deref().and_then(normalize_date_key)));

    rows.into_iter()
        .map(|b| Adjustment {
            date: b.date.clone(),
            amount: format_currency(parse_currency_opt(b.balance.as_deref())),
        })
        .collect()
}

/// Choices for the type filter: every distinct upper-cased type except
/// `CREDIT`, plus `SINGLES`, sorted.
pub fn type_filter_options(bets: &[Bet]) -> Vec<String> {
    let mut options: BTreeSet<String> = bets
        .iter()
        .filter_map(|b| b.bet_type.as_deref())
        .map(str::to_uppercase)
        .filter(|t| !t.is_empty() && t != "CREDIT")
        .collect();
    options.insert("SINGLES".to_string());
    options.into_iter().collect()
}
