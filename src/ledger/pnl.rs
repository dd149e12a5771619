use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Bet, BetResult};
use crate::stats::parse_currency_opt;

use super::dates::normalize_date_key;

/// One point on the cumulative profit/loss curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlPoint {
    /// `None` for the zero baseline that opens every non-empty series.
    pub date: Option<NaiveDate>,
    /// `MM/DD` axis label, empty for the baseline.
    pub label: String,
    pub daily_pnl: Decimal,
    pub cumulative_pnl: Decimal,
}

/// Profit of a single settled wager: `To_Win` on a win, minus `Stake` on a loss.
pub fn bet_pnl(bet: &Bet) -> Decimal {
    match bet.outcome() {
        BetResult::Win => parse_currency_opt(bet.to_win.as_deref()),
        BetResult::Loss => -parse_currency_opt(bet.stake.as_deref()),
        BetResult::Open => Decimal::ZERO,
    }
}

/// Daily profit/loss within `[start, end]` (either bound optional), as a
/// running total in date order.
///
/// Ledger adjustments and rows without a readable date are skipped. Open
/// bets contribute nothing but still mark their day on the curve. Totals
/// saturate at the `Decimal` bounds.
pub fn daily_pnl(bets: &[Bet], start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<PnlPoint> {
    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for bet in bets.iter().filter(|b| b.kind().is_wager()) {
        let Some(day) = bet.date.as_deref().and_then(normalize_date_key) else {
            continue;
        };
        if start.is_some_and(|s| day < s) || end.is_some_and(|e| day > e) {
            continue;
        }
        let total = daily.entry(day).or_insert(Decimal::ZERO);
        *total = total.saturating_add(bet_pnl(bet));
    }

    if daily.is_empty() {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(daily.len() + 1);
    points.push(PnlPoint {
        date: None,
        label: String::new(),
        daily_pnl: Decimal::ZERO,
        cumulative_pnl: Decimal::ZERO,
    });

    let mut cumulative = Decimal::ZERO;
    for (day, pnl) in daily {
        cumulative = cumulative.saturating_add(pnl);
        points.push(PnlPoint {
            date: Some(day),
            label: day.format("%m/%d").to_string(),
            daily_pnl: pnl,
            cumulative_pnl: cumulative,
        });
    }

    points
}
