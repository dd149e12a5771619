use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Bet, BetKind};
use crate::stats::currency::leading_decimal;
use crate::stats::parse_currency_opt;

use super::dates::normalize_date_key;

/// Criteria for the "All Bets" listing. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct BetFilter {
    /// `singles`, or a bet type compared case-insensitively.
    pub bet_type: Option<String>,
    pub result: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl BetFilter {
    pub fn matches(&self, bet: &Bet) -> bool {
        self.type_matches(bet) && self.result_matches(bet) && self.date_matches(bet)
    }

    fn type_matches(&self, bet: &Bet) -> bool {
        let Some(wanted) = self.bet_type.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let wanted = wanted.to_lowercase();
        if wanted == "singles" {
            return bet.kind() == BetKind::Single;
        }
        bet.bet_type.as_deref().unwrap_or_default().to_lowercase() == wanted
    }

    fn result_matches(&self, bet: &Bet) -> bool {
        match self.result.as_deref().filter(|r| !r.is_empty()) {
            Some(wanted) => {
                bet.result.as_deref().unwrap_or_default().to_lowercase() == wanted.to_lowercase()
            }
            None => true,
        }
    }

    fn date_matches(&self, bet: &Bet) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let Some(day) = bet.date.as_deref().and_then(normalize_date_key) else {
            return false;
        };
        self.start.map_or(true, |s| day >= s) && self.end.map_or(true, |e| day <= e)
    }

    /// Wagers matching this filter; ledger adjustments are never listed.
    pub fn apply(&self, bets: Vec<Bet>) -> Vec<Bet> {
        bets.into_iter()
            .filter(|b| b.kind().is_wager() && self.matches(b))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Date,
    Stake,
    Odds,
    ToWin,
    Type,
    Result,
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Number(Decimal),
    Text(String),
}

impl SortValue {
    fn text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(t) => t.clone(),
        }
    }
}

fn sort_value(bet: &Bet, key: SortKey) -> SortValue {
    let text = |v: &Option<String>| SortValue::Text(v.clone().unwrap_or_default());
    match key {
        SortKey::Date => SortValue::Text(
            bet.date
                .as_deref()
                .and_then(normalize_date_key)
                .map(|d| d.to_string())
                .unwrap_or_default(),
        ),
        SortKey::Stake => SortValue::Number(parse_currency_opt(bet.stake.as_deref())),
        SortKey::ToWin => SortValue::Number(parse_currency_opt(bet.to_win.as_deref())),
        SortKey::Balance => SortValue::Number(parse_currency_opt(bet.balance.as_deref())),
        SortKey::Odds => match bet.odds.as_deref().and_then(leading_decimal) {
            Some(n) => SortValue::Number(n),
            None => text(&bet.odds),
        },
        SortKey::Type => text(&bet.bet_type),
        SortKey::Result => text(&bet.result),
    }
}

fn compare(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.cmp(y),
        _ => a.text().cmp(&b.text()),
    }
}

/// Stable sort. Values compare numerically when both sides are numbers,
/// as text otherwise.
pub fn sort_bets(bets: &mut [Bet], key: SortKey, dir: SortDir) {
    bets.sort_by(|a, b| {
        let ord = compare(&sort_value(a, key), &sort_value(b, key));
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}
