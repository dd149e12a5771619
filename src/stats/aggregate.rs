use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::models::{Bet, BetKind, BetResult, ParlayLeg};

use super::currency::{format_currency, parse_currency_opt, round_to};
use super::odds::{american_to_decimal, decimal_to_american, expected_percentage};

const UNKNOWN_TYPE: &str = "Unknown";

/// The slice of a ledger row the engine reads.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub bet_type: Option<String>,
    pub odds: Option<String>,
    pub result: Option<String>,
    pub balance: Option<String>,
}

impl From<&Bet> for Outcome {
    fn from(bet: &Bet) -> Self {
        Self {
            bet_type: bet.bet_type.clone(),
            odds: bet.odds.clone(),
            result: bet.result.clone(),
            balance: bet.balance.clone(),
        }
    }
}

/// Parlay legs carry no money of their own; their balance counts as zero.
impl From<&ParlayLeg> for Outcome {
    fn from(leg: &ParlayLeg) -> Self {
        Self {
            bet_type: leg.leg_type.clone(),
            odds: leg.odds.clone(),
            result: leg.result.clone(),
            balance: None,
        }
    }
}

/// Win/loss summary over a group of wagers, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub win_pct: String,
    pub wins: i64,
    pub losses: i64,
    pub avg_odds: String,
    pub expected_pct: String,
    pub totals: String,
}

/// Serializes [`AggregateStats`] as the array
/// `[win_pct, wins, losses, avg_odds, expected_pct, totals]`
/// consumed by table views that index columns by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalStats(pub AggregateStats);

impl Serialize for PositionalStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let s = &self.0;
        let mut tuple = serializer.serialize_tuple(6)?;
        tuple.serialize_element(&s.win_pct)?;
        tuple.serialize_element(&s.wins)?;
        tuple.serialize_element(&s.losses)?;
        tuple.serialize_element(&s.avg_odds)?;
        tuple.serialize_element(&s.expected_pct)?;
        tuple.serialize_element(&s.totals)?;
        tuple.end()
    }
}

impl From<AggregateStats> for PositionalStats {
    fn from(stats: AggregateStats) -> Self {
        Self(stats)
    }
}

/// Per-type breakdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeStats {
    #[serde(rename = "type")]
    pub bet_type: String,
    #[serde(flatten)]
    pub stats: AggregateStats,
}

/// Summarize a set of rows.
///
/// - Ledger adjustments (credit/deposit/withdrawal) are ignored entirely.
/// - Only `win`/`loss` results count toward wins, losses and totals.
/// - Average odds cover every remaining row with populated, readable odds,
///   whatever its result. With no such row the average is 1.
/// - Sums saturate at the `Decimal` bounds instead of overflowing.
pub fn aggregate(rows: &[Outcome]) -> AggregateStats {
    let mut wins = 0i64;
    let mut losses = 0i64;
    let mut totals = Decimal::ZERO;
    let mut odds_sum = Decimal::ZERO;
    let mut odds_count = 0i64;

    let wagers = rows
        .iter()
        .filter(|r| BetKind::classify(r.bet_type.as_deref()).is_wager());

    for row in wagers {
        let result = BetResult::parse(row.result.as_deref());
        match result {
            BetResult::Win => wins += 1,
            BetResult::Loss => losses += 1,
            BetResult::Open => {}
        }
        if result.is_settled() {
            totals = totals.saturating_add(parse_currency_opt(row.balance.as_deref()));
        }

        let priced = row
            .odds
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .and_then(american_to_decimal);
        if let Some(dec) = priced {
            odds_sum = odds_sum.saturating_add(dec);
            odds_count += 1;
        }
    }

    let avg_decimal = if odds_count > 0 {
        odds_sum
            .checked_div(Decimal::from(odds_count))
            .unwrap_or(Decimal::ONE)
    } else {
        Decimal::ONE
    };

    AggregateStats {
        win_pct: win_percentage(wins, wins + losses),
        wins,
        losses,
        avg_odds: decimal_to_american(avg_decimal),
        expected_pct: expected_percentage(avg_decimal),
        totals: format_currency(totals),
    }
}

/// Group rows by their type and summarize each group.
///
/// A missing or empty type groups under `"Unknown"`. Groups come out in the
/// order their type first appears; ledger adjustments form no group.
pub fn aggregate_by_type(rows: &[Outcome]) -> Vec<TypeStats> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Outcome>> = HashMap::new();

    for row in rows {
        if !BetKind::classify(row.bet_type.as_deref()).is_wager() {
            continue;
        }
        let key = row
            .bet_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_TYPE)
            .to_string();

        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(row.clone());
    }

    order
        .into_iter()
        .map(|bet_type| {
            let stats = aggregate(groups.get(&bet_type).map(Vec::as_slice).unwrap_or_default());
            TypeStats { bet_type, stats }
        })
        .collect()
}

/// `wins / total` as a one-place percentage; `"0%"` when nothing settled.
fn win_percentage(wins: i64, total: i64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let pct = round_to(Decimal::from(wins) * Decimal::ONE_HUNDRED / Decimal::from(total), 1);
    format!("{pct:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bet_type: &str, odds: &str, result: &str, balance: &str) -> Outcome {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Outcome {
            bet_type: opt(bet_type),
            odds: opt(odds),
            result: opt(result),
            balance: opt(balance),
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[]);
        assert_eq!(stats.win_pct, "0%");
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.avg_odds, "+0");
        assert_eq!(stats.expected_pct, "100.00%");
        assert_eq!(stats.totals, "$0.00");
    }

    #[test]
    fn test_aggregate_win_and_loss() {
        let rows = vec![
            row("NBA", "+150", "win", "$50.00"),
            row("NBA", "-200", "loss", "-$25.00"),
        ];
        let stats = aggregate(&rows);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.win_pct, "50.0%");
        assert_eq!(stats.totals, "$25.00");
        assert_eq!(stats.avg_odds, "+100");
        assert_eq!(stats.expected_pct, "50.00%");
    }

    #[test]
    fn test_result_is_case_insensitive() {
        let rows = vec![
            row("NFL", "+100", "WIN", "$10"),
            row("NFL", "+100", "Win", "$10"),
            row("NFL", "+100", "LOSS", "-$10"),
        ];
        let stats = aggregate(&rows);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.win_pct, "66.7%");
        assert_eq!(stats.totals, "$10.00");
    }

    #[test]
    fn test_adjustments_never_counted() {
        let rows = vec![
            row("credit", "+500", "win", "$100"),
            row("Deposit", "-1000", "loss", "$200"),
            row("withdrawal", "+100", "win", "-$50"),
            row("NHL", "+120", "win", "$12"),
        ];
        let stats = aggregate(&rows);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.avg_odds, "+120");
        assert_eq!(stats.totals, "$12.00");
    }

    #[test]
    fn test_pending_excluded_from_counts_but_priced() {
        let rows = vec![
            row("MLB", "+300", "win", "$30"),
            row("MLB", "-300", "pending", "$999"),
            row("MLB", "+100", "", "$999"),
        ];
        let stats = aggregate(&rows);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.win_pct, "100.0%");
        assert_eq!(stats.totals, "$30.00");
        // (4 + 4/3 + 2) / 3 = 2.444…
        assert_eq!(stats.avg_odds, "+144");
        assert_eq!(stats.expected_pct, "40.91%");
    }

    #[test]
    fn test_unreadable_odds_skipped() {
        let rows = vec![
            row("NBA", "pk", "win", "$10"),
            row("NBA", "+150", "loss", "-$10"),
        ];
        let stats = aggregate(&rows);
        assert_eq!(stats.avg_odds, "+150");
    }

    #[test]
    fn test_malformed_balance_is_zero() {
        let rows = vec![row("NBA", "+150", "win", "lots"), row("NBA", "+150", "win", "$1,000.50")];
        assert_eq!(aggregate(&rows).totals, "$1000.50");
    }

    #[test]
    fn test_by_type_groups_in_first_seen_order() {
        let rows = vec![
            row("NFL", "+150", "win", "$15"),
            row("", "-110", "loss", "-$11"),
            row("NBA", "-200", "loss", "-$20"),
            row("NFL", "-200", "loss", "-$20"),
            row("credit", "", "", "$50"),
        ];
        let groups = aggregate_by_type(&rows);
        let names: Vec<&str> = groups.iter().map(|g| g.bet_type.as_str()).collect();
        assert_eq!(names, vec!["NFL", "Unknown", "NBA"]);

        let nfl = &groups[0].stats;
        assert_eq!(nfl.wins, 1);
        assert_eq!(nfl.losses, 1);
        assert_eq!(nfl.win_pct, "50.0%");
        assert_eq!(nfl.avg_odds, "+100");
        assert_eq!(nfl.totals, "$-5.00");
    }

    #[test]
    fn test_positional_shape() {
        let stats = aggregate(&[row("NBA", "+150", "win", "$50.00"), row("NBA", "-200", "loss", "-$25.00")]);
        let json = serde_json::to_value(PositionalStats(stats)).unwrap();
        assert_eq!(json, serde_json::json!(["50.0%", 1, 1, "+100", "50.00%", "$25.00"]));
    }

    #[test]
    fn test_keyed_shape() {
        let groups = aggregate_by_type(&[row("NBA", "+150", "win", "$50.00")]);
        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "type": "NBA",
                "win_pct": "100.0%",
                "wins": 1,
                "losses": 0,
                "avg_odds": "+150",
                "expected_pct": "40.00%",
                "totals": "$50.00",
            }])
        );
    }

    #[test]
    fn test_huge_balances_saturate() {
        let max = "$79,228,162,514,264,337,593,543,950,335";
        let stats = aggregate(&[row("NBA", "+100", "win", max), row("NBA", "+100", "win", max)]);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.totals, format!("${}.00", Decimal::MAX));

        let owed = format!("-{max}");
        let groups = aggregate_by_type(&[row("NFL", "", "loss", &owed), row("NFL", "", "loss", &owed)]);
        assert_eq!(groups[0].stats.totals, format!("${}.00", Decimal::MIN));
    }

    #[test]
    fn test_tiny_favorite_price_saturates() {
        let stats = aggregate(&[row("NBA", "-0.0000000000000000000000001", "win", "$10")]);
        assert_eq!(stats.avg_odds, format!("+{}", Decimal::MAX));
        assert_eq!(stats.expected_pct, "0.00%");
        assert_eq!(stats.totals, "$10.00");
    }
}
