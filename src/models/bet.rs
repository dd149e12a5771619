use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database row for the bets table.
///
/// Currency and odds columns are kept exactly as entered (`"$1,250.00"`,
/// `"+150"`), so every numeric read goes through `stats::parse_currency` or
/// `stats::american_to_decimal`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Bet {
    pub id: i64,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Bet")]
    pub bet: Option<String>,
    #[serde(rename = "Stake")]
    pub stake: Option<String>,
    #[serde(rename = "Odds")]
    pub odds: Option<String>,
    #[serde(rename = "To_Win")]
    pub to_win: Option<String>,
    #[serde(rename = "Type")]
    #[sqlx(rename = "type")]
    pub bet_type: Option<String>,
    #[serde(rename = "Result")]
    pub result: Option<String>,
    #[serde(rename = "Balance")]
    pub balance: Option<String>,
}

impl Bet {
    pub fn kind(&self) -> BetKind {
        BetKind::classify(self.bet_type.as_deref())
    }

    pub fn outcome(&self) -> BetResult {
        BetResult::parse(self.result.as_deref())
    }
}

// ---------------------------------------------------------------------------
// BetKind
// ---------------------------------------------------------------------------

/// How a ledger row participates in statistics, derived from its free-text type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetKind {
    /// Any wager that is not a parlay.
    Single,
    Parlay,
    /// `credit`, `deposit` or `withdrawal`: moves money, never a wager.
    Adjustment,
}

impl BetKind {
    pub fn classify(bet_type: Option<&str>) -> Self {
        match bet_type.unwrap_or_default().to_lowercase().as_str() {
            "parlay" => BetKind::Parlay,
            "credit" | "deposit" | "withdrawal" => BetKind::Adjustment,
            _ => BetKind::Single,
        }
    }

    pub fn is_wager(&self) -> bool {
        !matches!(self, BetKind::Adjustment)
    }
}

// ---------------------------------------------------------------------------
// BetResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetResult {
    Win,
    Loss,
    /// Pending, empty, or anything unrecognized.
    Open,
}

impl BetResult {
    /// Case-insensitive; only the exact words `win` and `loss` settle a bet.
    pub fn parse(result: Option<&str>) -> Self {
        match result.unwrap_or_default().to_lowercase().as_str() {
            "win" => BetResult::Win,
            "loss" => BetResult::Loss,
            _ => BetResult::Open,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, BetResult::Open)
    }
}
