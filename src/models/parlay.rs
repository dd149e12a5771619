use serde::Serialize;
use sqlx::FromRow;

/// Database row for parlay_bets: one leg of a parlay, keyed by the parent
/// bet's label in `parlay_name`.
#[derive(Debug, Clone, Default, Serialize, FromRow)]
pub struct ParlayLeg {
    #[serde(skip_serializing)]
    pub id: i64,
    #[serde(skip_serializing)]
    pub parlay_name: String,
    pub date: Option<String>,
    pub individual_bet: Option<String>,
    pub odds: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub leg_type: Option<String>,
    pub result: Option<String>,
}
