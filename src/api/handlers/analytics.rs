use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::db::bet_repo;
use crate::errors::AppError;
use crate::ledger::{self, PnlPoint};
use crate::AppState;

use super::parse_date_param;

#[derive(Debug, Deserialize)]
pub struct PnlQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Serialize)]
pub struct PnlHistory {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub points: Vec<PnlPoint>,
}

/// GET /api/analytics/pnl-history: Cumulative profit/loss by day.
///
/// With neither bound given the window is the current calendar month.
pub async fn pnl_history(
    State(state): State<AppState>,
    Query(query): Query<PnlQuery>,
) -> Result<Json<PnlHistory>, AppError> {
    let mut start = parse_date_param("start", query.start.as_deref())?;
    let mut end = parse_date_param("end", query.end.as_deref())?;
    if start.is_none() && end.is_none() {
        let (first, last) = ledger::month_bounds(Utc::now().date_naive());
        start = Some(first);
        end = Some(last);
    }

    let bets = bet_repo::get_all_bets(&state.db).await?;
    let points = ledger::daily_pnl(&bets, start, end);

    Ok(Json(PnlHistory { start, end, points }))
}
