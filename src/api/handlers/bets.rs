use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::db::bet_repo;
use crate::errors::AppError;
use crate::ledger::{self, Adjustment, BetFilter, SortDir, SortKey};
use crate::models::Bet;
use crate::AppState;

use super::parse_date_param;

#[derive(Debug, Default, Deserialize)]
pub struct BetQuery {
    #[serde(rename = "type")]
    pub bet_type: Option<String>,
    pub result: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Option<SortKey>,
    pub dir: Option<SortDir>,
}

impl BetQuery {
    fn is_empty(&self) -> bool {
        self.bet_type.is_none()
            && self.result.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.sort.is_none()
            && self.dir.is_none()
    }
}

/// GET /api/bets: The ledger.
///
/// Without parameters: every row, ordered by date then id. With any filter
/// or sort parameter: matching wagers only, newest first unless `sort`/`dir`
/// say otherwise.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BetQuery>,
) -> Result<Json<Vec<Bet>>, AppError> {
    let bets = bet_repo::get_all_bets(&state.db).await?;
    if query.is_empty() {
        return Ok(Json(bets));
    }

    let filter = BetFilter {
        bet_type: query.bet_type,
        result: query.result,
        start: parse_date_param("start", query.start.as_deref())?,
        end: parse_date_param("end", query.end.as_deref())?,
    };

    let mut listed = filter.apply(bets);
    ledger::sort_bets(
        &mut listed,
        query.sort.unwrap_or_default(),
        query.dir.unwrap_or_default(),
    );
    Ok(Json(listed))
}

/// GET /api/bets/types: Choices for the type filter.
pub async fn types(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let bets = bet_repo::get_all_bets(&state.db).await?;
    Ok(Json(ledger::type_filter_options(&bets)))
}

/// GET /api/credits: Credits, deposits and withdrawals, newest first.
pub async fn credits(State(state): State<AppState>) -> Result<Json<Vec<Adjustment>>, AppError> {
    let bets = bet_repo::get_all_bets(&state.db).await?;
    Ok(Json(ledger::ledger_adjustments(&bets)))
}
