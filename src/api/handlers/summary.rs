use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::{bet_repo, parlay_repo};
use crate::errors::AppError;
use crate::ledger;
use crate::models::{Bet, BetKind};
use crate::stats::{self, AggregateStats, Outcome, PositionalStats, TypeStats};
use crate::AppState;

#[derive(Serialize)]
pub struct BalanceResponse {
    pub balance: String,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub singles: AggregateStats,
    pub parlays: AggregateStats,
}

/// GET /api/balance: Sum of every row's Balance.
///
/// Store failures answer 500 with `"Error"` in place of the amount.
pub async fn balance(State(state): State<AppState>) -> Response {
    match bet_repo::get_all_bets(&state.db).await {
        Ok(bets) => Json(BalanceResponse {
            balance: stats::format_currency(ledger::current_balance(&bets)),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load bets for balance");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BalanceResponse {
                    balance: "Error".into(),
                }),
            )
                .into_response()
        }
    }
}

/// Settled wagers split into (singles, parlays).
async fn settled_outcomes(state: &AppState) -> Result<(Vec<Outcome>, Vec<Outcome>), AppError> {
    let bets = bet_repo::get_settled_bets(&state.db).await?;
    Ok(split_by_kind(&bets))
}

fn split_by_kind(bets: &[Bet]) -> (Vec<Outcome>, Vec<Outcome>) {
    let mut singles = Vec::new();
    let mut parlays = Vec::new();
    for bet in bets {
        match bet.kind() {
            BetKind::Single => singles.push(Outcome::from(bet)),
            BetKind::Parlay => parlays.push(Outcome::from(bet)),
            BetKind::Adjustment => {}
        }
    }
    (singles, parlays)
}

/// GET /api/singles: Positional summary of settled non-parlay wagers.
pub async fn singles(State(state): State<AppState>) -> Result<Json<PositionalStats>, AppError> {
    let (singles, _) = settled_outcomes(&state).await?;
    Ok(Json(stats::aggregate(&singles).into()))
}

/// GET /api/parlays: Positional summary of settled parlays.
pub async fn parlays(State(state): State<AppState>) -> Result<Json<PositionalStats>, AppError> {
    let (_, parlays) = settled_outcomes(&state).await?;
    Ok(Json(stats::aggregate(&parlays).into()))
}

/// GET /api/summary: Singles and parlays as named records.
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let (singles, parlays) = settled_outcomes(&state).await?;
    Ok(Json(SummaryResponse {
        singles: stats::aggregate(&singles),
        parlays: stats::aggregate(&parlays),
    }))
}

/// GET /api/bettypes: Per-type breakdown over settled singles plus every
/// parlay leg.
pub async fn bet_types(State(state): State<AppState>) -> Result<Json<Vec<TypeStats>>, AppError> {
    let (mut rows, _) = settled_outcomes(&state).await?;
    let legs = parlay_repo::get_all_legs(&state.db).await?;
    rows.extend(legs.iter().map(Outcome::from));

    let breakdown = stats::aggregate_by_type(&rows);
    tracing::debug!(groups = breakdown.len(), rows = rows.len(), "Computed bet type breakdown");
    Ok(Json(breakdown))
}
