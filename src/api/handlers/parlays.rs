use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::parlay_repo;
use crate::errors::AppError;
use crate::ledger::display_date;
use crate::models::ParlayLeg;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LegQuery {
    pub parlay_name: Option<String>,
}

#[derive(Serialize)]
pub struct LegView {
    #[serde(flatten)]
    pub leg: ParlayLeg,
    /// `MM/DD/YYYY`, or the stored text when it is not a recognizable date.
    pub display_date: String,
}

impl From<ParlayLeg> for LegView {
    fn from(leg: ParlayLeg) -> Self {
        let display_date = leg.date.as_deref().map(display_date).unwrap_or_default();
        Self { leg, display_date }
    }
}

/// GET /api/parlay_bets?parlay_name=: Legs of one parlay.
/// A missing or unknown name is an empty list, not an error.
pub async fn legs(
    State(state): State<AppState>,
    Query(query): Query<LegQuery>,
) -> Result<Json<Vec<LegView>>, AppError> {
    let Some(name) = query.parlay_name.filter(|n| !n.is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    let legs = parlay_repo::get_legs_by_parlay(&state.db, &name).await?;
    Ok(Json(legs.into_iter().map(LegView::from).collect()))
}
