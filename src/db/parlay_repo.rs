use sqlx::SqlitePool;

use crate::models::ParlayLeg;

const LEG_COLUMNS: &str = "id, parlay_name, date, individual_bet, odds, type, result";

/// Get the legs of the parlay labelled `parlay_name`, in insertion order.
/// An unknown label yields no legs.
pub async fn get_legs_by_parlay(
    pool: &SqlitePool,
    parlay_name: &str,
) -> anyhow::Result<Vec<ParlayLeg>> {
    let legs = sqlx::query_as::<_, ParlayLeg>(&format!(
        "SELECT {LEG_COLUMNS} FROM parlay_bets WHERE parlay_name = ? ORDER BY id"
    ))
    .bind(parlay_name)
    .fetch_all(pool)
    .await?;

    Ok(legs)
}

/// Get every parlay leg across all parlays.
pub async fn get_all_legs(pool: &SqlitePool) -> anyhow::Result<Vec<ParlayLeg>> {
    let legs = sqlx::query_as::<_, ParlayLeg>(&format!(
        "SELECT {LEG_COLUMNS} FROM parlay_bets ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(legs)
}

/// Insert one leg under `leg.parlay_name`. Returns the new id.
pub async fn insert_leg(pool: &SqlitePool, leg: &ParlayLeg) -> anyhow::Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO parlay_bets (parlay_name, date, individual_bet, odds, type, result)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&leg.parlay_name)
    .bind(&leg.date)
    .bind(&leg.individual_bet)
    .bind(&leg.odds)
    .bind(&leg.leg_type)
    .bind(&leg.result)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
