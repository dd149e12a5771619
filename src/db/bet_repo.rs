use sqlx::SqlitePool;

use crate::models::Bet;

const BET_COLUMNS: &str = "id, date, bet, stake, odds, to_win, type, result, balance";

/// Get every bet, ordered by stored date then insertion order.
pub async fn get_all_bets(pool: &SqlitePool) -> anyhow::Result<Vec<Bet>> {
    let bets = sqlx::query_as::<_, Bet>(&format!(
        "SELECT {BET_COLUMNS} FROM bets ORDER BY date, id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(bets)
}

/// Get bets whose result is `win` or `loss` (any case).
pub async fn get_settled_bets(pool: &SqlitePool) -> anyhow::Result<Vec<Bet>> {
    let bets = sqlx::query_as::<_, Bet>(&format!(
        r#"
        SELECT {BET_COLUMNS} FROM bets
        WHERE LOWER(COALESCE(result, '')) IN ('win', 'loss')
        ORDER BY date, id
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(bets)
}

/// Insert a bet row as entered. Returns the new id.
pub async fn insert_bet(pool: &SqlitePool, bet: &Bet) -> anyhow::Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO bets (date, bet, stake, odds, to_win, type, result, balance)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&bet.date)
    .bind(&bet.bet)
    .bind(&bet.stake)
    .bind(&bet.odds)
    .bind(&bet.to_win)
    .bind(&bet.bet_type)
    .bind(&bet.result)
    .bind(&bet.balance)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
