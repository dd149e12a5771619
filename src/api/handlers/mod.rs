pub mod analytics;
pub mod bets;
pub mod health;
pub mod metrics;
pub mod parlays;
pub mod session;
pub mod summary;

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::ledger::normalize_date_key;

/// Read an optional date query parameter. Blank means unset.
pub(crate) fn parse_date_param(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => normalize_date_key(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidParam {
                field,
                value: s.to_string(),
            }),
    }
}
