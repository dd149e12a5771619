//! Odds conversion and win/loss aggregation.
//!
//! Everything here is pure: callers hand in a fully materialized row set
//! and get formatted summaries back.

pub mod aggregate;
pub mod currency;
pub mod odds;

pub use aggregate::{aggregate, aggregate_by_type, AggregateStats, Outcome, PositionalStats, TypeStats};
pub use currency::{format_currency, parse_currency, parse_currency_opt};
pub use odds::{american_to_decimal, decimal_to_american, expected_percentage};
