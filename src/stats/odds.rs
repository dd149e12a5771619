use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::leading_decimal;

const TWO: Decimal = Decimal::TWO;
const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Convert American odds (`"+150"`, `"-200"`, `"150"`) to decimal odds.
///
/// - `+N` and bare `N` → `1 + N/100`
/// - `-N` → `1 + 100/N`
/// - empty input → `1`, the break-even multiplier
///
/// Only the leading number is read, trailing text is ignored. Input with no
/// number at all, or `-0`, has no decimal form and yields `None`; averaging
/// callers skip those rows.
pub fn american_to_decimal(odds: &str) -> Option<Decimal> {
    let o = odds.trim();
    if o.is_empty() {
        return Some(Decimal::ONE);
    }

    if let Some(magnitude) = o.strip_prefix('-') {
        let n = leading_decimal(magnitude)?;
        return HUNDRED
            .checked_div(n)
            .and_then(|q| Decimal::ONE.checked_add(q));
    }

    let n = leading_decimal(o.strip_prefix('+').unwrap_or(o))?;
    Decimal::ONE.checked_add(n / HUNDRED)
}

/// Render decimal odds in American notation for display.
///
/// Below 2.0 is a favorite (`"-200"`), 2.0 and above an underdog (`"+150"`).
/// When `dec` is an average of several prices this does not equal the
/// average of their American values; the display keeps that approximation.
/// Decimal odds of exactly 1 carry no price and render as `"+0"`. Lines too
/// long for a `Decimal` saturate at its bounds.
pub fn decimal_to_american(dec: Decimal) -> String {
    let profit = dec.saturating_sub(Decimal::ONE);
    if dec >= TWO {
        return format!("+{}", round_half_up(profit.saturating_mul(HUNDRED)));
    }
    if profit.is_zero() {
        return "+0".to_string();
    }

    let line = (-HUNDRED).checked_div(profit).unwrap_or(if profit.is_sign_positive() {
        Decimal::MIN
    } else {
        Decimal::MAX
    });
    round_half_up(line).to_string()
}

/// Implied win probability of decimal odds, as a two-place percentage
/// (`2.0` → `"50.00%"`). Non-positive odds give `"0%"`.
pub fn expected_percentage(dec: Decimal) -> String {
    if dec <= Decimal::ZERO {
        return "0%".to_string();
    }

    match HUNDRED.checked_div(dec) {
        Some(pct) => {
            let pct = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{pct:.2}%")
        }
        None => "0%".to_string(),
    }
}

/// Nearest integer, halves toward positive infinity (`-2.5` → `-2`).
fn round_half_up(x: Decimal) -> Decimal {
    let strategy = if x.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    x.round_dp_with_strategy(0, strategy)
}
