use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Read the longest numeric prefix of `raw` after leading whitespace:
/// an optional sign, digits, and an optional fraction. Anything after the
/// prefix is ignored (`"150abc"` reads as 150).
///
/// Returns `None` when there is no digit to read.
pub(crate) fn leading_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &s[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_part = &s[frac_start..frac_end];
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut text = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        text.push('-');
    }
    text.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        text.push('.');
        text.push_str(frac_part);
    }

    Decimal::from_str(&text).ok()
}

/// Parse a currency amount such as `"$1,250.50"`, `"-$25"` or `"12"`.
///
/// `$` and `,` are stripped before reading the number. Empty or malformed
/// input is worth zero; this never fails.
pub fn parse_currency(raw: &str) -> Decimal {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    leading_decimal(&cleaned).unwrap_or(Decimal::ZERO)
}

/// [`parse_currency`] for nullable columns; `None` is worth zero.
pub fn parse_currency_opt(raw: Option<&str>) -> Decimal {
    raw.map(parse_currency).unwrap_or(Decimal::ZERO)
}

/// Render an amount as `$` followed by the value to two places.
/// Negative amounts keep their sign after the dollar sign (`"$-25.00"`).
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_to(value, 2);
    format!("${rounded:.2}")
}

/// Round half away from zero, normalizing negative zero to zero.
pub(crate) fn round_to(value: Decimal, places: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_leading_decimal() {
        assert_eq!(leading_decimal("150"), Some(dec!(150)));
        assert_eq!(leading_decimal("  -12.5"), Some(dec!(-12.5)));
        assert_eq!(leading_decimal("+7"), Some(dec!(7)));
        assert_eq!(leading_decimal("150abc"), Some(dec!(150)));
        assert_eq!(leading_decimal(".25"), Some(dec!(0.25)));
        assert_eq!(leading_decimal("5."), Some(dec!(5)));
        assert_eq!(leading_decimal("abc"), None);
        assert_eq!(leading_decimal("-"), None);
        assert_eq!(leading_decimal(""), None);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$1,250.50"), dec!(1250.50));
        assert_eq!(parse_currency("-$25.00"), dec!(-25));
        assert_eq!(parse_currency("$-25.00"), dec!(-25));
        assert_eq!(parse_currency("42"), dec!(42));
    }

    #[test]
    fn test_parse_currency_malformed_is_zero() {
        assert_eq!(parse_currency(""), Decimal::ZERO);
        assert_eq!(parse_currency("$"), Decimal::ZERO);
        assert_eq!(parse_currency("n/a"), Decimal::ZERO);
        assert_eq!(parse_currency_opt(None), Decimal::ZERO);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(25)), "$25.00");
        assert_eq!(format_currency(dec!(1234.567)), "$1234.57");
        assert_eq!(format_currency(dec!(-25)), "$-25.00");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_parse_of_format_is_rounded_value() {
        for value in [dec!(0), dec!(12.345), dec!(-7.005), dec!(1999.999), dec!(0.1)] {
            let expected = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            assert_eq!(parse_currency(&format_currency(value)), expected, "value {value}");
        }
    }
}
