use chrono::{Datelike, Days, Months, NaiveDate};

/// Interpret a stored date as a calendar day.
///
/// Accepts `YYYY-MM-DD` and `M/D/YYYY`; anything after the date is ignored,
/// so timestamps keep their local calendar day whatever their offset.
/// Anything else is `None`.
pub fn normalize_date_key(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(head) = s.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
            return Some(date);
        }
    }

    NaiveDate::parse_and_remainder(s, "%m/%d/%Y")
        .ok()
        .map(|(date, _)| date)
}

/// `MM/DD/YYYY` for recognizable dates; anything else is returned as stored.
pub fn display_date(raw: &str) -> String {
    match normalize_date_key(raw) {
        Some(date) => date.format("%m/%d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// First and last day of the month containing `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today - Days::new(u64::from(today.day0()));
    let last = first + Months::new(1) - Days::new(1);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(normalize_date_key("2024-03-09"), Some(ymd(2024, 3, 9)));
        assert_eq!(normalize_date_key("2024-03-09 18:30:00"), Some(ymd(2024, 3, 9)));
    }

    #[test]
    fn test_us_dates() {
        assert_eq!(normalize_date_key("3/9/2024"), Some(ymd(2024, 3, 9)));
        assert_eq!(normalize_date_key("12/31/2023"), Some(ymd(2023, 12, 31)));
    }

    #[test]
    fn test_timestamp_keeps_local_day() {
        // 04:00 UTC on the 10th, but stored against the 9th
        assert_eq!(normalize_date_key("2024-03-09T23:00:00-05:00"), Some(ymd(2024, 3, 9)));
        assert_eq!(normalize_date_key("2024-03-09 08:15"), Some(ymd(2024, 3, 9)));
        assert_eq!(normalize_date_key("3/9/2024 11:30 PM"), Some(ymd(2024, 3, 9)));
    }

    #[test]
    fn test_unrecognized_dates() {
        assert_eq!(normalize_date_key(""), None);
        assert_eq!(normalize_date_key("last tuesday"), None);
        assert_eq!(normalize_date_key("2024-13-01"), None);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-09"), "03/09/2024");
        assert_eq!(display_date("3/9/2024"), "03/09/2024");
        assert_eq!(display_date("tbd"), "tbd");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(ymd(2024, 2, 17)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(month_bounds(ymd(2023, 12, 1)), (ymd(2023, 12, 1), ymd(2023, 12, 31)));
    }
}
