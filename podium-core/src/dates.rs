use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::locale::DisplayLocale;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

/// Parse an ISO-like date into a comparable instant.
///
/// Offsets are normalized to UTC. Reduced-precision forms (`YYYY-MM`,
/// `YYYY`) resolve to the first day of the month or year. `None` means the
/// text is not a date we understand; callers treat it as the oldest
/// possible instant.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.naive_utc());
        }
    }

    // A trailing `Z` is UTC, so the naive forms apply to the rest
    let naive = text.strip_suffix('Z').unwrap_or(text);
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
            return Some(dt);
        }
    }

    parse_calendar_date(text).and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('-') {
        Some((year, month)) if year.len() == 4 && month.len() == 2 && is_digits(year) && is_digits(month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if text.len() == 4 && is_digits(text) => NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1),
        _ => None,
    }
}

pub fn year_of(text: &str) -> Option<i32> {
    parse_date(text).map(|dt| dt.year())
}

/// Localized "day month year" rendering. Unparsable input is shown verbatim.
pub fn format_date(text: &str, locale: DisplayLocale) -> String {
    match parse_date(text) {
        Some(dt) => dt
            .date()
            .format_localized(locale.date_pattern(), locale.chrono_locale())
            .to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_iso_date() {
        let dt = parse_date("2024-03-15").unwrap();
        assert_eq!(dt.to_string(), "2024-03-15 00:00:00");
    }

    #[test]
    fn test_parse_datetime_variants() {
        assert!(parse_date("2024-03-15T07:30:00").is_some());
        assert!(parse_date("2024-03-15T07:30").is_some());
        assert!(parse_date("2024-03-15 07:30:00").is_some());
        assert!(parse_date("  2024-03-15  ").is_some());
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let dt = parse_date("2024-01-01T01:00:00+03:00").unwrap();
        assert_eq!(dt.to_string(), "2023-12-31 22:00:00");
        assert_eq!(year_of("2024-01-01T01:00:00+03:00"), Some(2023));
    }

    #[test]
    fn test_parse_year_month_as_first_day() {
        assert_eq!(parse_date("2024-03").unwrap().to_string(), "2024-03-01 00:00:00");
        assert_eq!(year_of("2024-03"), Some(2024));
        assert!(parse_date("2024-13").is_none());
    }

    #[test]
    fn test_parse_bare_year_as_january_first() {
        assert_eq!(parse_date("2024").unwrap().to_string(), "2024-01-01 00:00:00");
        assert_eq!(year_of(" 2019 "), Some(2019));
        assert!(parse_date("24").is_none());
    }

    #[test]
    fn test_parse_minute_precision_with_zone() {
        assert_eq!(parse_date("2024-03-15T07:30Z").unwrap().to_string(), "2024-03-15 07:30:00");
        assert_eq!(parse_date("2024-01-01T01:30+03:00").unwrap().to_string(), "2023-12-31 22:30:00");
        assert_eq!(parse_date("2024-03-15T07:30:05Z").unwrap().to_string(), "2024-03-15 07:30:05");
    }

    #[test]
    fn test_format_reduced_precision_dates() {
        assert_eq!(format_date("2024-03", DisplayLocale::PtBr), "1 de março de 2024");
    }

    #[test]
    fn test_unparsable_dates_are_none() {
        assert!(parse_date("").is_none());
        assert!(parse_date("sometime in May").is_none());
        assert!(parse_date("2024-13-40").is_none());
        assert_eq!(year_of("n/a"), None);
    }

    #[test]
    fn test_format_date_pt_br() {
        assert_eq!(format_date("2024-03-15", DisplayLocale::PtBr), "15 de março de 2024");
        assert_eq!(format_date("2023-01-05", DisplayLocale::PtBr), "5 de janeiro de 2023");
    }

    #[test]
    fn test_format_date_en_us() {
        assert_eq!(format_date("2024-03-15", DisplayLocale::EnUs), "March 15, 2024");
    }

    #[test]
    fn test_format_date_keeps_unparsable_text() {
        assert_eq!(format_date("em breve", DisplayLocale::PtBr), "em breve");
    }
}
