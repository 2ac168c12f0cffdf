use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const MONTHS_UK: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

const NOT_AVAILABLE: &str = "Н/Д";

/// Lenient date parsing, the equivalent of `Date.parse` on the backend's
/// date strings. Accepts RFC 3339 plus the date and datetime-local shapes
/// the forms produce. Not strict ISO-8601.
pub fn parse_date_lenient(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0);
    }
    None
}

/// Localized date, e.g. "1 січня 2024". Unparseable input renders as "Н/Д".
pub fn format_date(text: &str) -> String {
    match parse_date_lenient(text) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_UK[date.month0() as usize],
            date.year()
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Localized date and time, e.g. "1 січня 2024, 10:30".
pub fn format_date_time(text: &str) -> String {
    match parse_date_lenient(text) {
        Some(date) => format!(
            "{} {} {}, {:02}:{:02}",
            date.day(),
            MONTHS_UK[date.month0() as usize],
            date.year(),
            date.hour(),
            date.minute()
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Value for date / datetime-local input fields. Unparseable input becomes
/// an empty string so the field just starts blank.
pub fn format_date_for_input(text: &str, include_time: bool) -> String {
    match parse_date_lenient(text) {
        Some(date) if include_time => date.format("%Y-%m-%dT%H:%M").to_string(),
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Relative time against an explicit `now` ("щойно", "5 хв тому", ...).
/// Anything older than a week falls back to the full date.
pub fn format_relative_time(text: &str, now: NaiveDateTime) -> String {
    let Some(date) = parse_date_lenient(text) else {
        return NOT_AVAILABLE.to_string();
    };
    let elapsed = now.signed_duration_since(date);
    if elapsed.num_seconds() < 60 {
        return "щойно".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("{} хв тому", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("{} год тому", elapsed.num_hours());
    }
    if elapsed.num_days() < 7 {
        return format!("{} дн тому", elapsed.num_days());
    }
    format_date(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn lenient_parse_accepts_common_shapes() {
        assert!(parse_date_lenient("2024-01-01").is_some());
        assert!(parse_date_lenient("2024-01-01T10:30").is_some());
        assert!(parse_date_lenient("2024-01-01T10:30:45").is_some());
        assert!(parse_date_lenient("2024-01-01T10:30:45Z").is_some());
        assert!(parse_date_lenient("2024-01-01 10:30:45").is_some());
    }

    #[test]
    fn lenient_parse_rejects_garbage() {
        assert!(parse_date_lenient("").is_none());
        assert!(parse_date_lenient("not a date").is_none());
        assert!(parse_date_lenient("2024-13-01").is_none());
    }

    #[test]
    fn format_date_localized() {
        assert_eq!(format_date("2024-01-01"), "1 січня 2024");
        assert_eq!(format_date("1999-11-20"), "20 листопада 1999");
        assert_eq!(format_date("garbage"), "Н/Д");
    }

    #[test]
    fn format_date_time_includes_clock() {
        assert_eq!(format_date_time("2024-03-05T09:07"), "5 березня 2024, 09:07");
        assert_eq!(format_date_time("nope"), "Н/Д");
    }

    #[test]
    fn format_for_input_slices() {
        assert_eq!(format_date_for_input("2024-01-02T10:30:45Z", false), "2024-01-02");
        assert_eq!(
            format_date_for_input("2024-01-02T10:30:45Z", true),
            "2024-01-02T10:30"
        );
        assert_eq!(format_date_for_input("garbage", true), "");
    }

    #[test]
    fn relative_time_buckets() {
        let now = at(2024, 1, 8, 12, 0, 0);
        assert_eq!(format_relative_time("2024-01-08T11:59:30", now), "щойно");
        assert_eq!(format_relative_time("2024-01-08T11:15:00", now), "45 хв тому");
        assert_eq!(format_relative_time("2024-01-08T07:00:00", now), "5 год тому");
        assert_eq!(format_relative_time("2024-01-05T12:00:00", now), "3 дн тому");
        assert_eq!(format_relative_time("2024-01-01T11:00:00", now), "1 січня 2024");
        assert_eq!(format_relative_time("garbage", now), "Н/Д");
    }
}
