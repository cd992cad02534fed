use chrono::{NaiveDate, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolves the histogram target date from an optional `YYYY-MM-DD` input.
///
/// Absent or unparsable input falls back to the current UTC day; bad input is
/// never an error.
pub fn parse_or_today(input: Option<&str>) -> NaiveDate {
    input
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
        .unwrap_or_else(|| Utc::now().date_naive())
}
