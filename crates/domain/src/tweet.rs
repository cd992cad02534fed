use chrono::{DateTime, FixedOffset, NaiveDate, ParseError, Timelike};

/// Timestamp format used by the Twitter v1.1 API, e.g.
/// `Fri Mar 09 20:55:23 +0000 2018`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A single tweet as returned by the user timeline endpoint.
///
/// Ids are assigned by upstream and decrease monotonically as the timeline is
/// walked backwards in time; the pagination cursor is derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: u64,
    pub created_at: DateTime<FixedOffset>,
}

impl Tweet {
    pub fn new(id: u64, created_at: DateTime<FixedOffset>) -> Self {
        Self { id, created_at }
    }

    /// Parses the upstream `created_at` string, preserving the embedded
    /// UTC offset.
    pub fn parse_created_at(raw: &str) -> Result<DateTime<FixedOffset>, ParseError> {
        DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
    }

    /// Calendar day of the tweet in its own timezone offset.
    pub fn local_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Hour-of-day (0-23) in the tweet's own timezone offset.
    pub fn local_hour(&self) -> u32 {
        self.created_at.hour()
    }
}
