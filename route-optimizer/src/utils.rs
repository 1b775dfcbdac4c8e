//! Contains time helpers.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Returns current UTC time formatted as RFC 3339.
pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();

    now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Parses RFC 3339 timestamp.
pub fn parse_rfc3339(value: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|err| format!("cannot parse timestamp '{value}': {err}"))
}
