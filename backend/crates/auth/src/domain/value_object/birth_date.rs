//! Birth date input (`tanggal_lahir`)

use chrono::{DateTime, NaiveDate};

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part kept).
/// Blank input means "not provided".
pub fn parse_birth_date(raw: Option<&str>) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => DateTime::parse_from_rfc3339(raw).map(|dt| Some(dt.date_naive())),
    }
}
