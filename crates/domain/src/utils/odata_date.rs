//! OData v2 date literal parsing
//!
//! SAP gateways encode `Edm.DateTime` values as `/Date(<millis>)/`, optionally
//! with a `+hhmm` offset suffix that carries no additional information for
//! calendar dates.

use chrono::{DateTime, NaiveDate};

/// Parse an OData v2 `/Date(<millis>)/` literal into a calendar date (UTC).
///
/// Returns `None` for empty strings and anything that is not a date literal.
#[must_use]
pub fn parse_odata_date(raw: &str) -> Option<NaiveDate> {
    let inner = raw.trim().strip_prefix("/Date(")?.strip_suffix(")/")?;

    // Offset suffix (`+0000` / `-0100`) after the millisecond value.
    let millis_end = inner
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map_or(inner.len(), |(idx, _)| idx);

    let millis: i64 = inner[..millis_end].parse().ok()?;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}
