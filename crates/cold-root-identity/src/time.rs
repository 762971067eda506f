//! Time utilities for cold root identity.
//!
//! Lineage timestamps are Unix epoch seconds (u64). Quarter labels have
//! the form `YYYY-Qn` and map to the first second of that quarter in UTC.

use chrono::{Datelike, TimeZone, Utc};

use crate::error::{IdentityError, Result};

/// Return the current time as seconds since Unix epoch.
pub fn now_secs() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Convert seconds to an RFC 3339 string.
pub fn secs_to_rfc3339(secs: u64) -> String {
    let dt = i64::try_from(secs)
        .ok()
        .and_then(|s| chrono::DateTime::from_timestamp(s, 0))
        .unwrap_or(chrono::DateTime::UNIX_EPOCH);
    dt.to_rfc3339()
}

/// Build a quarter label such as `2025-Q1`.
pub fn quarter_label(year: i32, quarter: u32) -> String {
    format!("{year}-Q{quarter}")
}

/// The quarter label containing the current instant.
pub fn current_quarter_label() -> String {
    let now = Utc::now();
    quarter_label(now.year(), now.month0() / 3 + 1)
}

/// Unix seconds of the first instant of the quarter named by `label`.
///
/// `"2025-Q1"` maps to 2025-01-01T00:00:00Z, `"2025-Q2"` to 2025-04-01, and so on.
pub fn quarter_start(label: &str) -> Result<u64> {
    let invalid =
        || IdentityError::InvalidEpochLabel(format!("{label:?} is not of the form YYYY-Qn"));

    let (year, quarter) = label.split_once("-Q").ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let quarter: u32 = quarter.parse().map_err(|_| invalid())?;
    if !(1..=4).contains(&quarter) {
        return Err(IdentityError::InvalidEpochLabel(format!(
            "{label:?}: quarter must be 1-4"
        )));
    }

    let month = (quarter - 1) * 3 + 1;
    let start = Utc
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(invalid)?;

    u64::try_from(start.timestamp()).map_err(|_| {
        IdentityError::InvalidEpochLabel(format!("{label:?} starts before the Unix epoch"))
    })
}
