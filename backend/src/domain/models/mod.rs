pub mod participant;
pub mod session;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Calendar dates are stored and exchanged as YYYY-MM-DD
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid RFC 3339 timestamp: {}", raw))?
        .with_timezone(&Utc))
}
