//! # Timestamp Codec
//!
//! Shared date/time codec for Stripe wire values.
//!
//! Stripe represents points in time as integer epoch seconds on most
//! endpoints, but accepts RFC 3339 strings on filter parameters. This module
//! is the single place where both representations are parsed and rendered;
//! the filter and record codecs delegate to it rather than re-implementing
//! the mapping.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Parse a wire value into a UTC timestamp.
///
/// Accepts an integer (epoch seconds) or an RFC 3339 string. Anything else
/// is reported as a textual reason; the caller decides which error kind the
/// failure maps to (top-level shape mismatch vs. field type error).
pub fn parse(value: &Value) -> Result<DateTime<Utc>, String> {
    match value {
        Value::Number(n) => {
            let secs = n
                .as_i64()
                .ok_or_else(|| format!("expected integer epoch seconds, found {}", n))?;
            parse_epoch(secs)
        }
        Value::String(s) => parse_rfc3339(s),
        other => Err(format!(
            "expected epoch seconds or an RFC 3339 string, found {}",
            kind_of(other)
        )),
    }
}

/// Parse integer epoch seconds into a UTC timestamp.
pub fn parse_epoch(secs: i64) -> Result<DateTime<Utc>, String> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| format!("epoch seconds out of range: {}", secs))
}

/// Parse an RFC 3339 date/time string into a UTC timestamp.
pub fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("not a valid RFC 3339 timestamp ({})", e))
}

/// Render a timestamp as its wire value: integer epoch seconds.
pub fn to_value(dt: DateTime<Utc>) -> Value {
    Value::from(dt.timestamp())
}

/// Render a timestamp as the string form used in query parameters.
pub fn to_query_string(dt: DateTime<Utc>) -> String {
    dt.timestamp().to_string()
}

/// Human-readable name of a JSON value's kind, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
