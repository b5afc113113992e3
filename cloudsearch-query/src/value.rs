use crate::errors::QueryError;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::time::SystemTime;

/// Dates must be UTC and formatted according to IETF RFC 3339, with a literal `Z`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// strings and dates are surrounded by single quotes
const QUOTE: char = '\'';

/// A value that can appear in a `term` or as a `range` bound.
///
/// Conversions exist for the common Rust types, so factories accept plain
/// `&str`, integers, floats and `chrono` timestamps directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Renders the literal text as it appears in the query.
    ///
    /// Text is quote-wrapped verbatim. Embedded quotes are NOT escaped, so
    /// callers that accept arbitrary input must escape it beforehand.
    pub fn to_literal(&self) -> Result<String, QueryError> {
        match self {
            Value::Text(s) if s.is_empty() => Err(QueryError::Argument(
                "text value must not be empty".to_string(),
            )),
            Value::Text(s) => Ok(quote(s)),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) if !f.is_finite() => Err(QueryError::Argument(format!(
                "floating-point value must be finite, got {}",
                f
            ))),
            Value::Float(f) => Ok(format_float(*f)),
            Value::Timestamp(dt) if !(0..=9999).contains(&dt.year()) => {
                Err(QueryError::Argument(format!(
                    "timestamp year must be within 0000-9999, got {}",
                    dt.year()
                )))
            }
            Value::Timestamp(dt) => Ok(quote(&format_timestamp(dt))),
        }
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ`. Sub-second precision is dropped.
///
/// Years outside 0000-9999 gain a sign or a fifth digit here; `Value::to_literal`
/// rejects them before they reach a query.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

fn quote(s: &str) -> String {
    format!("{}{}{}", QUOTE, s, QUOTE)
}

// Integral floats keep their ".0" so they stay distinguishable from ints
fn format_float(f: f64) -> String {
    let text = f.to_string();
    if f.fract() == 0.0 && !text.contains(['.', 'e', 'E']) {
        format!("{}.0", text)
    } else {
        text
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Timestamp(v.with_timezone(&Utc))
    }
}

impl From<SystemTime> for Value {
    fn from(v: SystemTime) -> Self {
        Value::Timestamp(DateTime::<Utc>::from(v))
    }
}
