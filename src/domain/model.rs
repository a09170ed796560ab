use crate::utils::error::{QuinielaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const DATE_FIELD: &str = "fecha";
pub const MATCHES_FIELD: &str = "partidos";

/// Draw date in the `YYYYMMDD` form the draw-by-date endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawDate(String);

impl DrawDate {
    /// Keeps the calendar part of an upstream timestamp such as
    /// `2026-10-18 00:00:00` and drops the separators.
    pub fn from_api_field(raw: &str) -> Result<Self> {
        let day: String = raw
            .chars()
            .take(10)
            .filter(|c| *c != '-')
            .collect();

        if day.is_empty() {
            return Err(QuinielaError::InvalidFieldError {
                field: DATE_FIELD.to_string(),
                reason: format!("cannot derive a draw date from '{}'", raw),
            });
        }

        Ok(Self(day))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrawDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Loose truthiness used for presence checks on upstream fields.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(obj)) => !obj.is_empty(),
    }
}

/// Both lottery endpoints answer with a list whose first element is the
/// record of interest. Any other shape yields nothing.
pub fn first_record(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Array(items) => match items.into_iter().next() {
            Some(Value::Object(obj)) => Some(obj),
            _ => None,
        },
        _ => None,
    }
}

/// The next draw's record as returned upstream. Published unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchBundle {
    data: Map<String, Value>,
}

impl MatchBundle {
    pub fn from_response(value: Value, endpoint: &str) -> Result<Self> {
        let data = first_record(value)
            .filter(|record| is_present(record.get(MATCHES_FIELD)))
            .ok_or_else(|| QuinielaError::missing_field(MATCHES_FIELD, endpoint))?;

        if !data[MATCHES_FIELD].is_array() {
            return Err(QuinielaError::InvalidFieldError {
                field: MATCHES_FIELD.to_string(),
                reason: "expected a list of matches".to_string(),
            });
        }

        Ok(Self { data })
    }

    pub fn draw_date(&self) -> Option<&str> {
        self.data.get(DATE_FIELD).and_then(Value::as_str)
    }

    pub fn matches(&self) -> &[Value] {
        self.data
            .get(MATCHES_FIELD)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn match_count(&self) -> usize {
        self.matches().len()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }
}

#[derive(Debug, Clone)]
pub struct PublishPayload {
    pub filename: String,
    pub content: String,
    pub match_count: usize,
}
