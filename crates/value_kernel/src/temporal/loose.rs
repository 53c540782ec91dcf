//! Ranges from loosely structured records
//!
//! The range algebra only ever sees [`LooseBounds`], a pair of optional typed
//! bounds. Turning a JSON object or a serializable record into that pair is
//! the job of the adapters in this module.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::instant::Instant;
use super::range::TemporalRange;
use super::TemporalError;
use crate::config::KernelConfig;

/// Optional start and end of a range
///
/// Missing bounds resolve to the sentinels:
/// - neither: `[PAST, FUTURE]`
/// - end only: `[PAST, end]`
/// - start only: `[start, FUTURE]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LooseBounds<I> {
    pub start: Option<I>,
    pub end: Option<I>,
}

impl<I: Instant> LooseBounds<I> {
    pub fn new(start: Option<I>, end: Option<I>) -> Self {
        Self { start, end }
    }

    /// Reads `start`/`end` from a JSON object
    pub fn from_json(value: &Value) -> Result<Self, TemporalError> {
        Self::from_json_with_keys(value, "start", "end")
    }

    /// Reads the bounds using the key names from the kernel configuration
    pub fn from_json_with_config(value: &Value, config: &KernelConfig) -> Result<Self, TemporalError> {
        Self::from_json_with_keys(value, &config.loose_start_key, &config.loose_end_key)
    }

    /// Reads the bounds from a JSON object under custom keys
    ///
    /// Absent and `null` members are missing bounds. Present members must be
    /// strings accepted by the instant parser.
    pub fn from_json_with_keys(
        value: &Value,
        start_key: &str,
        end_key: &str,
    ) -> Result<Self, TemporalError> {
        let record = value.as_object().ok_or_else(|| {
            debug!(kind = json_kind(value), "loose range input is not a record");
            TemporalError::NotARecord(json_kind(value).to_string())
        })?;
        Ok(Self {
            start: read_bound(record, start_key)?,
            end: read_bound(record, end_key)?,
        })
    }

    /// Reads the bounds from any record that serializes to a map
    ///
    /// Typed instant fields round-trip through their serde form unchanged.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self, TemporalError> {
        let value = serde_json::to_value(record)
            .map_err(|e| TemporalError::NotARecord(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Resolves missing bounds to the sentinels
    pub fn into_range(self) -> TemporalRange<I> {
        match (self.start, self.end) {
            (None, None) => TemporalRange::infinite(),
            (None, Some(end)) => TemporalRange::up_to(end),
            (Some(start), None) => TemporalRange::starting_on(start),
            (Some(start), Some(end)) => TemporalRange::new(start, end),
        }
    }
}

impl<I: Instant> From<LooseBounds<I>> for TemporalRange<I> {
    fn from(bounds: LooseBounds<I>) -> Self {
        bounds.into_range()
    }
}

fn read_bound<I: Instant>(record: &Map<String, Value>, key: &str) -> Result<Option<I>, TemporalError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => I::from_iso8601(text).map(Some),
        Some(other) => Err(TemporalError::InvalidInstant {
            input: other.to_string(),
            reason: format!("{key} must be an ISO-8601 string"),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::DateRange;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_no_bounds_is_infinite() {
        let range: DateRange = LooseBounds::<NaiveDate>::from_json(&json!({})).unwrap().into();
        assert!(range.is_infinite());
    }

    #[test]
    fn test_null_bound_counts_as_missing() {
        let bounds = LooseBounds::<NaiveDate>::from_json(&json!({"start": "2006-07-01", "end": null}))
            .unwrap();
        let range = bounds.into_range();
        assert!(range.is_future());
        assert!(!range.is_past());
    }

    #[test]
    fn test_array_input_is_rejected() {
        let result = LooseBounds::<NaiveDate>::from_json(&json!(["2006-07-01"]));
        assert_eq!(result, Err(TemporalError::NotARecord("array".to_string())));
    }

    #[test]
    fn test_numeric_bound_is_rejected() {
        let result = LooseBounds::<NaiveDate>::from_json(&json!({"start": 20060701}));
        assert!(matches!(result, Err(TemporalError::InvalidInstant { .. })));
    }
}
