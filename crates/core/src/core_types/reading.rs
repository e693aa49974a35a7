//! Telemetry sample and derived reading types
//!
//! A [`Sample`] is what the remote data store actually delivered, after
//! validation; a [`DerivedReading`] is a sample plus everything the engine
//! computed from it. Readings are immutable once constructed and owned by the
//! sliding window after being appended.

use crate::advisory::RiskCategory;
use crate::core_types::units::{Celsius, HeatIndex, Percent};
use serde_json::Value;
use std::fmt;
use std::time::Instant;

/// Why a delivered record was rejected before reaching the engine.
///
/// These are the malformed-sample cases: the record is discarded, a warning
/// is logged, and no engine state changes. Nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// A required field was absent from the record
    MissingField(&'static str),
    /// A field was present but did not coerce to a finite number
    NotNumeric(&'static str),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::MissingField(field) => {
                write!(f, "record is missing required field '{field}'")
            }
            SampleError::NotNumeric(field) => {
                write!(f, "field '{field}' is not a finite number")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Coerce a JSON value to a finite f32, the way the dashboard always has:
/// numbers pass through, numeric strings parse, everything else is rejected.
fn coerce_finite(value: &Value, field: &'static str) -> Result<f32, SampleError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v as f32),
        _ => Err(SampleError::NotNumeric(field)),
    }
}

/// A single validated telemetry sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub temperature: Celsius,
    pub humidity: Percent,
    /// When the reconciler received the sample. The data store's own
    /// timestamp field orders delivery upstream and is not used here.
    pub captured_at: Instant,
}

impl Sample {
    /// Validate a raw record as delivered by the telemetry stream.
    ///
    /// The record is a loosely-typed document; `temperature` and `humidity`
    /// must both coerce to finite numbers or the whole sample is rejected.
    ///
    /// # Errors
    /// Returns [`SampleError`] when either field is missing or non-numeric.
    pub fn from_record(record: &Value, captured_at: Instant) -> Result<Self, SampleError> {
        let temperature = record
            .get("temperature")
            .ok_or(SampleError::MissingField("temperature"))
            .and_then(|v| coerce_finite(v, "temperature"))?;
        let humidity = record
            .get("humidity")
            .ok_or(SampleError::MissingField("humidity"))
            .and_then(|v| coerce_finite(v, "humidity"))?;

        Ok(Sample {
            temperature: Celsius::new(temperature),
            humidity: Percent::new(humidity),
            captured_at,
        })
    }
}

/// A sample augmented with everything derived from it
///
/// Never mutated after creation; the sliding window owns it once appended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedReading {
    pub temperature: Celsius,
    pub humidity: Percent,
    pub heat_index: HeatIndex,
    pub category: RiskCategory,
    pub captured_at: Instant,
}

impl DerivedReading {
    /// Build a reading from a validated sample and its derived values
    #[must_use]
    pub fn new(sample: &Sample, heat_index: HeatIndex, category: RiskCategory) -> Self {
        DerivedReading {
            temperature: sample.temperature,
            humidity: sample.humidity,
            heat_index,
            category,
            captured_at: sample.captured_at,
        }
    }
}
