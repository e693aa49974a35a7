//! Heat index derivation
//!
//! The dashboard's hazard metric is a deliberately simple linear combination
//! of temperature and humidity, not a meteorological heat-index regression.
//! The advisory bands in [`crate::advisory`] are calibrated against exactly
//! this derivation and its rounding, so changing either would silently shift
//! every threshold.

use crate::core_types::units::{Celsius, HeatIndex, Percent};

/// Humidity contribution per percentage point
const HUMIDITY_WEIGHT: f32 = 0.01;

/// Compute the heat index for a validated sample.
///
/// Pure and total: finite inputs always produce the same finite output,
/// rounded to 2 decimal places. Presentation layers round further to 1.
#[must_use]
pub fn heat_index(temperature: Celsius, humidity: Percent) -> HeatIndex {
    let raw = temperature.value() + humidity.value() * HUMIDITY_WEIGHT;
    HeatIndex::new((raw * 100.0).round() / 100.0)
}
