//! Semantic unit types for type-safe sensor quantity handling
//!
//! Newtype wrappers keep the three quantities the engine juggles from being
//! mixed up in arithmetic: ambient temperature, relative humidity, and the
//! derived heat index. All three wrap `f32` (sensor precision is far below
//! that), implement total ordering via `total_cmp`, and serialize as plain
//! numbers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Sub};

/// Compare f32 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f32_total_cmp(a: f32, b: f32) -> Ordering {
    a.total_cmp(&b)
}

/// Ambient temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f32);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Celsius {
    /// Create a new Celsius temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Celsius(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl From<f32> for Celsius {
    fn from(v: f32) -> Self {
        Celsius(v)
    }
}

impl From<Celsius> for f32 {
    fn from(c: Celsius) -> f32 {
        c.0
    }
}

/// Relative humidity as a percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f32);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Percent {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Percent {
    /// Create a new percentage.
    ///
    /// Finite out-of-range values are stored as-is: ingestion only gates on
    /// finiteness, and a sensor reporting 104% humidity should be displayed
    /// as 104%, not silently rewritten.
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Percent(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Fraction in 0.0-1.0
    #[inline]
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Derived heat index value (dimensionless hazard metric)
///
/// Not a meteorological heat index in °C; see [`crate::heat_index`] for the
/// derivation this dashboard's advisory thresholds are calibrated against.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct HeatIndex(f32);

impl Eq for HeatIndex {}

impl PartialOrd for HeatIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeatIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for HeatIndex {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl HeatIndex {
    /// Create a new heat index value
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        HeatIndex(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for HeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Dashboards show the index at one decimal place
        write!(f, "{:.1}", self.0)
    }
}

impl Add for HeatIndex {
    type Output = HeatIndex;
    fn add(self, rhs: HeatIndex) -> HeatIndex {
        HeatIndex(self.0 + rhs.0)
    }
}

impl Sub for HeatIndex {
    type Output = HeatIndex;
    fn sub(self, rhs: HeatIndex) -> HeatIndex {
        HeatIndex(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_preserves_out_of_range_values() {
        // Only finiteness is validated at ingestion; a misbehaving sensor's
        // reading is shown as delivered
        assert_eq!(Percent::new(120.0).value(), 120.0);
        assert_eq!(Percent::new(-5.0).value(), -5.0);
        assert_eq!(Percent::new(55.5).value(), 55.5);
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        let a = HeatIndex::new(f32::NAN);
        let b = HeatIndex::new(41.0);
        // total_cmp puts NaN above all numeric values
        assert_eq!(a.cmp(&b), Ordering::Greater);
    }

    #[test]
    fn test_display_rounds_to_one_decimal() {
        assert_eq!(format!("{}", HeatIndex::new(35.86)), "35.9");
        assert_eq!(format!("{}", Celsius::new(21.04)), "21.0°C");
    }
}
