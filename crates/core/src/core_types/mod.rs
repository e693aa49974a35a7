//! Core types and utilities

pub mod reading;
pub mod units;

pub use reading::{DerivedReading, Sample, SampleError};
pub use units::{Celsius, HeatIndex, Percent};
