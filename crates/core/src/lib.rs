//! Heatwatch Decision Support Engine
//!
//! The computation and state-management core behind a live
//! environmental-monitoring dashboard. An external store pushes the latest
//! temperature/humidity record; the engine derives a heat-index hazard value
//! and categorical advisory, maintains a bounded sliding window for the
//! time-series chart, drives debounced alert banners, and hands each derived
//! snapshot to a presentation callback.
//!
//! The 3D viewer, chart widget and the data store's wire protocol are
//! external collaborators: they sit on the far side of
//! [`reconciler::StreamReconciler::on_sample`] and the presentation callback
//! and never reach into engine state.
//!
//! Everything runs on one logical event-loop thread; no locking anywhere.

// Core types and utilities
pub mod core_types;

// Engine components
pub mod advisory;
pub mod alerts;
pub mod heat_index;
pub mod reconciler;
pub mod window;

// Re-export core types
pub use core_types::{Celsius, DerivedReading, HeatIndex, Percent, Sample, SampleError};

// Re-export engine surface
pub use advisory::{classify, Advisory, RiskCategory};
pub use alerts::{is_peak_hour, AlertChannel, AlertEvent, NotificationScheduler};
pub use heat_index::heat_index;
pub use reconciler::{DashboardFrame, StreamReconciler};
pub use window::SlidingWindow;
