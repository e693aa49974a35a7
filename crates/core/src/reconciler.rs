//! Stream reconciliation
//!
//! [`StreamReconciler`] is the single owner of the engine's mutable state. The
//! external telemetry stream pushes the latest raw record into
//! [`StreamReconciler::on_sample`]; per record the reconciler validates,
//! derives, appends to the sliding window, evaluates the exceedance alert,
//! and hands the full derived snapshot to the presentation callback. The
//! renderers behind that callback never feed back into the engine.
//!
//! Malformed records are logged and discarded with zero state mutation; a
//! delivery error or an empty delivery is logged and otherwise ignored so the
//! dashboard keeps showing the last known good state.

use crate::advisory::{classify, Advisory};
use crate::alerts::NotificationScheduler;
use crate::core_types::reading::{DerivedReading, Sample};
use crate::core_types::units::{Celsius, HeatIndex, Percent};
use crate::heat_index::heat_index;
use crate::window::SlidingWindow;
use serde_json::Value;
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Everything a renderer needs after one successfully processed sample
#[derive(Debug, Clone, Copy)]
pub struct DashboardFrame<'a> {
    pub temperature: Celsius,
    pub humidity: Percent,
    pub heat_index: HeatIndex,
    /// Category, color token and advisory messages for the new reading
    pub advisory: &'static Advisory,
    /// Read-only view of the chart history, oldest first
    pub window: &'a SlidingWindow,
}

/// Owns the window and scheduler and reconciles the push stream into them
pub struct StreamReconciler {
    window: SlidingWindow,
    pub scheduler: NotificationScheduler,
    on_frame: Box<dyn FnMut(DashboardFrame<'_>)>,
}

impl StreamReconciler {
    /// Create a reconciler with default window capacity and alert policies
    pub fn new(on_frame: impl FnMut(DashboardFrame<'_>) + 'static) -> Self {
        Self::with_window(SlidingWindow::default(), on_frame)
    }

    /// Create a reconciler around a pre-sized window
    pub fn with_window(
        window: SlidingWindow,
        on_frame: impl FnMut(DashboardFrame<'_>) + 'static,
    ) -> Self {
        StreamReconciler {
            window,
            scheduler: NotificationScheduler::new(),
            on_frame: Box::new(on_frame),
        }
    }

    /// Process the latest record pushed by the telemetry stream.
    ///
    /// Invalid records (missing or non-numeric temperature/humidity) are
    /// logged and dropped; nothing mutates and the callback is not invoked.
    /// Repeated identical records are legitimate consecutive readings and
    /// each appends a fresh window entry.
    pub fn on_sample(&mut self, record: &Value, now: Instant) {
        let sample = match Sample::from_record(record, now) {
            Ok(sample) => sample,
            Err(err) => {
                warn!(%err, %record, "discarding malformed sample");
                return;
            }
        };

        let hi = heat_index(sample.temperature, sample.humidity);
        let advisory = classify(hi);
        debug!(
            temperature = sample.temperature.value(),
            humidity = sample.humidity.value(),
            heat_index = hi.value(),
            category = %advisory.category,
            "sample processed"
        );

        self.window
            .push(DerivedReading::new(&sample, hi, advisory.category));
        self.scheduler.observe_heat_index(hi, now);

        (self.on_frame)(DashboardFrame {
            temperature: sample.temperature,
            humidity: sample.humidity,
            heat_index: hi,
            advisory,
            window: &self.window,
        });
    }

    /// The stream collaborator reported a delivery/connection error.
    ///
    /// Logged only: no retry and no state reset here, reconnection is the
    /// stream's job and the dashboard keeps its last known good state.
    pub fn on_stream_error(&self, err: &dyn fmt::Display) {
        error!(%err, window_len = self.window.len(), "telemetry stream error");
    }

    /// The stream delivered zero records (nothing written yet).
    ///
    /// A warning-level no-op: existing window and alert state are preserved.
    pub fn on_empty_delivery(&self) {
        warn!(
            window_len = self.window.len(),
            "telemetry stream delivered no records, keeping last known state"
        );
    }

    /// Read-only view of the chart history
    #[must_use]
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::RiskCategory;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Reconciler whose callback records (heat_index, category) per frame
    fn recording_reconciler() -> (StreamReconciler, Rc<RefCell<Vec<(f32, RiskCategory)>>>) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        let reconciler = StreamReconciler::new(move |frame: DashboardFrame<'_>| {
            sink.borrow_mut()
                .push((frame.heat_index.value(), frame.advisory.category));
        });
        (reconciler, frames)
    }

    #[test]
    fn test_valid_sample_flows_to_callback_and_window() {
        let (mut reconciler, frames) = recording_reconciler();
        let now = Instant::now();

        reconciler.on_sample(&json!({ "temperature": 35, "humidity": 80 }), now);

        assert_eq!(reconciler.window().len(), 1);
        let recorded = frames.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0], (35.8, RiskCategory::ExtremeCaution));
        // 35.8 is below the 41 threshold, so no hazard banner
        assert!(!reconciler.scheduler.hazard.is_visible(now));
    }

    #[test]
    fn test_malformed_sample_is_a_pure_no_op() {
        let (mut reconciler, frames) = recording_reconciler();
        let now = Instant::now();
        reconciler.on_sample(&json!({ "temperature": 30, "humidity": 60 }), now);

        reconciler.on_sample(&json!({ "temperature": "bad", "humidity": 50 }), now);
        reconciler.on_sample(&json!({ "humidity": 50 }), now);
        reconciler.on_sample(&json!({ "temperature": null, "humidity": null }), now);

        assert_eq!(reconciler.window().len(), 1);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn test_exceedance_shows_hazard_banner() {
        let (mut reconciler, frames) = recording_reconciler();
        let now = Instant::now();

        reconciler.on_sample(&json!({ "temperature": 42, "humidity": 80 }), now);

        assert_eq!(frames.borrow()[0], (42.8, RiskCategory::Danger));
        assert!(reconciler.scheduler.hazard.is_visible(now));
    }

    #[test]
    fn test_repeated_samples_each_append() {
        let (mut reconciler, frames) = recording_reconciler();
        let now = Instant::now();
        let record = json!({ "temperature": 25, "humidity": 40 });

        reconciler.on_sample(&record, now);
        reconciler.on_sample(&record, now);
        reconciler.on_sample(&record, now);

        assert_eq!(reconciler.window().len(), 3);
        assert_eq!(frames.borrow().len(), 3);
    }

    #[test]
    fn test_empty_delivery_preserves_state() {
        let (mut reconciler, frames) = recording_reconciler();
        let now = Instant::now();
        reconciler.on_sample(&json!({ "temperature": 42, "humidity": 80 }), now);

        reconciler.on_empty_delivery();
        reconciler.on_stream_error(&"connection dropped");

        assert_eq!(reconciler.window().len(), 1);
        assert_eq!(frames.borrow().len(), 1);
        assert!(reconciler.scheduler.hazard.is_visible(now));
    }
}
