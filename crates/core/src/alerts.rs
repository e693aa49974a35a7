//! Timed alert banners
//!
//! Two independent alert channels drive the dashboard's transient banners:
//! one for heat-index exceedance, one for peak heat hours. Each channel is a
//! small show/auto-hide state machine; the actual banner rendering is an
//! external collaborator that reads visibility (or the [`AlertEvent`]s
//! emitted by [`AlertChannel::tick`]) and never feeds back in.
//!
//! Everything runs on the one event loop thread. Auto-hide is realized by an
//! expiry deadline checked on the external timer's tick, so a re-trigger
//! "cancels" the pending hide simply by replacing the deadline
//! (last-trigger-wins, never additive).

use crate::core_types::units::HeatIndex;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long a banner stays up after its last trigger
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Heat-index value above which the exceedance banner is shown
pub const HAZARD_THRESHOLD: f32 = 41.0;

/// Local hours (inclusive start, exclusive end) counting as peak heat hours
pub const PEAK_HOURS: (u8, u8) = (11, 16);

/// Visibility transition reported to the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    /// The banner just became visible
    Shown,
    /// The banner's auto-hide deadline elapsed
    Hidden,
}

/// One independent show/auto-hide banner timeline
#[derive(Debug, Clone)]
pub struct AlertChannel {
    name: &'static str,
    text: &'static str,
    hide_delay: Duration,
    expires_at: Option<Instant>,
}

impl AlertChannel {
    /// Create a hidden channel with the default 5 s auto-hide delay
    #[must_use]
    pub fn new(name: &'static str, text: &'static str) -> Self {
        Self::with_hide_delay(name, text, DEFAULT_HIDE_DELAY)
    }

    /// Create a hidden channel with a custom auto-hide delay
    #[must_use]
    pub fn with_hide_delay(name: &'static str, text: &'static str, hide_delay: Duration) -> Self {
        AlertChannel {
            name,
            text,
            hide_delay,
            expires_at: None,
        }
    }

    /// Show the banner now and (re)schedule its auto-hide.
    ///
    /// Re-triggering while visible replaces the pending deadline with a fresh
    /// one, so the banner stays up a full delay from the latest trigger.
    pub fn trigger(&mut self, now: Instant) {
        let was_visible = self.is_visible(now);
        self.expires_at = Some(now + self.hide_delay);
        if was_visible {
            debug!(channel = self.name, "alert re-triggered, hide rescheduled");
        } else {
            info!(channel = self.name, text = self.text, "alert shown");
        }
    }

    /// Force the banner hidden and cancel any pending auto-hide
    pub fn reset(&mut self) {
        if self.expires_at.take().is_some() {
            info!(channel = self.name, "alert reset");
        }
    }

    /// Advance the channel's clock; emits the transition that occurred, if
    /// any. Called by the external timer collaborator.
    pub fn tick(&mut self, now: Instant) -> Option<AlertEvent> {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.expires_at = None;
                info!(channel = self.name, "alert auto-hidden");
                Some(AlertEvent::Hidden)
            }
            _ => None,
        }
    }

    /// Whether the banner is up at `now`
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }

    /// When the banner will auto-hide, if currently visible
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Fixed banner text for this channel
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }
}

/// True when `local_hour` falls in the peak heat window
#[must_use]
pub fn is_peak_hour(local_hour: u8) -> bool {
    (PEAK_HOURS.0..PEAK_HOURS.1).contains(&local_hour)
}

/// The two banner channels plus their trigger policies
///
/// The hazard channel is driven per-sample by the stream reconciler; the
/// peak-hours channel is driven at startup and by a periodic external timer
/// (once a minute in the demo). Both also accept manual triggers from debug
/// harnesses, through the same paths real conditions use.
#[derive(Debug, Clone)]
pub struct NotificationScheduler {
    pub hazard: AlertChannel,
    pub peak_hours: AlertChannel,
    threshold: f32,
}

impl NotificationScheduler {
    /// Create both channels hidden, with the standard threshold and texts
    #[must_use]
    pub fn new() -> Self {
        NotificationScheduler {
            hazard: AlertChannel::new(
                "hazard-exceedance",
                "Heat index has exceeded the safe threshold.",
            ),
            peak_hours: AlertChannel::new(
                "peak-hours",
                "Peak heat hours: expect elevated readings until late afternoon.",
            ),
            threshold: HAZARD_THRESHOLD,
        }
    }

    /// Evaluate a freshly derived heat index against the exceedance
    /// threshold; shows the hazard banner when exceeded. Returns whether the
    /// threshold was exceeded.
    pub fn observe_heat_index(&mut self, heat_index: HeatIndex, now: Instant) -> bool {
        let exceeded = heat_index.value() > self.threshold;
        if exceeded {
            self.hazard.trigger(now);
        }
        exceeded
    }

    /// Evaluate the peak-hours predicate for the given local hour; shows the
    /// peak banner during peak hours. Returns the predicate result.
    ///
    /// Called once at startup and then by the periodic timer collaborator.
    pub fn evaluate_peak_hours(&mut self, local_hour: u8, now: Instant) -> bool {
        let peak = is_peak_hour(local_hour);
        if peak {
            self.peak_hours.trigger(now);
        }
        peak
    }

    /// Manual/debug trigger for the hazard banner
    pub fn trigger_hazard_manually(&mut self, now: Instant) {
        self.hazard.trigger(now);
    }

    /// Manual/debug trigger for the peak-hours banner
    pub fn trigger_peak_manually(&mut self, now: Instant) {
        self.peak_hours.trigger(now);
    }

    /// Advance both channels; returns (hazard, peak) transitions if any
    pub fn tick(&mut self, now: Instant) -> (Option<AlertEvent>, Option<AlertEvent>) {
        (self.hazard.tick(now), self.peak_hours.tick(now))
    }
}

impl Default for NotificationScheduler {
    fn default() -> Self {
        NotificationScheduler::new()
    }
}
