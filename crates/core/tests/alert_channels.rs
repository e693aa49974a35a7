//! Banner timing behavior: show/auto-hide, debounce on re-trigger, manual
//! triggers, and the peak-hours evaluation path the periodic timer drives.

use heatwatch_core::{is_peak_hour, AlertEvent, HeatIndex, NotificationScheduler};
use std::time::{Duration, Instant};

#[test]
fn test_exceedance_banner_full_lifecycle() {
    let mut scheduler = NotificationScheduler::new();
    let t0 = Instant::now();

    // Below and at the threshold: nothing shows
    assert!(!scheduler.observe_heat_index(HeatIndex::new(35.8), t0));
    assert!(!scheduler.observe_heat_index(HeatIndex::new(41.0), t0));
    assert!(!scheduler.hazard.is_visible(t0));

    // Crossing the threshold shows the banner immediately
    assert!(scheduler.observe_heat_index(HeatIndex::new(42.8), t0));
    assert!(scheduler.hazard.is_visible(t0));

    // The default 5 s auto-hide fires on the timer tick
    let later = t0 + Duration::from_secs(6);
    let (hazard_event, peak_event) = scheduler.tick(later);
    assert_eq!(hazard_event, Some(AlertEvent::Hidden));
    assert_eq!(peak_event, None);
    assert!(!scheduler.hazard.is_visible(later));
}

#[test]
fn test_stream_of_exceedances_debounces() {
    // A hot spell delivers an exceeding reading every 2 s; the banner must
    // stay up continuously (each trigger replaces the pending hide) and only
    // drop 5 s after the last one.
    let mut scheduler = NotificationScheduler::new();
    let t0 = Instant::now();

    let mut last_trigger = t0;
    for i in 0..5 {
        let now = t0 + Duration::from_secs(i * 2);
        scheduler.observe_heat_index(HeatIndex::new(43.0), now);
        let (hidden, _) = scheduler.tick(now);
        assert_eq!(hidden, None, "banner must not drop mid-spell");
        assert!(scheduler.hazard.is_visible(now));
        last_trigger = now;
    }

    let (hidden, _) = scheduler.tick(last_trigger + Duration::from_secs(5));
    assert_eq!(hidden, Some(AlertEvent::Hidden));
}

#[test]
fn test_manual_triggers_use_the_same_path() {
    let mut scheduler = NotificationScheduler::new();
    let t0 = Instant::now();

    scheduler.trigger_hazard_manually(t0);
    scheduler.trigger_peak_manually(t0);
    assert!(scheduler.hazard.is_visible(t0));
    assert!(scheduler.peak_hours.is_visible(t0));

    // Both expire independently on the same tick
    let later = t0 + Duration::from_secs(6);
    let (hazard_event, peak_event) = scheduler.tick(later);
    assert_eq!(hazard_event, Some(AlertEvent::Hidden));
    assert_eq!(peak_event, Some(AlertEvent::Hidden));
}

#[test]
fn test_periodic_peak_hours_evaluation() {
    let mut scheduler = NotificationScheduler::new();
    let t0 = Instant::now();

    // Morning startup evaluation: outside the window, nothing shows
    assert!(!scheduler.evaluate_peak_hours(9, t0));
    assert!(!scheduler.peak_hours.is_visible(t0));

    // Minute ticks across the 11:00 boundary
    let at_eleven = t0 + Duration::from_secs(60);
    assert!(scheduler.evaluate_peak_hours(11, at_eleven));
    assert!(scheduler.peak_hours.is_visible(at_eleven));

    // Re-evaluation a minute later keeps the banner up
    let next_minute = at_eleven + Duration::from_secs(60);
    assert!(scheduler.evaluate_peak_hours(11, next_minute));
    let (_, peak_event) = scheduler.tick(next_minute);
    assert_eq!(peak_event, None);

    // After 16:00 the predicate goes false and the banner ages out
    let afternoon = next_minute + Duration::from_secs(60);
    assert!(!scheduler.evaluate_peak_hours(16, afternoon));
    let (_, peak_event) = scheduler.tick(afternoon + Duration::from_secs(5));
    assert_eq!(peak_event, Some(AlertEvent::Hidden));
}

#[test]
fn test_peak_window_hours() {
    let peak: Vec<u8> = (0..24).filter(|h| is_peak_hour(*h)).collect();
    assert_eq!(peak, vec![11, 12, 13, 14, 15]);
}
