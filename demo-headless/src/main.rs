//! Headless dashboard demo
//!
//! Stands in for the production collaborators the engine normally sits
//! between: it synthesizes a push-based telemetry stream (jittered around
//! configurable base conditions, optionally with malformed records mixed in),
//! plays the periodic timer that re-evaluates peak hours and expires banners,
//! and renders each dashboard frame as a console line with a text sparkline
//! instead of the 3D scene and chart widget.

use clap::Parser;
use heatwatch_core::{DashboardFrame, SlidingWindow, StreamReconciler};
use rand::Rng;
use serde_json::json;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Telemetry dashboard demo with configurable stream conditions
#[derive(Parser, Debug)]
#[command(name = "heatwatch-demo")]
#[command(about = "Headless environmental-monitoring dashboard demo", long_about = None)]
struct Args {
    /// Base temperature in °C
    #[arg(short, long, default_value_t = 30.0)]
    temperature: f32,

    /// Base relative humidity in %
    #[arg(long, default_value_t = 60.0)]
    humidity: f32,

    /// Random jitter amplitude applied to both series
    #[arg(short, long, default_value_t = 1.5)]
    jitter: f32,

    /// Warming trend per sample in °C (ramp past the alert threshold)
    #[arg(long, default_value_t = 0.0)]
    trend: f32,

    /// Number of samples to stream
    #[arg(short = 'n', long, default_value_t = 40)]
    samples: u32,

    /// Interval between samples in milliseconds
    #[arg(short, long, default_value_t = 250)]
    interval_ms: u64,

    /// Chart window capacity
    #[arg(long, default_value_t = 20)]
    capacity: usize,

    /// Inject a malformed record every N samples (0 = never)
    #[arg(long, default_value_t = 0)]
    inject_bad: u32,

    /// Local hour for the peak-hours predicate (defaults to the UTC hour)
    #[arg(long)]
    hour: Option<u8>,

    /// Fire the manual hazard-banner trigger before streaming
    #[arg(long)]
    trigger_hazard: bool,

    /// Fire the manual peak-hours-banner trigger before streaming
    #[arg(long)]
    trigger_peak: bool,
}

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the window's heat-index series as a one-line sparkline
fn sparkline(window: &SlidingWindow) -> String {
    let values: Vec<f32> = window.iter().map(|r| r.heat_index.value()).collect();
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(f32::EPSILON);
    values
        .iter()
        .map(|v| {
            let level = ((v - min) / span * 7.0).round() as usize;
            SPARK_LEVELS[level.min(7)]
        })
        .collect()
}

fn utc_hour() -> u8 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    ((secs / 3600) % 24) as u8
}

/// How often the peak-hours predicate is re-evaluated
const PEAK_EVAL_INTERVAL: Duration = Duration::from_secs(60);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Heatwatch Dashboard Demo ===\n");

    let mut reconciler = StreamReconciler::with_window(
        SlidingWindow::new(args.capacity),
        |frame: DashboardFrame<'_>| {
            println!(
                "{:>5.1}°C  {:>5.1}%  HI {:>5}  {:<15}  {}",
                frame.temperature.value(),
                frame.humidity.value(),
                frame.heat_index,
                format!("[{}]", frame.advisory.category),
                sparkline(frame.window),
            );
        },
    );

    let start = Instant::now();
    let local_hour = args.hour.unwrap_or_else(utc_hour);

    // Startup peak-hours evaluation, then once a minute below
    if reconciler.scheduler.evaluate_peak_hours(local_hour, start) {
        println!("** {}\n", reconciler.scheduler.peak_hours.text());
    }
    let mut last_peak_eval = start;

    // Manual/debug triggers share the real trigger path
    if args.trigger_hazard {
        reconciler.scheduler.trigger_hazard_manually(start);
        println!("** (manual) {}\n", reconciler.scheduler.hazard.text());
    }
    if args.trigger_peak {
        reconciler.scheduler.trigger_peak_manually(start);
        println!("** (manual) {}\n", reconciler.scheduler.peak_hours.text());
    }

    let mut rng = rand::rng();
    let mut hazard_was_up = reconciler.scheduler.hazard.is_visible(start);

    for i in 0..args.samples {
        let now = Instant::now();

        let record = if args.inject_bad > 0 && i % args.inject_bad == args.inject_bad - 1 {
            json!({ "temperature": "sensor-fault", "humidity": args.humidity })
        } else {
            let temp = args.temperature
                + args.trend * i as f32
                + rng.random_range(-args.jitter..=args.jitter);
            let hum = (args.humidity + rng.random_range(-args.jitter..=args.jitter))
                .clamp(0.0, 100.0);
            json!({
                "temperature": temp,
                "humidity": hum,
                "timestamp": SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs(),
            })
        };

        reconciler.on_sample(&record, now);

        // Surface banner transitions the way the DOM renderer would
        let hazard_up = reconciler.scheduler.hazard.is_visible(now);
        if hazard_up && !hazard_was_up {
            println!("** {}\n", reconciler.scheduler.hazard.text());
        }
        hazard_was_up = hazard_up;

        // Periodic timer collaborator: banner expiry + peak re-evaluation
        let (hazard_hidden, peak_hidden) = reconciler.scheduler.tick(now);
        if hazard_hidden.is_some() {
            println!("** hazard banner cleared\n");
            hazard_was_up = false;
        }
        if peak_hidden.is_some() {
            println!("** peak-hours banner cleared\n");
        }
        if now.duration_since(last_peak_eval) >= PEAK_EVAL_INTERVAL {
            reconciler.scheduler.evaluate_peak_hours(local_hour, now);
            last_peak_eval = now;
        }

        std::thread::sleep(Duration::from_millis(args.interval_ms));
    }

    let window = reconciler.window();
    println!("\nStreamed {} samples, window holds {}/{} readings", args.samples, window.len(), window.capacity());
    if let Some(latest) = window.latest() {
        println!(
            "Latest: {} {} HI {} [{}]",
            latest.temperature, latest.humidity, latest.heat_index, latest.category
        );
    }
}
