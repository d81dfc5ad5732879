//! Configuration traits and implementations for cycle timing.
//!
//! The `MonitorConfig` trait allows compile-time configuration of cycle
//! pacing, consumer delay, and classification thresholds without runtime
//! overhead.

/// Monitor configuration trait defining cycle timing and thresholds.
///
/// All values are const (zero runtime cost). Implementations define the
/// producer cycle period, the fixed consumer delay, the low-temperature
/// alert threshold, and the trend dead band.
pub trait MonitorConfig {
    /// Producer cycle period in milliseconds (default: 1000)
    const CYCLE_PERIOD_MS: u64;

    /// Delay between producer completion and consumer invocation,
    /// in milliseconds (default: 500)
    const CONSUMER_DELAY_MS: u64;

    /// Temperature below which the alert blink engages, in °C (default: 1.0)
    const ALERT_THRESHOLD_C: f32;

    /// Dead band for trend classification, in °C (default: 0.05)
    const TREND_EPSILON_C: f32;
}

/// Default configuration for typical monitoring nodes.
///
/// - CYCLE_PERIOD_MS: 1000 ms producer cycle
/// - CONSUMER_DELAY_MS: 500 ms consumer offset
/// - ALERT_THRESHOLD_C: 1.0 °C
/// - TREND_EPSILON_C: 0.05 °C
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl MonitorConfig for DefaultConfig {
    const CYCLE_PERIOD_MS: u64 = 1000;
    const CONSUMER_DELAY_MS: u64 = 500;
    const ALERT_THRESHOLD_C: f32 = 1.0;
    const TREND_EPSILON_C: f32 = 0.05;
}

/// Fast configuration for responsive bench setups.
///
/// - CYCLE_PERIOD_MS: 250 ms producer cycle
/// - CONSUMER_DELAY_MS: 100 ms consumer offset
/// - ALERT_THRESHOLD_C: 1.0 °C
/// - TREND_EPSILON_C: 0.05 °C
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FastConfig;

impl MonitorConfig for FastConfig {
    const CYCLE_PERIOD_MS: u64 = 250;
    const CONSUMER_DELAY_MS: u64 = 100;
    const ALERT_THRESHOLD_C: f32 = 1.0;
    const TREND_EPSILON_C: f32 = 0.05;
}
