//! Low-temperature alert state machine.
//!
//! Holds the single `active` bit behind the blink pattern. Invoked once per
//! cycle by the executor; the intermittent blink is produced by the toggle
//! on successive invocations while the temperature stays below threshold.

use crate::error::SinkError;
use crate::sinks::{LedSink, Rgb};

/// Alert blink state machine.
///
/// Transition table (input = latest reading vs. threshold):
///
/// | state | below threshold          | at/above threshold      |
/// |-------|--------------------------|-------------------------|
/// | off   | on, `set_all` + `flush`  | off, no sink call       |
/// | on    | off, `clear` + `flush`   | off, `clear` + `flush`  |
///
/// The forced off transition issues a clear even though the logical state
/// is about to be "off" anyway, so the physical matrix is never left lit.
#[derive(Debug, Clone)]
pub struct AlertMonitor {
    threshold: f32,
    active: bool,
}

impl AlertMonitor {
    /// Create an inactive monitor with the given threshold in °C.
    pub const fn new(threshold: f32) -> Self {
        AlertMonitor {
            threshold,
            active: false,
        }
    }

    /// Whether the blink output is currently lit.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run one alert invocation against the latest reading.
    pub fn service<L: LedSink>(&mut self, celsius: f32, led: &mut L) -> Result<(), SinkError> {
        if celsius < self.threshold {
            if self.active {
                led.clear()?;
                led.flush()?;
                self.active = false;
            } else {
                led.set_all(Rgb::WHITE)?;
                led.flush()?;
                self.active = true;
            }
        } else if self.active {
            led.clear()?;
            led.flush()?;
            self.active = false;
        }
        Ok(())
    }
}
