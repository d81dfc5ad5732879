//! Test fixtures and utilities for temp-cycle testing.
//!
//! Provides:
//! - `MockClock`: deterministic `Clock` implementation
//! - `ScriptedSource`: queue-driven `TemperatureSource`
//! - `RecordingDisplay` / `RecordingLed` / `RecordingDiag`: capture sinks

#![allow(dead_code)]

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use temp_cycle::error::{AcquisitionError, SinkError};
use temp_cycle::sinks::{DiagnosticSink, DisplaySink, LedSink, Rgb};
use temp_cycle::source::TemperatureSource;
use temp_cycle::time::{Clock, Instant};
use temp_cycle::trend::Trend;

// ============================================================================
// MockClock - Deterministic Clock Implementation
// ============================================================================

/// Deterministic clock for testing.
///
/// Time only moves when the test advances it or when the code under test
/// sleeps; `sleep_until` jumps straight to the deadline. An optional tick
/// makes every `now()` call cost a fixed number of microseconds, so task
/// timings come out non-zero when a test needs them to.
#[derive(Debug)]
pub struct MockClock {
    now_us: u64,
    tick_us: u64,
}

impl MockClock {
    /// Clock starting at zero with no per-call tick.
    pub fn new() -> Self {
        Self {
            now_us: 0,
            tick_us: 0,
        }
    }

    /// Clock whose `now()` advances time by `tick_us` on every call.
    pub fn with_tick_us(tick_us: u64) -> Self {
        Self { now_us: 0, tick_us }
    }

    /// Advance time by `ms` milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_us += ms * 1_000;
    }

    /// Advance time by `us` microseconds.
    pub fn advance_us(&mut self, us: u64) {
        self.now_us += us;
    }

    /// Current raw time in microseconds.
    pub fn raw_us(&self) -> u64 {
        self.now_us
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&mut self) -> Instant {
        let t = Instant::from_micros(self.now_us);
        self.now_us += self.tick_us;
        t
    }

    fn sleep_until(&mut self, deadline: Instant) {
        if deadline.as_micros() > self.now_us {
            self.now_us = deadline.as_micros();
        }
    }
}

// ============================================================================
// ScriptedSource - Queue-driven Temperature Source
// ============================================================================

/// Temperature source that replays a scripted sequence of results.
///
/// Returns `AcquisitionError::Timeout` once the script is exhausted, so a
/// test that runs more cycles than it scripted fails loudly instead of
/// silently repeating a value.
#[derive(Debug)]
pub struct ScriptedSource {
    script: VecDeque<Result<f32, AcquisitionError>>,
}

impl ScriptedSource {
    /// Source scripted with successful readings.
    pub fn with_readings(readings: &[f32]) -> Self {
        Self {
            script: readings.iter().map(|&r| Ok(r)).collect(),
        }
    }

    /// Source scripted with explicit results (including failures).
    pub fn with_results(results: &[Result<f32, AcquisitionError>]) -> Self {
        Self {
            script: results.iter().copied().collect(),
        }
    }

    /// Append a result to the script.
    pub fn push(&mut self, result: Result<f32, AcquisitionError>) {
        self.script.push_back(result);
    }

    /// Remaining scripted results.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl TemperatureSource for ScriptedSource {
    fn read_average(&mut self) -> Result<f32, AcquisitionError> {
        self.script
            .pop_front()
            .unwrap_or(Err(AcquisitionError::Timeout))
    }
}

// ============================================================================
// Recording Sinks
// ============================================================================

/// Display sink capturing every render call.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    /// All `(celsius, trend)` pairs rendered, in order.
    pub frames: Vec<(f32, Trend)>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, celsius: f32, trend: Trend) -> Result<(), SinkError> {
        self.frames.push((celsius, trend));
        Ok(())
    }
}

/// One recorded LED matrix operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LedOp {
    SetAll(Rgb),
    Clear,
    Flush,
}

/// LED sink capturing the raw operation stream.
#[derive(Debug, Default)]
pub struct RecordingLed {
    /// All operations, in order.
    pub ops: Vec<LedOp>,
}

impl RecordingLed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `SetAll` operations with the given color.
    pub fn set_all_count(&self, color: Rgb) -> usize {
        self.ops
            .iter()
            .filter(|op| **op == LedOp::SetAll(color))
            .count()
    }

    /// Number of `Clear` operations.
    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == LedOp::Clear).count()
    }

    /// Last buffer-mutating operation (`SetAll`/`Clear`) before the final
    /// flush, i.e. what the matrix physically shows.
    pub fn last_visible(&self) -> Option<LedOp> {
        self.ops
            .iter()
            .rev()
            .find(|op| **op != LedOp::Flush)
            .copied()
    }
}

impl LedSink for RecordingLed {
    fn set_all(&mut self, color: Rgb) -> Result<(), SinkError> {
        self.ops.push(LedOp::SetAll(color));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SinkError> {
        self.ops.push(LedOp::Clear);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.ops.push(LedOp::Flush);
        Ok(())
    }
}

/// Diagnostic sink capturing every line.
#[derive(Debug, Default)]
pub struct RecordingDiag {
    /// All lines written, in order.
    pub lines: Vec<String>,
}

impl RecordingDiag {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for RecordingDiag {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push(String::from(line));
        Ok(())
    }
}
