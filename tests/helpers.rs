//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::{MockClock, RecordingDiag, RecordingDisplay, RecordingLed, ScriptedSource};
use temp_cycle::config::DefaultConfig;
use temp_cycle::{CycleExecutor, MonitorConfig};

/// Executor wired to scripted input and recording sinks, with the default
/// timing (1000 ms cycle, 500 ms consumer delay).
pub type TestExecutor =
    CycleExecutor<ScriptedSource, RecordingDisplay, RecordingLed, RecordingDiag, DefaultConfig>;

/// Create an executor scripted with the given readings.
pub fn executor_with_readings(readings: &[f32]) -> TestExecutor {
    CycleExecutor::new(
        ScriptedSource::with_readings(readings),
        RecordingDisplay::new(),
        RecordingLed::new(),
        RecordingDiag::new(),
    )
}

/// Run one complete cycle: producer step, then advance past the consumer
/// delay and dispatch everything that fell due.
pub fn run_one_cycle(executor: &mut TestExecutor, clock: &mut MockClock) {
    executor
        .run_cycle(clock)
        .expect("scripted acquisition failed");
    clock.advance_ms(DefaultConfig::CONSUMER_DELAY_MS);
    executor.poll(clock).expect("consumer dispatch failed");
}
