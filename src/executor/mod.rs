//! Cyclic executor orchestration.
//!
//! The `CycleExecutor` drives the hard real-time loop: one synchronous
//! producer step (temperature acquisition) per cycle, followed by a fixed
//! fan-out of delayed one-shot consumer invocations. It exclusively owns
//! all shared state: the latest reading, the trend, the alert bit, the
//! pending schedule, and the per-task timings. Consumers receive read-only
//! snapshots and can never mutate executor state.

use core::marker::PhantomData;

use crate::alert::AlertMonitor;
use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::sinks::{color_for_trend, DiagnosticSink, DisplaySink, LedSink};
use crate::source::TemperatureSource;
use crate::time::{Clock, Instant, TaskTiming};
use crate::trend::{Trend, TrendClassifier};

// Sub-modules
pub mod diag;
pub mod schedule;

// Re-export key types
pub use schedule::{ConsumerTask, CycleSchedule};

/// Timing slot indices. T1..T4 in the diagnostic line; the alert and
/// diagnostic tasks themselves are untimed.
const TIMING_PRODUCER: usize = 0;
const TIMING_TREND: usize = 1;
const TIMING_DISPLAY: usize = 2;
const TIMING_LED: usize = 3;

/// One averaged temperature reading.
///
/// Produced exactly once per cycle; superseded, never mutated, by the next
/// cycle's reading. A reading turns stale when a later acquisition fails,
/// signalling that the value no longer tracks the sensor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reading {
    celsius: f32,
    stale: bool,
}

impl Reading {
    fn fresh(celsius: f32) -> Self {
        Reading {
            celsius,
            stale: false,
        }
    }

    fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Averaged temperature in °C.
    pub fn celsius(&self) -> f32 {
        self.celsius
    }

    /// True when a later acquisition failed and this value was retained.
    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

/// Cyclic executor: producer loop plus delayed, de-duplicated consumer
/// fan-out.
///
/// Generic over:
/// - `S`: [`TemperatureSource`] implementation (the acquisition primitive)
/// - `D`: [`DisplaySink`] implementation
/// - `L`: [`LedSink`] implementation (shared by the color and alert tasks)
/// - `G`: [`DiagnosticSink`] implementation
/// - `C`: [`MonitorConfig`] implementation (cycle timing and thresholds)
///
/// # Accepted races
///
/// A consumer invocation fires at a fixed delay after the producer cycle
/// that armed it and reads the *latest* shared values at fire time. If the
/// producer cycles faster than the consumer delay, a consumer may observe a
/// reading newer than the one that armed it, or be cancelled and re-armed
/// before ever firing. Both are intentional consequences of the
/// cancel-then-re-arm contract, not bugs.
///
/// # Porting note
///
/// Shared state is plain fields because the target is a single core with
/// cooperative dispatch. A preemptive or multi-core port
/// must wrap the reading/trend/alert snapshot in explicit synchronization.
pub struct CycleExecutor<S, D, L, G, C>
where
    S: TemperatureSource,
    D: DisplaySink,
    L: LedSink,
    G: DiagnosticSink,
    C: MonitorConfig,
{
    source: S,
    display: D,
    led: L,
    diag: G,
    classifier: TrendClassifier,
    alert: AlertMonitor,
    reading: Option<Reading>,
    trend: Trend,
    timings: [TaskTiming; 4],
    schedule: CycleSchedule,
    _config: PhantomData<C>,
}

impl<S, D, L, G, C> core::fmt::Debug for CycleExecutor<S, D, L, G, C>
where
    S: TemperatureSource,
    D: DisplaySink,
    L: LedSink,
    G: DiagnosticSink,
    C: MonitorConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CycleExecutor")
            .field("reading", &self.reading)
            .field("trend", &self.trend)
            .field("alert", &self.alert)
            .field("schedule", &self.schedule)
            .field("timings", &self.timings)
            .finish_non_exhaustive()
    }
}

impl<S, D, L, G, C> CycleExecutor<S, D, L, G, C>
where
    S: TemperatureSource,
    D: DisplaySink,
    L: LedSink,
    G: DiagnosticSink,
    C: MonitorConfig,
{
    /// Create an executor with nothing armed and no reading yet.
    pub fn new(source: S, display: D, led: L, diag: G) -> Self {
        Self {
            source,
            display,
            led,
            diag,
            classifier: TrendClassifier::new(C::TREND_EPSILON_C),
            alert: AlertMonitor::new(C::ALERT_THRESHOLD_C),
            reading: None,
            trend: Trend::Stable,
            timings: [TaskTiming::unrecorded(); 4],
            schedule: CycleSchedule::new(),
            _config: PhantomData,
        }
    }

    /// Run one producer cycle: acquire, store the reading, re-arm every
    /// consumer at the configured delay past acquisition completion.
    ///
    /// On acquisition failure the last known-good reading is retained but
    /// flagged stale, and no consumers are armed for this cycle; they
    /// never run against a value the producer did not vouch for. The error
    /// is returned for accounting and is local to this cycle.
    pub fn run_cycle<K: Clock>(&mut self, clock: &mut K) -> Result<(), MonitorError> {
        let start = clock.now();
        let acquired = self.source.read_average();
        let end = clock.now();
        self.timings[TIMING_PRODUCER].record(start, end);

        match acquired {
            Ok(celsius) => {
                self.reading = Some(Reading::fresh(celsius));
                // Arming cancels any invocation still pending from the
                // previous cycle, task by task.
                let deadline = end.add_millis(C::CONSUMER_DELAY_MS);
                for task in ConsumerTask::ALL {
                    self.schedule.arm(task, deadline);
                }
                Ok(())
            }
            Err(e) => {
                if let Some(reading) = self.reading.as_mut() {
                    reading.mark_stale();
                }
                Err(MonitorError::Acquisition(e))
            }
        }
    }

    /// Dispatch every consumer invocation that has fallen due.
    ///
    /// Each invocation fires at most once per arming; simultaneous
    /// deadlines dispatch in [`ConsumerTask::ALL`] order.
    pub fn poll<K: Clock>(&mut self, clock: &mut K) -> Result<(), MonitorError> {
        loop {
            let now = clock.now();
            match self.schedule.take_due(now) {
                Some(task) => self.dispatch(task, clock)?,
                None => return Ok(()),
            }
        }
    }

    /// Run one full cycle: producer step, then service consumers until the
    /// next cycle boundary at `CYCLE_PERIOD_MS`.
    ///
    /// The cycle period is explicit configuration, not an emergent property
    /// of acquisition latency; a producer that overruns the period simply
    /// starts the next cycle immediately.
    pub fn step<K: Clock>(&mut self, clock: &mut K) -> Result<(), MonitorError> {
        let cycle_start = clock.now();
        let next_cycle = cycle_start.add_millis(C::CYCLE_PERIOD_MS);
        let produced = self.run_cycle(clock);

        loop {
            let now = clock.now();
            if now >= next_cycle {
                break;
            }
            match self.schedule.next_deadline() {
                Some(deadline) if deadline <= now => self.poll(clock)?,
                Some(deadline) => {
                    let wake = if deadline < next_cycle {
                        deadline
                    } else {
                        next_cycle
                    };
                    clock.sleep_until(wake);
                }
                None => clock.sleep_until(next_cycle),
            }
        }

        produced
    }

    /// Run forever. Acquisition and sink failures are local to the cycle
    /// that raised them and never abort the loop.
    pub fn run<K: Clock>(&mut self, clock: &mut K) -> ! {
        loop {
            let _ = self.step(clock);
        }
    }

    /// Cancel any pending invocation of `task`. Idempotent.
    pub fn cancel(&mut self, task: ConsumerTask) -> bool {
        self.schedule.cancel(task)
    }

    /// Latest reading, if any cycle has produced one.
    pub fn latest_reading(&self) -> Option<Reading> {
        self.reading
    }

    /// Latest trend classification.
    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Whether the alert blink output is currently lit.
    pub fn alert_active(&self) -> bool {
        self.alert.is_active()
    }

    /// Pending-invocation view of the schedule.
    pub fn schedule(&self) -> &CycleSchedule {
        &self.schedule
    }

    /// Access the temperature source (e.g. to reconfigure sampling).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Access the display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Access the LED matrix sink.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Access the diagnostic sink.
    pub fn diag(&self) -> &G {
        &self.diag
    }

    /// Recorded timings: producer, trend, display, matrix color (T1..T4).
    ///
    /// A task that has not run in the current cycle still reports its
    /// previous execution; before its first execution ever it reports the
    /// 0.000 sentinel.
    pub fn timings(&self) -> &[TaskTiming; 4] {
        &self.timings
    }

    fn dispatch<K: Clock>(
        &mut self,
        task: ConsumerTask,
        clock: &mut K,
    ) -> Result<(), MonitorError> {
        // Consumers read the latest shared values at fire time, which may
        // be newer than the cycle that armed them.
        let Some(reading) = self.reading else {
            return Ok(());
        };
        let celsius = reading.celsius();

        match task {
            ConsumerTask::Trend => {
                let start = clock.now();
                self.trend = self.classifier.classify(celsius);
                self.record(TIMING_TREND, start, clock);
            }
            ConsumerTask::Display => {
                let start = clock.now();
                let result = self.display.render(celsius, self.trend);
                self.record(TIMING_DISPLAY, start, clock);
                result?;
            }
            ConsumerTask::LedColor => {
                let start = clock.now();
                let result = self
                    .led
                    .set_all(color_for_trend(self.trend))
                    .and_then(|()| self.led.flush());
                self.record(TIMING_LED, start, clock);
                result?;
            }
            ConsumerTask::Alert => {
                self.alert.service(celsius, &mut self.led)?;
            }
            ConsumerTask::Diagnostic => {
                let line = diag::format_line(celsius, &self.timings, self.trend);
                self.diag.write_line(line.as_str())?;
            }
        }
        Ok(())
    }

    fn record<K: Clock>(&mut self, slot: usize, start: Instant, clock: &mut K) {
        let end = clock.now();
        self.timings[slot].record(start, end);
    }
}
