//! Timing facility: monotonic instants, the platform clock seam, and
//! per-task execution timing.
//!
//! The executor never reads hardware timers directly; it goes through the
//! [`Clock`] trait so host tests can drive time deterministically.

/// Monotonic timestamp in microseconds since an arbitrary epoch.
///
/// Word-sized and `Copy`; safe to snapshot across the cooperative task
/// boundary on single-core targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(u64);

impl Instant {
    /// Create an instant from raw microseconds.
    pub const fn from_micros(us: u64) -> Self {
        Instant(us)
    }

    /// Raw microseconds since the epoch.
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Instant offset forward by `ms` milliseconds (saturating).
    pub const fn add_millis(self, ms: u64) -> Self {
        Instant(self.0.saturating_add(ms * 1_000))
    }

    /// Microseconds elapsed since `earlier`, saturating to zero if
    /// `earlier` is in the future.
    pub const fn micros_since(self, earlier: Instant) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Platform-agnostic monotonic clock.
///
/// Implementations wrap the target's timer peripheral (or a test double).
/// `now()` must be monotonic; wrapping timers should widen to 64 bits
/// before implementing this trait.
pub trait Clock {
    /// Current monotonic time.
    fn now(&mut self) -> Instant;

    /// Block until `deadline` has passed.
    ///
    /// Default implementation busy-waits on `now()`. Platforms with a sleep
    /// or WFI primitive should override this to save power.
    fn sleep_until(&mut self, deadline: Instant) {
        while self.now() < deadline {}
    }
}

/// Start/end timestamps of one task execution.
///
/// Recorded on every execution, read only by diagnostics. A timing that has
/// not yet been recorded (or that is inverted, which can happen if the
/// clock source is swapped at runtime) reports zero elapsed time rather
/// than a garbage duration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TaskTiming {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl TaskTiming {
    /// Timing with no recorded execution; reports the 0.000 sentinel.
    pub const fn unrecorded() -> Self {
        TaskTiming {
            start: None,
            end: None,
        }
    }

    /// Record an execution's start and end timestamps.
    pub fn record(&mut self, start: Instant, end: Instant) {
        self.start = Some(start);
        self.end = Some(end);
    }

    /// True once at least one execution has been recorded.
    pub fn recorded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Elapsed microseconds of the last recorded execution.
    ///
    /// Returns 0 if unrecorded or if start > end.
    pub fn elapsed_micros(&self) -> u64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.micros_since(start),
            _ => 0,
        }
    }

    /// Elapsed seconds of the last recorded execution (0.000 sentinel when
    /// unrecorded or inverted).
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_micros() as f32 / 1e6
    }
}
