//! Diagnostic line formatting.
//!
//! Pure formatting over the latest reading, the four task timings, and the
//! trend label. The line layout is a stable contract with log-scraping
//! tooling and must not change between releases.

use core::fmt::Write;

use crate::time::TaskTiming;
use crate::trend::Trend;

/// Maximum diagnostic line length in bytes.
///
/// A full line stays under 100 bytes including the two multi-byte UTF-8
/// characters (`°`, `ê`).
pub const MAX_LINE: usize = 128;

/// Format one diagnostic line.
///
/// Layout:
/// `Temperatura: {:.2} °C | T1: {:.3}s | T2: {:.3}s | T3: {:.3}s | T4: {:.3}s | Tendência: {}`
///
/// T1 is the producer (acquisition), T2 trend classification, T3 display
/// render, T4 matrix color. Unrecorded or inverted timing pairs render as
/// `0.000` rather than a negative or garbage duration.
pub fn format_line(
    celsius: f32,
    timings: &[TaskTiming; 4],
    trend: Trend,
) -> heapless::String<MAX_LINE> {
    let mut line = heapless::String::new();
    // A line that somehow overflows the buffer is truncated, not an error;
    // the diagnostic channel is never allowed to take down the cycle.
    let _ = write!(
        line,
        "Temperatura: {:.2} °C | T1: {:.3}s | T2: {:.3}s | T3: {:.3}s | T4: {:.3}s | Tendência: {}",
        celsius,
        timings[0].elapsed_secs(),
        timings[1].elapsed_secs(),
        timings[2].elapsed_secs(),
        timings[3].elapsed_secs(),
        trend.as_str(),
    );
    line
}
