//! Output sink seams: character display, LED matrix, and diagnostic
//! transport.
//!
//! Sinks are output-only collaborators. They receive read-only snapshots of
//! the latest reading and trend and never mutate executor-owned state.

use crate::error::SinkError;
use crate::trend::Trend;

/// RGB color for the LED matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// White, used by the low-temperature alert blink.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Red, shown while the temperature is rising.
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    /// Green, shown while the temperature is stable.
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    /// Blue, shown while the temperature is falling.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Matrix color shown for a trend classification.
pub const fn color_for_trend(trend: Trend) -> Rgb {
    match trend {
        Trend::Rising => Rgb::RED,
        Trend::Falling => Rgb::BLUE,
        Trend::Stable => Rgb::GREEN,
    }
}

/// Character display sink.
///
/// `render` owns formatting and layout; the executor only supplies the
/// latest reading and trend by value.
pub trait DisplaySink {
    /// Draw the current temperature and trend.
    fn render(&mut self, celsius: f32, trend: Trend) -> Result<(), SinkError>;
}

/// Raw LED matrix sink.
///
/// `flush` must be called after `set_all`/`clear` to make the change
/// visible on the pixels.
pub trait LedSink {
    /// Set every pixel to `color` in the staging buffer.
    fn set_all(&mut self, color: Rgb) -> Result<(), SinkError>;

    /// Blank the staging buffer.
    fn clear(&mut self) -> Result<(), SinkError>;

    /// Push the staging buffer to the pixels.
    fn flush(&mut self) -> Result<(), SinkError>;
}

/// Line-oriented diagnostic transport (UART, USB CDC, semihosting, ...).
pub trait DiagnosticSink {
    /// Write one diagnostic line. The line does not include a terminator;
    /// the transport appends whatever framing it needs.
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;
}
