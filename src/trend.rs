//! Short-term temperature trend classification.
//!
//! The classifier is deterministic given its inputs: the current reading
//! and the previously classified reading. No I/O, no other side effects.

/// Trend classification of recent temperature movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Trend {
    /// Temperature moving up beyond the dead band
    Rising,

    /// Temperature moving down beyond the dead band
    Falling,

    /// Temperature within the dead band of the previous reading
    Stable,
}

impl Trend {
    /// Stable textual label for display and diagnostics.
    ///
    /// These labels are part of the diagnostic line contract and must not
    /// change between releases: `"RISING"`, `"FALLING"`, `"STABLE"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Trend::Rising => "RISING",
            Trend::Falling => "FALLING",
            Trend::Stable => "STABLE",
        }
    }
}

impl core::fmt::Display for Trend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend classifier comparing each reading against the previous one.
///
/// A movement smaller than the epsilon dead band in either direction is
/// classified as [`Trend::Stable`], which keeps ADC noise from flapping the
/// matrix color. The very first reading has no history and is `Stable`.
#[derive(Debug, Clone)]
pub struct TrendClassifier {
    epsilon: f32,
    previous: Option<f32>,
}

impl TrendClassifier {
    /// Create a classifier with the given dead band in °C.
    pub const fn new(epsilon: f32) -> Self {
        TrendClassifier {
            epsilon,
            previous: None,
        }
    }

    /// Classify the current reading and remember it for the next call.
    pub fn classify(&mut self, celsius: f32) -> Trend {
        let trend = match self.previous {
            None => Trend::Stable,
            Some(prev) if celsius > prev + self.epsilon => Trend::Rising,
            Some(prev) if celsius < prev - self.epsilon => Trend::Falling,
            Some(_) => Trend::Stable,
        };
        self.previous = Some(celsius);
        trend
    }

    /// Forget the classification history (e.g. after a sensor swap).
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
