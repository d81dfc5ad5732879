//! Temperature acquisition seam.
//!
//! The `TemperatureSource` trait hides the ADC/DMA acquisition primitive so
//! the executor can be driven by real hardware or a scripted test double.

use crate::error::AcquisitionError;

/// Platform-agnostic averaged temperature source.
///
/// Implementations wrap the blocking acquisition primitive (typically a
/// DMA-filled sample buffer that is averaged once the transfer completes).
/// The call blocks for the duration of the acquisition; that latency is
/// part of the producer's measured execution time.
pub trait TemperatureSource {
    /// Acquire one averaged temperature reading in °C.
    ///
    /// Must not return a partially-read buffer as a valid value; failures
    /// are reported as [`AcquisitionError`] and are local to the cycle
    /// that issued the read.
    fn read_average(&mut self) -> Result<f32, AcquisitionError>;
}

impl<T: TemperatureSource + ?Sized> TemperatureSource for &mut T {
    fn read_average(&mut self) -> Result<f32, AcquisitionError> {
        (**self).read_average()
    }
}
