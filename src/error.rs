//! Error types for monitor operations.
//!
//! Acquisition errors are local to the cycle that produced them; sink errors
//! surface transport failures from the output peripherals. Neither is fatal
//! to the executor loop.

use core::fmt;

/// Temperature acquisition error.
///
/// Raised by a [`TemperatureSource`](crate::source::TemperatureSource) when
/// the ADC/DMA primitive cannot deliver a trustworthy averaged reading. A
/// partially-read buffer must never be surfaced as a valid temperature;
/// sources report one of these variants instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionError {
    /// Acquisition did not complete within the sampling window
    Timeout,

    /// DMA transfer aborted or reported a bus fault
    DmaFault,

    /// Conversion produced a value outside the sensor's plausible range
    OutOfRange,
}

impl fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquisitionError::Timeout => write!(f, "acquisition timeout"),
            AcquisitionError::DmaFault => write!(f, "DMA transfer fault"),
            AcquisitionError::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

/// Output sink error.
///
/// Many matrix and display drivers never fail, but transports that can
/// reject writes report them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// Transport-level I/O failure
    Io,

    /// Peripheral busy, write not accepted
    Busy,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Io => write!(f, "sink I/O error"),
            SinkError::Busy => write!(f, "sink busy"),
        }
    }
}

/// Monitor error type.
///
/// Umbrella over the two failure domains of the executor: producing a
/// reading and driving a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// Temperature acquisition failed for this cycle
    Acquisition(AcquisitionError),

    /// An output sink rejected a write
    Sink(SinkError),
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Acquisition(e) => write!(f, "acquisition failed: {}", e),
            MonitorError::Sink(e) => write!(f, "sink failed: {}", e),
        }
    }
}

impl From<AcquisitionError> for MonitorError {
    fn from(e: AcquisitionError) -> Self {
        MonitorError::Acquisition(e)
    }
}

impl From<SinkError> for MonitorError {
    fn from(e: SinkError) -> Self {
        MonitorError::Sink(e)
    }
}
