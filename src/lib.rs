//! # temp-cycle
//!
//! Cyclic task executor for bare-metal temperature monitoring nodes with
//! zero heap allocation.
//!
//! **Key features:**
//! - **Deterministic fan-out** - One producer cycle arms a fixed set of
//!   delayed one-shot consumer invocations; re-arming always cancels first,
//!   so at most one invocation per task is ever pending
//! - **Static allocation** - Bounded `heapless` buffers, no heap usage
//! - **Flexible hardware seams** - Platform-agnostic traits for the clock,
//!   the temperature source, and every output sink
//! - **Explicit pacing** - Cycle period and consumer delay are compile-time
//!   configuration, not emergent timing
//!
//! The executor owns all shared state (latest reading, trend, alert bit,
//! pending schedule, task timings); sinks receive read-only snapshots.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

// Compile-time configuration
pub mod config;

// Error handling
pub mod error;

// Timing facility (instants, clock seam, task timings)
pub mod time;

// Hardware seams
pub mod sinks;
pub mod source;

// Leaf tasks
pub mod alert;
pub mod trend;

// Cyclic executor orchestration
pub mod executor;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{DefaultConfig, FastConfig, MonitorConfig};

// Error types
pub use error::{AcquisitionError, MonitorError, SinkError};

// Timing
pub use time::{Clock, Instant, TaskTiming};

// Hardware seams
pub use sinks::{color_for_trend, DiagnosticSink, DisplaySink, LedSink, Rgb};
pub use source::TemperatureSource;

// Leaf tasks
pub use alert::AlertMonitor;
pub use trend::{Trend, TrendClassifier};

// Executor
pub use executor::{ConsumerTask, CycleExecutor, CycleSchedule, Reading};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
