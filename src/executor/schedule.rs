//! One-shot consumer invocation schedule.
//!
//! Each consumer task has exactly one deadline slot. Arming a task replaces
//! any outstanding deadline, so at most one pending invocation per task can
//! exist at any time; the slot type enforces the invariant by construction.

use crate::time::Instant;

/// The fixed set of consumer tasks armed after every producer cycle.
///
/// `ALL` is also the dispatch order for invocations that fall due in the
/// same servicing pass: trend is classified first so the display, matrix
/// color, and diagnostic line observe the freshest classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConsumerTask {
    /// Trend classification over the latest reading
    Trend,

    /// Character display render
    Display,

    /// LED matrix color mapping
    LedColor,

    /// Low-temperature alert blink
    Alert,

    /// Diagnostic line output
    Diagnostic,
}

impl ConsumerTask {
    /// All consumer tasks, in dispatch order.
    pub const ALL: [ConsumerTask; 5] = [
        ConsumerTask::Trend,
        ConsumerTask::Display,
        ConsumerTask::LedColor,
        ConsumerTask::Alert,
        ConsumerTask::Diagnostic,
    ];

    /// Number of consumer tasks.
    pub const COUNT: usize = Self::ALL.len();

    const fn index(self) -> usize {
        match self {
            ConsumerTask::Trend => 0,
            ConsumerTask::Display => 1,
            ConsumerTask::LedColor => 2,
            ConsumerTask::Alert => 3,
            ConsumerTask::Diagnostic => 4,
        }
    }
}

/// Pending one-shot deadlines, one slot per consumer task.
///
/// A slot is `Some(deadline)` while an invocation is armed and `None`
/// otherwise. Firing takes the slot, so an invocation fires exactly once
/// per arming and must be re-armed by the next producer cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleSchedule {
    pending: [Option<Instant>; ConsumerTask::COUNT],
}

impl CycleSchedule {
    /// Empty schedule with nothing armed.
    pub const fn new() -> Self {
        CycleSchedule {
            pending: [None; ConsumerTask::COUNT],
        }
    }

    /// Arm a one-shot invocation of `task` at `deadline`.
    ///
    /// Any outstanding invocation for the same task is cancelled first.
    /// Returns `true` if a pending invocation was replaced.
    pub fn arm(&mut self, task: ConsumerTask, deadline: Instant) -> bool {
        let replaced = self.cancel(task);
        self.pending[task.index()] = Some(deadline);
        replaced
    }

    /// Cancel any pending invocation of `task`.
    ///
    /// Idempotent: returns `false` without error when nothing is armed.
    pub fn cancel(&mut self, task: ConsumerTask) -> bool {
        self.pending[task.index()].take().is_some()
    }

    /// Whether `task` has a pending invocation.
    pub fn is_pending(&self, task: ConsumerTask) -> bool {
        self.pending[task.index()].is_some()
    }

    /// Whether any task has a pending invocation.
    pub fn any_pending(&self) -> bool {
        self.pending.iter().any(Option::is_some)
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().flatten().copied().min()
    }

    /// Take the first task (in dispatch order) whose deadline has passed.
    ///
    /// Taking disarms the slot, so the invocation fires exactly once.
    pub fn take_due(&mut self, now: Instant) -> Option<ConsumerTask> {
        for task in ConsumerTask::ALL {
            if let Some(deadline) = self.pending[task.index()] {
                if deadline <= now {
                    self.pending[task.index()] = None;
                    return Some(task);
                }
            }
        }
        None
    }
}
