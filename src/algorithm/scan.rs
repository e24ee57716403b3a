//! Lifecycle and bookkeeping shared by the sliding-window algorithms

use std::fmt;

/// Lifecycle of a scanning algorithm: `Init -> Scanning -> Done`
///
/// A failed run falls back to `Init`; a finished run may be started again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Configured, nothing scanned yet
    #[default]
    Init,
    /// Traversal of the search interval in progress
    Scanning,
    /// Last run visited the whole search interval
    Done,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Scanning => "scanning",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Counters reported by a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Number of centers visited, always the size of the search interval
    pub centers_visited: usize,
    /// Number of element writes, including overwrites of earlier writes
    pub pixels_written: usize,
    /// Number of centers that passed the detection test (marker only)
    pub detections: usize,
}

/// Move `state` through `Scanning` while `run` executes
///
/// Lands on `Done` on success and back on `Init` on failure.
pub(crate) fn run_scan<R, E>(
    state: &mut ScanState,
    run: impl FnOnce() -> Result<R, E>,
) -> Result<R, E> {
    *state = ScanState::Scanning;
    let result = run();
    *state = if result.is_ok() {
        ScanState::Done
    } else {
        ScanState::Init
    };
    result
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/scan.rs"]
mod unit_tests;
