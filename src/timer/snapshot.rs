//! Display-refresh view of a countdown

use serde::{Deserialize, Serialize};

use super::{format_time, progress_ratio, DigitStack, Phase, TimerState};

/// Everything a renderer needs after a state change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub total_seconds: u64,
    pub time_left: u64,
    /// `time_left` as `MM:SS`
    pub display: String,
    pub progress_ratio: f64,
    pub stack: String,
}

impl TimerSnapshot {
    pub fn new(state: TimerState, stack: DigitStack) -> Self {
        Self {
            phase: state.phase,
            total_seconds: state.total_seconds,
            time_left: state.time_left,
            display: format_time(state.time_left),
            progress_ratio: progress_ratio(
                i64::try_from(state.total_seconds).unwrap_or(i64::MAX),
                i64::try_from(state.time_left).unwrap_or(i64::MAX),
            ),
            stack: stack.to_string(),
        }
    }

    /// Fraction of the countdown already elapsed, in `0.0..=1.0`
    pub fn elapsed_fraction(&self) -> f64 {
        (1.0 - self.progress_ratio).clamp(0.0, 1.0)
    }
}
