//! Countdown state machine
//!
//! Owns the timer values and the pending digit stack. Ticking and the
//! end-of-timer effect are delegated to host-supplied collaborators, so the
//! machine itself never sleeps, renders or plays anything.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{DigitStack, TimerSnapshot};

/// Default timer length when none is configured: 3 minutes
pub const DEFAULT_TIMER_SECONDS: u64 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Finished => "finished",
        }
    }
}

/// Timer values owned by a single [`Countdown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub total_seconds: u64,
    pub time_left: u64,
    pub phase: Phase,
}

impl TimerState {
    /// An idle timer loaded with `seconds`
    pub fn idle(seconds: u64) -> Self {
        Self {
            total_seconds: seconds,
            time_left: seconds,
            phase: Phase::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// Handle on the periodic 1 second tick source.
///
/// `arm` while already armed must not register a second tick.
pub trait Ticker: Send {
    fn arm(&mut self);
    fn disarm(&mut self);
}

/// Receives the completion signal, once per finished countdown
pub trait EffectDispatcher: Send {
    fn on_finished(&mut self, total_seconds: u64);
}

pub struct Countdown {
    state: TimerState,
    stack: DigitStack,
    default_seconds: u64,
    ticker: Box<dyn Ticker>,
    dispatcher: Box<dyn EffectDispatcher>,
}

impl Countdown {
    /// Create an idle countdown loaded with `default_seconds`
    pub fn new(
        default_seconds: u64,
        ticker: impl Ticker + 'static,
        dispatcher: impl EffectDispatcher + 'static,
    ) -> Self {
        Self {
            state: TimerState::idle(default_seconds),
            stack: DigitStack::EMPTY,
            default_seconds,
            ticker: Box::new(ticker),
            dispatcher: Box::new(dispatcher),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn stack(&self) -> DigitStack {
        self.stack
    }

    /// Feed one typed digit through the stack and commit the decoded
    /// duration. Ignored while running.
    pub fn press_digit(&mut self, digit: u8) -> bool {
        if self.state.is_running() {
            debug!("Ignoring digit {} while running", digit);
            return false;
        }

        self.stack = self.stack.push(digit);
        let duration = self.stack.decode();
        debug!("Digit stack {} decodes to {:?}", self.stack, duration);
        self.commit_duration(duration.minutes, duration.seconds)
    }

    /// Overwrite both totals with `minutes:seconds`. Phase is unchanged.
    pub fn commit_duration(&mut self, minutes: u8, seconds: u8) -> bool {
        if self.state.is_running() {
            debug!("Ignoring duration commit while running");
            return false;
        }

        let total = u64::from(minutes) * 60 + u64::from(seconds);
        self.state.total_seconds = total;
        self.state.time_left = total;
        true
    }

    /// Begin ticking. A finished timer has nothing left and needs a new
    /// duration or a reset before it can start again.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }
        if self.state.total_seconds == 0 || self.state.time_left == 0 {
            debug!("Nothing to count down, start ignored");
            return false;
        }

        self.ticker.arm();
        self.state.phase = Phase::Running;
        info!("Countdown started with {}s left", self.state.time_left);
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.ticker.disarm();
        self.state.phase = Phase::Paused;
        info!("Countdown paused with {}s left", self.state.time_left);
        true
    }

    /// Pause when running, start otherwise
    pub fn toggle(&mut self) -> bool {
        if self.state.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Back to idle with the default duration and an empty stack
    pub fn reset(&mut self) -> bool {
        self.ticker.disarm();
        self.state = TimerState::idle(self.default_seconds);
        self.stack = DigitStack::EMPTY;
        info!("Countdown reset to {}s", self.default_seconds);
        true
    }

    /// One elapsed second. Ticks arriving outside the running phase are
    /// dropped.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running() {
            debug!("Dropping tick in phase {:?}", self.state.phase);
            return false;
        }

        self.state.time_left = self.state.time_left.saturating_sub(1);
        if self.state.time_left == 0 {
            self.ticker.disarm();
            self.state.phase = Phase::Finished;
            info!("Countdown of {}s finished", self.state.total_seconds);
            self.dispatcher.on_finished(self.state.total_seconds);
        }
        true
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::new(self.state, self.stack)
    }
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("state", &self.state)
            .field("stack", &self.stack)
            .field("default_seconds", &self.default_seconds)
            .finish_non_exhaustive()
    }
}
