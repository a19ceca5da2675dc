//! Timer engine
//!
//! Digit entry, duration decoding, display arithmetic and the countdown
//! state machine. Nothing in here touches the terminal, the clock or any
//! channel.

pub mod countdown;
pub mod digit_stack;
pub mod display;
pub mod snapshot;

pub use countdown::{Countdown, EffectDispatcher, Phase, Ticker, TimerState, DEFAULT_TIMER_SECONDS};
pub use digit_stack::{DigitStack, TimerDuration};
pub use display::{format_time, progress_ratio};
pub use snapshot::TimerSnapshot;
