//! Desk Timer - a keyboard-driven countdown timer
//!
//! Durations are typed as four `MMSS` digits into a shift-register style
//! stack. The countdown runs on a 1 Hz tick and hands completion to a
//! selectable end-of-timer effect.

pub mod config;
pub mod effects;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use timer::{Countdown, DigitStack, Phase, TimerSnapshot};
pub use utils::signals::shutdown_signal;
