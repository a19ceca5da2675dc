//! Background tasks module
//!
//! Tasks that drive the countdown from the outside: the tick source, keyboard
//! input, display refresh and effect presentation.

pub mod display;
pub mod effect_runner;
pub mod key_input;
pub mod ticker;

// Re-export main functions
pub use display::display_task;
pub use effect_runner::effect_runner_task;
pub use key_input::key_input_task;
pub use ticker::{countdown_ticker_task, WatchTicker};
