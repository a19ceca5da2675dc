//! State management module
//!
//! Holds the shared application state that background tasks operate on.

pub mod app_state;

pub use app_state::AppState;
