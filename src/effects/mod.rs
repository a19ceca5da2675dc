//! End-of-timer effects
//!
//! Effect kinds, their presentation parameters and the dispatcher that
//! connects the countdown to the effect runner task.

pub mod dispatcher;
pub mod effect_type;

pub use dispatcher::{ChannelDispatcher, EffectRequest};
pub use effect_type::{completion_message, EffectType};
