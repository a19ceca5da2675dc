//! Configuration and CLI argument handling

use clap::Parser;

use crate::{effects::EffectType, timer::DEFAULT_TIMER_SECONDS};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "desk-timer")]
#[command(about = "A keyboard-driven countdown timer")]
#[command(version)]
pub struct Config {
    /// Duration loaded at startup and on reset, in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMER_SECONDS)]
    pub default_seconds: u64,

    /// Effect presented when the countdown finishes
    #[arg(short, long, value_enum, default_value_t = EffectType::Notifier)]
    pub effect: EffectType,

    /// Print display updates as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
