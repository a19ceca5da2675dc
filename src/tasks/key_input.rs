//! Keyboard command reader
//!
//! Reads stdin a line at a time and treats each character as a key press.

use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Digit(u8),
    Toggle,
    Reset,
    CycleEffect,
    Quit,
}

impl KeyCommand {
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            '0'..='9' => key.to_digit(10).map(|d| KeyCommand::Digit(d as u8)),
            ' ' | 's' | 'S' => Some(KeyCommand::Toggle),
            'r' | 'R' => Some(KeyCommand::Reset),
            'e' | 'E' => Some(KeyCommand::CycleEffect),
            'q' | 'Q' => Some(KeyCommand::Quit),
            _ => None,
        }
    }

    /// Commands for one input line. A bare Enter toggles the timer.
    pub fn parse_line(line: &str) -> Vec<Self> {
        if line.is_empty() {
            return vec![KeyCommand::Toggle];
        }

        line.chars()
            .filter_map(|key| {
                let command = KeyCommand::from_char(key);
                if command.is_none() {
                    debug!("Ignoring unmapped key {:?}", key);
                }
                command
            })
            .collect()
    }
}

/// Apply one command. Returns `false` once the user asked to quit.
pub fn apply_command(state: &AppState, command: KeyCommand) -> bool {
    let result = match command {
        KeyCommand::Digit(digit) => state.press_digit(digit).map(|_| ()),
        KeyCommand::Toggle => state.toggle().map(|_| ()),
        KeyCommand::Reset => state.reset().map(|_| ()),
        KeyCommand::CycleEffect => state
            .cycle_effect_type()
            .map(|effect| info!("End-of-timer effect: {}", effect)),
        KeyCommand::Quit => return false,
    };

    if let Err(e) = result {
        error!("Failed to apply {:?}: {}", command, e);
    }
    true
}

/// Task that forwards keyboard commands until quit or end of input
pub async fn key_input_task(state: Arc<AppState>) {
    info!("Keys: 0-9 set MMSS, Enter/space/s start-pause, r reset, e effect, q quit");

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                for command in KeyCommand::parse_line(&line) {
                    if !apply_command(&state, command) {
                        info!("Quit requested");
                        return;
                    }
                }
            }
            Ok(None) => {
                info!("Input closed");
                return;
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                return;
            }
        }
    }
}
