//! End-of-timer effect kinds

use std::{fmt, time::Duration};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a finished countdown is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    /// Desktop-style notification with a summary message
    #[default]
    Notifier,
    /// Falling playing cards
    Cards,
    /// Snowfall
    Snow,
    /// "Time's up" popup
    Popup,
}

impl EffectType {
    pub const ALL: [EffectType; 4] = [
        EffectType::Notifier,
        EffectType::Cards,
        EffectType::Snow,
        EffectType::Popup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Notifier => "notifier",
            EffectType::Cards => "cards",
            EffectType::Snow => "snow",
            EffectType::Popup => "popup",
        }
    }

    /// Next effect in selection order, wrapping around
    pub fn next(self) -> Self {
        match self {
            EffectType::Notifier => EffectType::Cards,
            EffectType::Cards => EffectType::Snow,
            EffectType::Snow => EffectType::Popup,
            EffectType::Popup => EffectType::Notifier,
        }
    }

    /// How long the presentation stays up
    pub fn presentation_duration(&self) -> Duration {
        match self {
            EffectType::Notifier => Duration::ZERO,
            EffectType::Cards => Duration::from_millis(6000),
            EffectType::Snow => Duration::from_millis(6000),
            EffectType::Popup => Duration::from_millis(3000),
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification body for a finished countdown of `total_seconds`
pub fn completion_message(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    let length = if minutes > 0 && seconds > 0 {
        format!("{}m {}s", minutes, seconds)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    };
    format!("{} timer finished", length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all() {
        let mut effect = EffectType::Notifier;
        for expected in EffectType::ALL.iter().skip(1) {
            effect = effect.next();
            assert_eq!(effect, *expected);
        }
        assert_eq!(effect.next(), EffectType::Notifier);
    }

    #[test]
    fn test_completion_message() {
        assert_eq!(completion_message(90), "1m 30s timer finished");
        assert_eq!(completion_message(180), "3m timer finished");
        assert_eq!(completion_message(45), "45s timer finished");
        assert_eq!(completion_message(0), "0s timer finished");
    }

    #[test]
    fn test_presentation_durations() {
        assert_eq!(EffectType::Notifier.presentation_duration(), Duration::ZERO);
        assert_eq!(EffectType::Snow.presentation_duration(), Duration::from_secs(6));
        assert_eq!(EffectType::Popup.presentation_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&EffectType::Snow).unwrap();
        assert_eq!(json, "\"snow\"");
        let parsed: EffectType = serde_json::from_str("\"popup\"").unwrap();
        assert_eq!(parsed, EffectType::Popup);
    }

    #[test]
    fn test_value_enum_parses_cli_names() {
        assert_eq!(EffectType::from_str("cards", true).unwrap(), EffectType::Cards);
        assert!(EffectType::from_str("fireworks", true).is_err());
    }
}
