//! Digit stack entry and decoding into minutes and seconds

use std::{fmt, str::FromStr};

/// Upper bound applied to both the minutes and the seconds field
pub const FIELD_MAX: u8 = 59;

/// Four pending decimal digits read as `MMSS`, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitStack([u8; 4]);

impl DigitStack {
    /// The reset value, `"0000"`
    pub const EMPTY: Self = Self([0; 4]);

    /// Create an empty stack
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Shift a digit in from the right.
    ///
    /// Once a full four-digit value has been entered (no leading zero), the
    /// next digit starts a fresh entry instead of shifting.
    pub fn push(self, digit: u8) -> Self {
        debug_assert!(digit <= 9, "digit out of range: {}", digit);

        let significant = self.0.iter().skip_while(|&&d| d == 0).count();
        if self != Self::EMPTY && significant >= 4 {
            return Self([0, 0, 0, digit]);
        }

        let [_, a, b, c] = self.0;
        Self([a, b, c, digit])
    }

    /// Split into `(minutes, seconds)`, saturating each field at 59
    pub fn decode(&self) -> TimerDuration {
        let [m1, m2, s1, s2] = self.0;
        let raw_minutes = m1 * 10 + m2;
        let raw_seconds = s1 * 10 + s2;

        TimerDuration {
            minutes: raw_minutes.min(FIELD_MAX),
            seconds: raw_seconds.min(FIELD_MAX),
        }
    }
}

impl Default for DigitStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DigitStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for DigitStack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(format!("digit stack must be 4 characters, got {:?}", s));
        }

        let mut digits = [0u8; 4];
        for (slot, byte) in digits.iter_mut().zip(bytes) {
            if !byte.is_ascii_digit() {
                return Err(format!("digit stack must be decimal, got {:?}", s));
            }
            *slot = byte - b'0';
        }
        Ok(Self(digits))
    }
}

/// A decoded `(minutes, seconds)` pair, each within `0..=59`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDuration {
    pub minutes: u8,
    pub seconds: u8,
}

impl TimerDuration {
    pub fn new(minutes: u8, seconds: u8) -> Self {
        Self { minutes, seconds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(s: &str) -> DigitStack {
        s.parse().unwrap()
    }

    #[test]
    fn test_push_from_empty() {
        assert_eq!(stack("0000").push(1).to_string(), "0001");
        assert_eq!(stack("0000").push(5).to_string(), "0005");
        assert_eq!(stack("0000").push(0).to_string(), "0000");
    }

    #[test]
    fn test_push_shifts_left() {
        assert_eq!(stack("0001").push(2).to_string(), "0012");
        assert_eq!(stack("0012").push(3).to_string(), "0123");
        assert_eq!(stack("0123").push(4).to_string(), "1234");
        assert_eq!(stack("0005").push(9).to_string(), "0059");
        assert_eq!(stack("0999").push(8).to_string(), "9998");
    }

    #[test]
    fn test_push_after_full_entry_starts_over() {
        assert_eq!(stack("1234").push(5).to_string(), "0005");
        assert_eq!(stack("5959").push(0).to_string(), "0000");
        assert_eq!(stack("9999").push(1).to_string(), "0001");
        assert_eq!(stack("1000").push(2).to_string(), "0002");
    }

    #[test]
    fn test_decode_in_range() {
        assert_eq!(stack("0001").decode(), TimerDuration::new(0, 1));
        assert_eq!(stack("1234").decode(), TimerDuration::new(12, 34));
        assert_eq!(stack("0530").decode(), TimerDuration::new(5, 30));
        assert_eq!(stack("5959").decode(), TimerDuration::new(59, 59));
        assert_eq!(stack("0000").decode(), TimerDuration::new(0, 0));
    }

    #[test]
    fn test_decode_saturates_each_field() {
        assert_eq!(stack("1260").decode(), TimerDuration::new(12, 59));
        assert_eq!(stack("0099").decode(), TimerDuration::new(0, 59));
        assert_eq!(stack("6034").decode(), TimerDuration::new(59, 34));
        assert_eq!(stack("9900").decode(), TimerDuration::new(59, 0));
        assert_eq!(stack("6161").decode(), TimerDuration::new(59, 59));
        assert_eq!(stack("9999").decode(), TimerDuration::new(59, 59));
        assert_eq!(stack("8888").decode(), TimerDuration::new(59, 59));
    }

    #[test]
    fn test_decode_is_repeatable() {
        let s = stack("7512");
        assert_eq!(s.decode(), s.decode());
    }

    #[test]
    fn test_typing_one_two_three_four() {
        let mut s = DigitStack::new();
        let expected = [
            ("0001", TimerDuration::new(0, 1)),
            ("0012", TimerDuration::new(0, 12)),
            ("0123", TimerDuration::new(1, 23)),
            ("1234", TimerDuration::new(12, 34)),
        ];

        for (digit, (text, duration)) in (1..=4).zip(expected) {
            s = s.push(digit);
            assert_eq!(s.to_string(), text);
            assert_eq!(s.decode(), duration);
        }
    }

    #[test]
    fn test_typing_past_sixty_seconds() {
        let s = stack("0126").push(0);
        assert_eq!(s.to_string(), "1260");
        assert_eq!(s.decode(), TimerDuration::new(12, 59));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("123".parse::<DigitStack>().is_err());
        assert!("12a4".parse::<DigitStack>().is_err());
        assert!("12345".parse::<DigitStack>().is_err());
    }
}
