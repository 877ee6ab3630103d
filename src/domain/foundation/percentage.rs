//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Rounded share of `part` over `whole`; an empty whole counts as complete.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::HUNDRED;
        }
        let ratio = part.min(whole) as f64 / whole as f64;
        Self::new((ratio * 100.0).round() as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        assert!(Percentage::try_new(100).is_ok());
        assert!(Percentage::try_new(101).is_err());
    }

    #[test]
    fn percentage_of_rounds_to_nearest() {
        assert_eq!(Percentage::of(0, 8).value(), 0);
        assert_eq!(Percentage::of(1, 8).value(), 13);
        assert_eq!(Percentage::of(4, 8).value(), 50);
        assert_eq!(Percentage::of(8, 8).value(), 100);
    }

    #[test]
    fn percentage_of_empty_whole_is_complete() {
        assert_eq!(Percentage::of(0, 0), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(Percentage::new(42).to_string(), "42%");
    }
}
