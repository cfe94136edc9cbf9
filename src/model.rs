//! Core value types for the landing page widgets.
//! `DisplayValue` is the counter shown next to the plus/minus buttons.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseValueError;

/// Lowest value the counter can show; decrement stops here.
pub const MIN_VALUE: u8 = 1;
/// Highest value the counter can show; increment stops here.
pub const MAX_VALUE: u8 = 99;

/// Counter value, always rendered as two digits ("01".."99").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayValue(u8);

impl DisplayValue {
    pub fn new(value: u8) -> Option<Self> {
        (MIN_VALUE..=MAX_VALUE).contains(&value).then_some(Self(value))
    }

    /// Pulls any integer into the counter range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(MIN_VALUE as i64, MAX_VALUE as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One more, or unchanged at the ceiling.
    pub fn incremented(self) -> Self {
        if self.0 < MAX_VALUE { Self(self.0 + 1) } else { self }
    }

    /// One less, but only while the value is strictly greater than one.
    pub fn decremented(self) -> Self {
        if self.0 > MIN_VALUE { Self(self.0 - 1) } else { self }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self(MIN_VALUE)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 10 {
            write!(f, "0{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for DisplayValue {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| ParseValueError::NotNumeric(trimmed.to_string()))?;
        if (MIN_VALUE as i64..=MAX_VALUE as i64).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(ParseValueError::OutOfRange(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(DisplayValue::new(1).unwrap().to_string(), "01");
        assert_eq!(DisplayValue::new(9).unwrap().to_string(), "09");
        assert_eq!(DisplayValue::new(10).unwrap().to_string(), "10");
        assert_eq!(DisplayValue::new(99).unwrap().to_string(), "99");
    }

    #[test]
    fn increments_up_to_the_ceiling() {
        for n in 1..=8u8 {
            let next = DisplayValue::new(n).unwrap().incremented();
            assert_eq!(next.to_string(), format!("0{}", n + 1));
        }
        assert_eq!(DisplayValue::new(9).unwrap().incremented().to_string(), "10");
        assert_eq!(DisplayValue::new(99).unwrap().incremented().to_string(), "99");
    }

    #[test]
    fn decrement_floor_is_one() {
        assert_eq!(DisplayValue::new(2).unwrap().decremented().to_string(), "01");
        assert_eq!(DisplayValue::new(10).unwrap().decremented().to_string(), "09");
        let floor = DisplayValue::default();
        assert_eq!(floor.decremented(), floor);
    }

    #[test]
    fn parses_padded_and_bare_numbers() {
        assert_eq!("04".parse::<DisplayValue>().unwrap().get(), 4);
        assert_eq!(" 7 ".parse::<DisplayValue>().unwrap().to_string(), "07");
        assert_eq!("42".parse::<DisplayValue>().unwrap().get(), 42);
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert_eq!(
            "abc".parse::<DisplayValue>(),
            Err(ParseValueError::NotNumeric("abc".into()))
        );
        assert_eq!("100".parse::<DisplayValue>(), Err(ParseValueError::OutOfRange(100)));
        assert_eq!("00".parse::<DisplayValue>(), Err(ParseValueError::OutOfRange(0)));
        assert_eq!("-3".parse::<DisplayValue>(), Err(ParseValueError::OutOfRange(-3)));
    }

    #[test]
    fn clamps_into_range() {
        assert_eq!(DisplayValue::clamped(150).get(), 99);
        assert_eq!(DisplayValue::clamped(-2).get(), 1);
        assert_eq!(DisplayValue::clamped(12).get(), 12);
    }
}
