// src/core/shift.rs
//! Validated shift amount for the application boundary
//!
//! The transform accepts any integer, but user-facing code only ever deals in
//! shifts from 1 to 25. `Shift` carries that guarantee in the type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{ALPHABET_LEN, DEFAULT_SHIFT, MAX_SHIFT, MIN_SHIFT};
use crate::error::CoreError;

use super::Result;

/// A shift in `1..=25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shift(u8);

impl Shift {
    pub const MIN: Shift = Shift(MIN_SHIFT as u8);
    pub const MAX: Shift = Shift(MAX_SHIFT as u8);
    pub const DEFAULT: Shift = Shift(DEFAULT_SHIFT);

    /// Validate an integer shift
    pub fn new(value: i64) -> Result<Self> {
        if (MIN_SHIFT..=MAX_SHIFT).contains(&value) {
            Ok(Shift(value as u8))
        } else {
            Err(CoreError::ShiftOutOfRange(value))
        }
    }

    /// Saturate any integer into the valid range
    pub fn clamped(value: i64) -> Self {
        Shift(value.clamp(MIN_SHIFT, MAX_SHIFT) as u8)
    }

    /// Resolve raw text from a shift input box against the current shift.
    ///
    /// Only the leading integer counts, so `"7.5"` and `"7px"` both mean 7.
    /// An in-range value replaces the shift, an empty box falls back to
    /// [`Shift::DEFAULT`], and anything else leaves `current` in place.
    pub fn resolve_input(current: Shift, raw: &str) -> Shift {
        if raw.is_empty() {
            return Shift::DEFAULT;
        }
        leading_int(raw)
            .and_then(|value| Shift::new(value).ok())
            .unwrap_or(current)
    }

    /// The shift that undoes this one (`26 - value`)
    pub fn inverse(self) -> Self {
        Shift(ALPHABET_LEN as u8 - self.0)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Leading optional sign and decimal digits, after leading whitespace.
///
/// Saturates on overflow so oversized input still fails the range check.
fn leading_int(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for d in digits {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(d - b'0'));
    }

    seen.then(|| if negative { -value } else { value })
}

impl Default for Shift {
    fn default() -> Self {
        Shift::DEFAULT
    }
}

impl From<Shift> for i64 {
    fn from(shift: Shift) -> Self {
        i64::from(shift.0)
    }
}

impl TryFrom<i64> for Shift {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self> {
        Shift::new(value)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Shift {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidShift(s.to_owned()))?;
        Shift::new(value)
    }
}

impl Serialize for Shift {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Shift {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Shift::new(value).map_err(serde::de::Error::custom)
    }
}
