//! 18-decimal unsigned fixed-point amount

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AmmError, PRECISION, PRECISION_MULTIPLIER};

/// Non-negative fixed-point quantity with 18 fractional digits.
///
/// The raw `u128` is the value multiplied by 10^18, so ordering and equality
/// are exact integer comparisons.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(u128);

impl Dec {
    pub const ZERO: Dec = Dec(0);
    pub const ONE: Dec = Dec(PRECISION_MULTIPLIER);

    pub const fn from_raw(raw: u128) -> Self {
        Dec(raw)
    }

    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Whole-unit amount. Every `u64` fits: 2^64 * 10^18 < 2^128.
    pub const fn from_int(units: u64) -> Self {
        Dec(units as u128 * PRECISION_MULTIPLIER)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Dec) -> Result<Dec, AmmError> {
        self.0.checked_add(rhs.0).map(Dec).ok_or(AmmError::Overflow)
    }

    pub fn checked_sub(self, rhs: Dec) -> Result<Dec, AmmError> {
        self.0.checked_sub(rhs.0).map(Dec).ok_or(AmmError::Underflow)
    }

    /// Integer part, truncated
    pub const fn trunc_units(self) -> u128 {
        self.0 / PRECISION_MULTIPLIER
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.0 / PRECISION_MULTIPLIER;
        let frac = self.0 % PRECISION_MULTIPLIER;
        write!(f, "{}.{:0width$}", int, frac, width = PRECISION as usize)
    }
}

impl fmt::Debug for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Dec {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() || frac_part.len() > PRECISION as usize {
            return Err(AmmError::InvalidDecimal);
        }
        if s.contains('.') && frac_part.is_empty() {
            return Err(AmmError::InvalidDecimal);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(AmmError::InvalidDecimal);
        }

        let int: u128 = int_part.parse().map_err(|_| AmmError::InvalidDecimal)?;
        let mut frac: u128 = 0;
        if !frac_part.is_empty() {
            frac = frac_part.parse().map_err(|_| AmmError::InvalidDecimal)?;
            frac *= 10u128.pow(PRECISION - frac_part.len() as u32);
        }

        int.checked_mul(PRECISION_MULTIPLIER)
            .and_then(|raw| raw.checked_add(frac))
            .map(Dec)
            .ok_or(AmmError::Overflow)
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_u128(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(DecStrVisitor)
        } else {
            u128::deserialize(deserializer).map(Dec)
        }
    }
}

struct DecStrVisitor;

impl<'de> Visitor<'de> for DecStrVisitor {
    type Value = Dec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal string with at most 18 fractional digits")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Dec, E> {
        v.parse().map_err(|e: AmmError| E::custom(format!("{e}: {v:?}")))
    }
}
