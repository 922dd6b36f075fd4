//! Interop with machine integers.
//!
//! Nothing in here allocates, except the `From` constructors.

use core::{cmp::Ordering, convert::TryFrom};

use super::{Bcd, Pairs};
use crate::digit;
use crate::{Error, Result};

/// Returned by [`Bcd::unsigned_abs`] for NaN and overflow.
pub const U64_SENTINEL: u64 = u64::MAX;
/// Returned by [`Bcd::to_i64`] for NaN and overflow.
pub const I64_SENTINEL: i64 = i64::MIN;

/// `u64::MAX` has 20 decimal digits.
const U64_DIGITS: usize = 20;

/// The magnitude, if it fits.
///
/// Pairs are weighted by ascending powers of a hundred. The digit bound
/// keeps the weights in range, checked arithmetic catches the rest.
fn pairs_to_u64(pairs: &Pairs) -> Option<u64> {
    if pairs.decimal_digits() > U64_DIGITS {
        return None;
    }
    let mut value: u64 = 0;
    let mut weight: u64 = 1;
    for (i, &pair) in pairs.iter().enumerate() {
        if i > 0 {
            weight = weight.checked_mul(100)?;
        }
        value = value.checked_add(weight.checked_mul(digit::value(pair) as u64)?)?;
    }
    Some(value)
}

fn cmp_pairs_u64(pairs: &Pairs, y: u64) -> Ordering {
    match pairs_to_u64(pairs) {
        Some(x) => x.cmp(&y),
        None => Ordering::Greater,
    }
}

impl Bcd {
    /// `|self|`, or [`U64_SENTINEL`] if NaN or too large.
    pub fn unsigned_abs(&self) -> u64 {
        self.pairs().and_then(pairs_to_u64).unwrap_or(U64_SENTINEL)
    }

    /// The value, or [`I64_SENTINEL`] if NaN or `|self| > i64::MAX`.
    pub fn to_i64(&self) -> i64 {
        match self.parts().and_then(|(negative, pairs)| Some((negative, pairs_to_u64(pairs)?))) {
            Some((negative, magnitude)) if magnitude <= i64::MAX as u64 => {
                let magnitude = magnitude as i64;
                if negative { -magnitude } else { magnitude }
            }
            _ => I64_SENTINEL,
        }
    }

    /// Compares with a machine integer, `None` if NaN.
    pub fn compare_u64(&self, y: u64) -> Option<Ordering> {
        let (_, x) = self.parts()?;
        if x.is_zero() {
            return Some(0.cmp(&y));
        }
        if self.is_negative() {
            return Some(Ordering::Less);
        }
        Some(cmp_pairs_u64(x, y))
    }

    /// Compares with a machine integer, `None` if NaN.
    pub fn compare_i64(&self, y: i64) -> Option<Ordering> {
        let (_, x) = self.parts()?;
        if y >= 0 {
            return self.compare_u64(y as u64);
        }
        if !self.is_negative() {
            return Some(Ordering::Greater);
        }
        // both negative, larger magnitude is smaller
        Some(cmp_pairs_u64(x, y.unsigned_abs()).reverse())
    }
}

impl TryFrom<&Bcd> for u64 {
    type Error = Error;
    /// Fails for NaN, negative values and overflow.
    fn try_from(x: &Bcd) -> Result<Self> {
        let (_, pairs) = x.parts().ok_or(Error)?;
        if x.is_negative() {
            return Err(Error);
        }
        pairs_to_u64(pairs).ok_or(Error)
    }
}

impl TryFrom<&Bcd> for i64 {
    type Error = Error;
    /// Fails for NaN and overflow; unlike [`Bcd::to_i64`], `i64::MIN` is fine.
    fn try_from(x: &Bcd) -> Result<Self> {
        let (_, pairs) = x.parts().ok_or(Error)?;
        let magnitude = pairs_to_u64(pairs).ok_or(Error)?;
        if x.is_negative() {
            if magnitude == i64::MIN.unsigned_abs() {
                return Ok(i64::MIN);
            }
            i64::try_from(magnitude).map(|m| -m).map_err(|_| Error)
        } else {
            i64::try_from(magnitude).map_err(|_| Error)
        }
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Bcd {
            fn from(n: $t) -> Self {
                Bcd::from_u64_with_sign(n as u64, false)
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Bcd {
            fn from(n: $t) -> Self {
                Bcd::from_u64_with_sign((n as i64).unsigned_abs(), n < 0)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl PartialEq<u64> for Bcd {
    fn eq(&self, other: &u64) -> bool {
        self.compare_u64(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<u64> for Bcd {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.compare_u64(*other)
    }
}

impl PartialEq<i64> for Bcd {
    fn eq(&self, other: &i64) -> bool {
        self.compare_i64(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<i64> for Bcd {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.compare_i64(*other)
    }
}
