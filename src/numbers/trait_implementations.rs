use core::{cmp::Ordering, fmt, ops::Deref, str::FromStr};

use zeroize::Zeroize;

use super::{compare::cmp_pairs, Bcd, Magnitude, Pairs};
use crate::{Error, Result};

impl Deref for Pairs {
    type Target = [crate::digit::Pair];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Magnitude {
    type Target = Pairs;
    fn deref(&self) -> &Self::Target {
        self.pairs()
    }
}

// Since we store little-endian, comparison needs to start at the last
// pair, instead of at the first as the slice implementation would.
impl Ord for Pairs {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_pairs(self, other)
    }
}

impl PartialOrd for Pairs {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pairs {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Pairs {}

/// NaN is unequal to everything, itself included.
impl PartialEq for Bcd {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Bcd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

/// Deep copy, see [`Bcd::copy`].
impl Clone for Bcd {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl Default for Bcd {
    fn default() -> Self {
        Bcd::ZERO
    }
}

impl Zeroize for Magnitude {
    fn zeroize(&mut self) {
        if let alloc::borrow::Cow::Owned(pairs) = &mut self.0 {
            pairs.zeroize();
        }
        self.0 = alloc::borrow::Cow::Borrowed(&[]);
    }
}

/// Wipes the digits, leaving zero (or NaN as it was).
impl Zeroize for Bcd {
    fn zeroize(&mut self) {
        if let Bcd::Finite { negative, magnitude } = self {
            magnitude.zeroize();
            *negative = false;
        }
    }
}

/// Ordinary positional notation: `-` if negative, the top pair unpadded,
/// then two digits per pair. NaN is `NaN`.
impl fmt::Display for Bcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, pairs) = match self.parts() {
            None => return f.write_str("NaN"),
            Some(parts) => parts,
        };
        let (top, rest) = match pairs.split_last() {
            None => return f.write_str("0"),
            Some(split) => split,
        };
        if negative {
            f.write_str("-")?;
        }
        // a valid pair in hex reads as its two decimal digits
        write!(f, "{:x}", top)?;
        for pair in rest.iter().rev() {
            write!(f, "{:02x}", pair)?;
        }
        Ok(())
    }
}

struct HexPair(u8);

impl fmt::Debug for HexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl fmt::Debug for Magnitude {
    /// Big-endian pairs, so it reads like the number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().rev().map(|&pair| HexPair(pair))).finish()
    }
}

impl fmt::Debug for Bcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bcd::Finite { negative, magnitude } => f
                .debug_struct("Finite")
                .field("negative", negative)
                .field("magnitude", magnitude)
                .finish(),
            Bcd::NaN { error, original } => f
                .debug_struct("NaN")
                .field("error", error)
                .field("original", original)
                .finish(),
        }
    }
}

/// Optional `+` or `-`, then one or more ASCII digits.
impl FromStr for Bcd {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let (negative, digits) = match s.as_bytes().split_first() {
            Some((b'-', digits)) => (true, digits),
            Some((b'+', digits)) => (false, digits),
            _ => (false, s.as_bytes()),
        };
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(Error);
        }
        // only allocation failure remains
        Ok(Bcd::from_ascii(digits, negative))
    }
}
