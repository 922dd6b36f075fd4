use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use alloc::vec::Vec;

use crate::digit::{self, Pair};
use crate::numbers::{allocate, trim};
use crate::{Bcd, ErrorKind, Pairs};

/// x * 10^digits
///
/// Note that "left" means "higher number".
pub(crate) fn shl_pairs(x: &Pairs, digits: usize) -> Result<Vec<Pair>, ErrorKind> {
    if x.is_zero() {
        return Ok(Vec::new());
    }
    let n_pairs = digits / 2;
    let capacity = n_pairs
        .checked_add(x.len() + 1)
        .ok_or(ErrorKind::OutOfMemory)?;
    let mut shifted = allocate(capacity)?;
    shifted.resize(n_pairs, 0);

    if digits % 2 == 0 {
        shifted.extend_from_slice(x);
    } else {
        // every pair moves up a nibble
        let mut carry = 0;
        for &pair in x.iter() {
            shifted.push((digit::units(pair) << 4) | carry);
            carry = digit::tens(pair);
        }
        shifted.push(carry);
    }

    trim(&mut shifted);
    Ok(shifted)
}

/// x / 10^digits, truncated
///
/// Note that "right" means "lower number".
pub(crate) fn shr_pairs(x: &Pairs, digits: usize) -> Result<Vec<Pair>, ErrorKind> {
    if digits >= x.decimal_digits() {
        return Ok(Vec::new());
    }
    let rest = &x[digits / 2..];
    let mut shifted = allocate(rest.len())?;

    if digits % 2 == 0 {
        shifted.extend_from_slice(rest);
    } else {
        for (i, &pair) in rest.iter().enumerate() {
            let above = rest.get(i + 1).map_or(0, |&pair| digit::units(pair));
            shifted.push((above << 4) | digit::tens(pair));
        }
    }

    trim(&mut shifted);
    Ok(shifted)
}

/// ## Decimal shifts
///
/// Shifts count decimal digits, not pairs. The sign is kept.
impl Bcd {
    /// `self * 10^digits`
    pub fn shl_digits(&self, digits: usize) -> Bcd {
        match self.parts() {
            Some((negative, x)) => Bcd::from_engine(negative, shl_pairs(x, digits)),
            None => Bcd::propagate(ErrorKind::ShiftNan, self, self),
        }
    }

    /// `self / 10^digits`, rounded towards zero
    pub fn shr_digits(&self, digits: usize) -> Bcd {
        match self.parts() {
            Some((negative, x)) => Bcd::from_engine(negative, shr_pairs(x, digits)),
            None => Bcd::propagate(ErrorKind::ShiftNan, self, self),
        }
    }
}

impl Shl<usize> for &Bcd {
    type Output = Bcd;

    #[inline]
    fn shl(self, digits: usize) -> Self::Output {
        self.shl_digits(digits)
    }
}

impl Shl<usize> for Bcd {
    type Output = Bcd;

    #[inline]
    fn shl(self, digits: usize) -> Self::Output {
        self.shl_digits(digits)
    }
}

impl ShlAssign<usize> for Bcd {
    fn shl_assign(&mut self, digits: usize) {
        *self = self.shl_digits(digits);
    }
}

impl Shr<usize> for &Bcd {
    type Output = Bcd;

    #[inline]
    fn shr(self, digits: usize) -> Self::Output {
        self.shr_digits(digits)
    }
}

impl Shr<usize> for Bcd {
    type Output = Bcd;

    #[inline]
    fn shr(self, digits: usize) -> Self::Output {
        self.shr_digits(digits)
    }
}

impl ShrAssign<usize> for Bcd {
    fn shr_assign(&mut self, digits: usize) {
        *self = self.shr_digits(digits);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn pairs() {
        let x = Pairs::new(&hex!("45 23 01"));
        assert_eq!(shl_pairs(x, 0).unwrap(), hex!("45 23 01"));
        assert_eq!(shl_pairs(x, 1).unwrap(), hex!("50 34 12"));
        assert_eq!(shl_pairs(x, 2).unwrap(), hex!("00 45 23 01"));
        assert_eq!(shl_pairs(x, 3).unwrap(), hex!("00 50 34 12"));
        assert_eq!(shl_pairs(Pairs::new(&hex!("99")), 1).unwrap(), hex!("90 09"));

        assert_eq!(shr_pairs(x, 0).unwrap(), hex!("45 23 01"));
        assert_eq!(shr_pairs(x, 1).unwrap(), hex!("34 12"));
        assert_eq!(shr_pairs(x, 2).unwrap(), hex!("23 01"));
        assert_eq!(shr_pairs(x, 3).unwrap(), hex!("12"));
        assert_eq!(shr_pairs(x, 4).unwrap(), hex!("01"));
        assert!(shr_pairs(x, 5).unwrap().is_empty());
        assert!(shr_pairs(x, usize::MAX).unwrap().is_empty());
    }

    #[test]
    fn shifts() {
        let x = Bcd::from(-12345);
        assert_eq!(&x << 3, Bcd::from(-12345000));
        assert_eq!(&x >> 2, Bcd::from(-123));
        assert_eq!(x.clone() >> 5, Bcd::ZERO);
        assert!(!(x.clone() >> 5).is_negative());
        assert_eq!(Bcd::ZERO << 7, Bcd::ZERO);

        let mut y = Bcd::from(7);
        y <<= 11;
        assert_eq!(y.to_string(), "700000000000");
        y >>= 10;
        assert_eq!(y, Bcd::from(70));
    }

    #[test]
    fn nan() {
        let x = Bcd::nan(ErrorKind::MulNan, ErrorKind::OutOfMemory) << 1;
        assert_eq!(x.error(), Some(ErrorKind::ShiftNan));
        assert_eq!(x.original_error(), Some(ErrorKind::OutOfMemory));
        assert_eq!((Bcd::NAN >> 1).error(), Some(ErrorKind::ShiftNan));
    }

    #[test]
    fn out_of_memory() {
        for &digits in &[usize::MAX, usize::MAX - 1] {
            let x = Bcd::from(5).shl_digits(digits);
            assert_eq!(x.error(), Some(ErrorKind::OutOfMemory));
            assert_eq!(x.original_error(), Some(ErrorKind::OutOfMemory));

            let y = x + Bcd::ONE;
            assert_eq!(y.error(), Some(ErrorKind::AddNan));
            assert_eq!(y.original_error(), Some(ErrorKind::OutOfMemory));
        }
        // nothing to allocate for zero
        assert_eq!(Bcd::ZERO.shl_digits(usize::MAX), Bcd::ZERO);
    }
}
