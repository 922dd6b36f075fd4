use core::ops::Add;

use alloc::vec::Vec;

use super::subtract::difference;
use crate::digit::{DecimalAdjust, Native, Pair};
use crate::numbers::{copied, reserve, trim};
use crate::{Bcd, ErrorKind, Pairs};

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result - typically this means
/// resizing a to max(a.len(), b.len()) + 1, to fit a possible carry.
#[inline]
pub(crate) fn add_assign_carry(a: &mut [Pair], b: &[Pair]) -> bool {
    debug_assert!(a.len() >= b.len());

    let mut carry = false;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        let (sum, c) = Native::add(*a, *b, carry);
        *a = sum;
        carry = c;
    }

    if carry {
        for a in a_hi {
            let (sum, c) = Native::add(*a, 0, carry);
            *a = sum;
            carry = c;
            if !carry {
                break;
            }
        }
    }

    carry
}

/// sum += y, growing `sum` as needed.
pub(crate) fn accumulate(sum: &mut Vec<Pair>, y: &Pairs) -> Result<(), ErrorKind> {
    let len = sum.len().max(y.len()) + 1;
    reserve(sum, len - sum.len())?;
    sum.resize(len, 0);

    let carry = add_assign_carry(sum, y);
    debug_assert!(!carry);
    trim(sum);
    Ok(())
}

/// |x| + |y|
pub(crate) fn add_magnitudes(x: &Pairs, y: &Pairs) -> Result<Vec<Pair>, ErrorKind> {
    let (longer, shorter) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    // the copy has room for the escaping carry
    let mut sum = copied(longer)?;
    if add_assign_carry(&mut sum, shorter) {
        sum.push(0x01);
    }
    Ok(sum)
}

/// x + y on signed magnitudes.
pub(crate) fn sum(x_negative: bool, x: &Pairs, y_negative: bool, y: &Pairs) -> Bcd {
    if x_negative != y_negative {
        // x + y = x - (-y)
        return difference(x_negative, x, !y_negative, y);
    }
    Bcd::from_engine(x_negative, add_magnitudes(x, y))
}

impl Add for &Bcd {
    type Output = Bcd;

    fn add(self, summand: Self) -> Self::Output {
        match (self.parts(), summand.parts()) {
            (Some((x_negative, x)), Some((y_negative, y))) => sum(x_negative, x, y_negative, y),
            _ => Bcd::propagate(ErrorKind::AddNan, self, summand),
        }
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

impl Bcd {
    /// `self + 1`
    pub fn inc(&self) -> Bcd {
        self + &Bcd::ONE
    }

    /// `self - 1`
    pub fn dec(&self) -> Bcd {
        self - &Bcd::ONE
    }

    pub fn inc_assign(&mut self) {
        *self = self.inc();
    }

    pub fn dec_assign(&mut self) {
        *self = self.dec();
    }
}
