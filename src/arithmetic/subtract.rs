use core::cmp::Ordering;
use core::ops::{Neg, Sub};

use alloc::vec::Vec;

use super::add::sum;
use crate::digit::{DecimalAdjust, Native, Pair};
use crate::numbers::{compare::cmp_pairs, copied, trim};
use crate::{Bcd, ErrorKind, Pairs};

/// a -= b, returns the borrow.
///
/// A borrow out of the top means b > a, and a is left as the
/// hundreds-complement.
pub(crate) fn sub_assign_borrow(a: &mut [Pair], b: &[Pair]) -> bool {
    debug_assert!(a.len() >= b.len());
    let mut borrow = false;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        let (difference, c) = Native::sub(*a, *b, borrow);
        *a = difference;
        borrow = c;
    }

    if borrow {
        for a in a_hi {
            let (difference, c) = Native::sub(*a, 0, borrow);
            *a = difference;
            borrow = c;
            if !borrow {
                break;
            }
        }
    }

    borrow
}

/// |x| - |y|, where the caller ensures |x| >= |y|.
pub(crate) fn sub_magnitudes(larger: &Pairs, smaller: &Pairs) -> Result<Vec<Pair>, ErrorKind> {
    let mut difference = copied(larger)?;
    let borrow = sub_assign_borrow(&mut difference, smaller);
    debug_assert!(!borrow);
    trim(&mut difference);
    Ok(difference)
}

/// x - y on signed magnitudes.
pub(crate) fn difference(x_negative: bool, x: &Pairs, y_negative: bool, y: &Pairs) -> Bcd {
    if x_negative != y_negative {
        // x - y = x + (-y)
        return sum(x_negative, x, !y_negative, y);
    }
    match cmp_pairs(x, y) {
        Ordering::Equal => Bcd::ZERO,
        Ordering::Greater => Bcd::from_engine(x_negative, sub_magnitudes(x, y)),
        Ordering::Less => Bcd::from_engine(!x_negative, sub_magnitudes(y, x)),
    }
}

impl Sub for &Bcd {
    type Output = Bcd;

    fn sub(self, subtrahend: Self) -> Self::Output {
        match (self.parts(), subtrahend.parts()) {
            (Some((x_negative, x)), Some((y_negative, y))) => difference(x_negative, x, y_negative, y),
            _ => Bcd::propagate(ErrorKind::SubNan, self, subtrahend),
        }
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

impl Neg for &Bcd {
    type Output = Bcd;

    fn neg(self) -> Self::Output {
        let mut negation = self.copy();
        negation.neg_assign();
        negation
    }
}

impl Neg for Bcd {
    type Output = Bcd;

    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}
