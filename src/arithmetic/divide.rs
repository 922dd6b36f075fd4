use core::cmp::Ordering;
use core::ops::{Div, Rem};

use alloc::vec::Vec;

use super::add::accumulate;
use super::subtract::{sub_assign_borrow, sub_magnitudes};
use crate::digit::Pair;
use crate::numbers::{compare::cmp_pairs, copied, trim};
use crate::{Bcd, ErrorKind, Pairs};

/// (|x| / |y|, |x| % |y|) by repeated subtraction, for nonzero `y`.
///
/// Takes as many steps as the quotient is large.
pub(crate) fn div_rem_magnitudes(x: &Pairs, y: &Pairs) -> Result<(Vec<Pair>, Vec<Pair>), ErrorKind> {
    debug_assert!(!y.is_zero());
    let mut remainder = copied(x)?;
    let mut quotient = Vec::new();
    let mut steps: u64 = 0;

    while cmp_pairs(Pairs::new(&remainder), y) != Ordering::Less {
        let borrow = sub_assign_borrow(&mut remainder, y);
        debug_assert!(!borrow);
        trim(&mut remainder);
        accumulate(&mut quotient, Pairs::new(&[0x01]))?;
        steps += 1;
    }

    tracing::trace!(steps, "division by repeated subtraction");
    Ok((quotient, remainder))
}

/// ## Division
impl Bcd {
    /// Quotient and remainder, rounding the quotient towards negative infinity.
    ///
    /// The remainder takes the sign of the divisor, so that
    /// `q * divisor + r == self` and `|r| < |divisor|`. Dividing by zero
    /// gives `NaN(DivZero)` twice.
    pub fn divmod(&self, divisor: &Bcd) -> (Bcd, Bcd) {
        let ((x_negative, x), (y_negative, y)) = match (self.parts(), divisor.parts()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                let nan = Bcd::propagate(ErrorKind::DivNan, self, divisor);
                return (nan.copy(), nan);
            }
        };
        if y.is_zero() {
            return (
                Bcd::nan(ErrorKind::DivZero, ErrorKind::DivZero),
                Bcd::nan(ErrorKind::DivZero, ErrorKind::DivZero),
            );
        }
        let negative = x_negative != y_negative;
        if y.is_one() {
            return (self.with_sign(negative), Bcd::ZERO);
        }
        if x.is_zero() {
            return (Bcd::ZERO, Bcd::ZERO);
        }

        let (mut quotient, mut remainder) = match div_rem_magnitudes(x, y) {
            Ok(parts) => parts,
            Err(kind) => return (Bcd::nan(kind, kind), Bcd::nan(kind, kind)),
        };

        // floor: a nonzero remainder pulls a negative quotient one further down
        if negative && !remainder.is_empty() {
            remainder = match sub_magnitudes(y, Pairs::new(&remainder)) {
                Ok(complement) => complement,
                Err(kind) => return (Bcd::nan(kind, kind), Bcd::nan(kind, kind)),
            };
            if let Err(kind) = accumulate(&mut quotient, Pairs::new(&[0x01])) {
                return (Bcd::nan(kind, kind), Bcd::nan(kind, kind));
            }
        }

        (Bcd::finite(negative, quotient), Bcd::finite(y_negative, remainder))
    }

    pub fn divmod_assign(&mut self, divisor: &Bcd) -> Bcd {
        let (quotient, remainder) = self.divmod(divisor);
        *self = quotient;
        remainder
    }
}

impl Div for &Bcd {
    type Output = Bcd;

    fn div(self, divisor: Self) -> Self::Output {
        self.divmod(divisor).0
    }
}

forward_binop!(Div, div, DivAssign, div_assign);

impl Rem for &Bcd {
    type Output = Bcd;

    fn rem(self, divisor: Self) -> Self::Output {
        self.divmod(divisor).1
    }
}

forward_binop!(Rem, rem, RemAssign, rem_assign);
