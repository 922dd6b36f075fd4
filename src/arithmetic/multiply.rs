use core::cmp::Ordering;
use core::ops::Mul;

use alloc::vec::Vec;

use super::add::{accumulate, add_assign_carry};
use super::shift::shl_pairs;
use crate::digit::{self, Pair};
use crate::numbers::{allocate, trim};
use crate::{Bcd, ErrorKind, Pairs};

/// |x| * |y|, operand-scanning
///
/// Each pair of pairs goes through the 2x2 digit kernel, the partial product
/// lands at its power-of-a-hundred offset.
pub(crate) fn mul_magnitudes(x: &Pairs, y: &Pairs) -> Result<Vec<Pair>, ErrorKind> {
    if x.is_zero() || y.is_zero() {
        return Ok(Vec::new());
    }
    let len = x.len().checked_add(y.len()).ok_or(ErrorKind::OutOfMemory)?;
    let mut product = allocate(len)?;
    product.resize(len, 0);

    for (i, &a) in x.iter().enumerate() {
        if a == 0 {
            continue;
        }
        for (j, &b) in y.iter().enumerate() {
            let partial = digit::mul_pairs(a, b);
            if partial == 0 {
                continue;
            }
            let partial = [
                digit::from_value((partial % 100) as u8),
                digit::from_value((partial / 100) as u8),
            ];
            // partial sums never exceed the final product, which fits
            let carry = add_assign_carry(&mut product[i + j..], &partial);
            debug_assert!(!carry);
        }
    }

    trim(&mut product);
    Ok(product)
}

/// |x| * n, by shifted additions
///
/// Trailing decimal zeros of `n` become a shift of `x`, the remaining
/// digits of `n` are consumed from the top, each by repeated addition of
/// the correspondingly shifted base.
pub(crate) fn mul_native(x: &Pairs, mut n: u64) -> Result<Vec<Pair>, ErrorKind> {
    if x.is_zero() || n == 0 {
        return Ok(Vec::new());
    }

    let mut zeros = 0;
    while n % 10 == 0 {
        n /= 10;
        zeros += 1;
    }
    let base = shl_pairs(x, zeros)?;

    let mut power = 1;
    let mut exponent = 0;
    while n / power >= 10 {
        power *= 10;
        exponent += 1;
    }

    let mut product = Vec::new();
    loop {
        let times = (n / power) % 10;
        if times != 0 {
            let shifted = shl_pairs(Pairs::new(&base), exponent)?;
            for _ in 0..times {
                accumulate(&mut product, Pairs::new(&shifted))?;
            }
        }
        if exponent == 0 {
            break;
        }
        power /= 10;
        exponent -= 1;
    }

    Ok(product)
}

impl Mul for &Bcd {
    type Output = Bcd;

    fn mul(self, factor: Self) -> Self::Output {
        match (self.parts(), factor.parts()) {
            (Some((x_negative, x)), Some((y_negative, y))) => {
                Bcd::from_engine(x_negative != y_negative, mul_magnitudes(x, y))
            }
            _ => Bcd::propagate(ErrorKind::MulNan, self, factor),
        }
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

/// ## Multiplicative operations
impl Bcd {
    pub fn mul_u64(&self, n: u64) -> Bcd {
        match self.parts() {
            Some((negative, x)) => Bcd::from_engine(negative, mul_native(x, n)),
            None => Bcd::propagate(ErrorKind::MulNan, self, self),
        }
    }

    pub fn mul_i64(&self, n: i64) -> Bcd {
        match self.parts() {
            Some((negative, x)) => Bcd::from_engine(negative != (n < 0), mul_native(x, n.unsigned_abs())),
            None => Bcd::propagate(ErrorKind::MulNan, self, self),
        }
    }

    pub fn mul_u64_assign(&mut self, n: u64) {
        *self = self.mul_u64(n);
    }

    pub fn mul_i64_assign(&mut self, n: i64) {
        *self = self.mul_i64(n);
    }

    /// `self^exponent`, by repeated multiplication.
    ///
    /// A negative exponent is `NaN(PowNeg)`; anything to the zeroth is one.
    pub fn pow(&self, exponent: &Bcd) -> Bcd {
        if self.is_nan() || exponent.is_nan() {
            return Bcd::propagate(ErrorKind::PowNan, self, exponent);
        }
        if exponent.is_negative() {
            return Bcd::nan(ErrorKind::PowNeg, ErrorKind::PowNeg);
        }

        let mut power = Bcd::ONE;
        let mut countdown = exponent.copy();
        while countdown.is_nonzero() {
            power *= self;
            if power.is_nan() {
                return power;
            }
            countdown = countdown.dec();
        }
        // the countdown itself may have run out of memory
        if countdown.is_nan() {
            return Bcd::propagate(ErrorKind::PowNan, &countdown, &countdown);
        }
        power
    }

    pub fn pow_assign(&mut self, exponent: &Bcd) {
        *self = self.pow(exponent);
    }

    /// `base^exponent` from native integers.
    pub fn pow_u64(base: u64, exponent: u64) -> Bcd {
        let mut power = Bcd::ONE;
        for _ in 0..exponent {
            power = power.mul_u64(base);
            if power.is_nan() || power.is_zero() {
                break;
            }
        }
        power
    }

    /// `base^exponent` from native integers.
    pub fn pow_i64(base: i64, exponent: u64) -> Bcd {
        let mut power = Bcd::ONE;
        for _ in 0..exponent {
            power = power.mul_i64(base);
            if power.is_nan() || power.is_zero() {
                break;
            }
        }
        power
    }

    /// `self!`, or `NaN(FactNeg)` for negative `self`.
    pub fn factorial(&self) -> Bcd {
        if self.is_nan() {
            return Bcd::propagate(ErrorKind::FactNan, self, self);
        }
        if self.is_negative() {
            return Bcd::nan(ErrorKind::FactNeg, ErrorKind::FactNeg);
        }
        if self.compare(&Bcd::ONE) != Some(Ordering::Greater) {
            return Bcd::ONE;
        }

        let mut product = self.copy();
        let mut factor = self.dec();
        while factor.compare(&Bcd::ONE) == Some(Ordering::Greater) {
            product *= &factor;
            if product.is_nan() {
                return product;
            }
            factor = factor.dec();
        }
        if factor.is_nan() {
            return Bcd::propagate(ErrorKind::FactNan, &factor, &factor);
        }
        product
    }

    pub fn factorial_assign(&mut self) {
        *self = self.factorial();
    }
}
