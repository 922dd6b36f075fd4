//! Signed arithmetic on [`Bcd`][crate::Bcd].
//!
//! The engines work on canonical little-endian [`Pairs`][crate::Pairs] and
//! return fresh digit buffers, signs are handled one level up.
//!
//! Engine failures (only allocation, really) travel as
//! `Result<_, ErrorKind>` internally and turn into NaN at the boundary.
//! Every operator is implemented on references; owned operands and the
//! assigning forms forward to that.

/// Owned and mixed operands, plus `op=`, for an operator implemented on `&Bcd`.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl core::ops::$Op<crate::Bcd> for crate::Bcd {
            type Output = crate::Bcd;
            fn $op(self, other: crate::Bcd) -> crate::Bcd {
                core::ops::$Op::$op(&self, &other)
            }
        }

        impl core::ops::$Op<&crate::Bcd> for crate::Bcd {
            type Output = crate::Bcd;
            fn $op(self, other: &crate::Bcd) -> crate::Bcd {
                core::ops::$Op::$op(&self, other)
            }
        }

        impl core::ops::$Op<crate::Bcd> for &crate::Bcd {
            type Output = crate::Bcd;
            fn $op(self, other: crate::Bcd) -> crate::Bcd {
                core::ops::$Op::$op(self, &other)
            }
        }

        impl core::ops::$OpAssign<&crate::Bcd> for crate::Bcd {
            fn $op_assign(&mut self, other: &crate::Bcd) {
                *self = core::ops::$Op::$op(&*self, other);
            }
        }

        impl core::ops::$OpAssign<crate::Bcd> for crate::Bcd {
            fn $op_assign(&mut self, other: crate::Bcd) {
                *self = core::ops::$Op::$op(&*self, &other);
            }
        }
    };
}

/// Assert that an op works for all val/ref combinations
#[cfg(test)]
macro_rules! assert_op {
    ($left:ident $op:tt $right:ident == $expected:expr) => {
        assert_eq!((&$left) $op (&$right), $expected);
        assert_eq!((&$left) $op $right.clone(), $expected);
        assert_eq!($left.clone() $op (&$right), $expected);
        assert_eq!($left.clone() $op $right.clone(), $expected);
    };
}

/// Assert that an assign-op works for both val/ref right-hand sides
#[cfg(test)]
macro_rules! assert_assign_op {
    ($left:ident $op:tt $right:ident == $expected:expr) => {{
        let mut left = $left.clone();
        left $op &$right;
        assert_eq!(left, $expected);

        let mut left = $left.clone();
        left $op $right.clone();
        assert_eq!(left, $expected);
    }};
}

mod add;
mod subtract;
mod shift;
mod multiply;
mod divide;
