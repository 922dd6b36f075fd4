use core::cmp::Ordering;

use super::{Bcd, Pairs};

/// This is *little endian* ordering, as opposed to the default
/// ordering on slices: more digits wins, then the top pairs decide.
pub(crate) fn cmp_pairs(x: &Pairs, y: &Pairs) -> Ordering {
    match x.decimal_digits().cmp(&y.decimal_digits()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for (a, b) in x.iter().rev().zip(y.iter().rev()) {
        match a.cmp(b) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

impl Bcd {
    /// Total order on finite values, `None` ("no comparison") if either is NaN.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        let (x_negative, x) = self.parts()?;
        let (y_negative, y) = other.parts()?;
        let x_negative = x_negative && !x.is_zero();
        let y_negative = y_negative && !y.is_zero();

        if x_negative != y_negative {
            return Some(if x_negative { Ordering::Less } else { Ordering::Greater });
        }

        let magnitudes = cmp_pairs(x, y);
        Some(if x_negative { magnitudes.reverse() } else { magnitudes })
    }
}
