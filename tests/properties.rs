use core::cmp::Ordering;
use core::convert::TryFrom;

use packed_bcd::{Bcd, ErrorKind};
use proptest::prelude::*;

#[cfg(not(feature = "extended-testing"))]
const SMALL: i64 = 10_000;
#[cfg(feature = "extended-testing")]
const SMALL: i64 = 1_000_000;

/// Arbitrary values with up to 40 digits.
fn bcd() -> impl Strategy<Value = Bcd> {
    "[+-]?[0-9]{1,40}".prop_map(|s| s.parse::<Bcd>().unwrap())
}

fn small() -> impl Strategy<Value = i64> {
    -SMALL..=SMALL
}

fn divisor() -> impl Strategy<Value = i64> {
    prop_oneof![-1000i64..=-1, 1i64..=1000]
}

proptest! {
    #[test]
    fn additive_identity_and_inverse(x in bcd()) {
        prop_assert_eq!(&x + &Bcd::ZERO, x.clone());
        let zero = &x + &(-&x);
        prop_assert!(zero.is_zero());
        prop_assert!(!zero.is_negative());
    }

    #[test]
    fn commutative(x in bcd(), y in bcd()) {
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(x.compare(&y).map(Ordering::reverse), y.compare(&x));
    }

    #[test]
    fn associative(x in bcd(), y in bcd(), z in bcd()) {
        prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
    }

    #[test]
    fn matches_native(x in any::<i32>(), y in any::<i32>()) {
        let (a, b) = (Bcd::from(x), Bcd::from(y));
        let (x, y) = (x as i64, y as i64);
        prop_assert_eq!((&a + &b).to_i64(), x + y);
        prop_assert_eq!((&a - &b).to_i64(), x - y);
        prop_assert_eq!((&a * &b).to_i64(), x * y);
        prop_assert_eq!(a.compare(&b), Some(x.cmp(&y)));
        prop_assert_eq!(a.mul_i64(y).to_i64(), x * y);
    }

    #[test]
    fn floor_division(x in small(), y in divisor()) {
        let (a, b) = (Bcd::from(x), Bcd::from(y));
        let (q, r) = a.divmod(&b);
        prop_assert_eq!(&(&q * &b) + &r, a);
        prop_assert_eq!(q.to_i64(), x.div_euclid(y) - (y < 0 && x.rem_euclid(y) != 0) as i64);
        prop_assert!(r.is_zero() || r.is_negative() == (y < 0));
        prop_assert!(r.abs() < b.abs());
    }

    #[test]
    fn sign_of_product(x in bcd(), y in bcd()) {
        let product = &x * &y;
        if x.is_zero() || y.is_zero() {
            prop_assert!(product.is_zero());
            prop_assert!(!product.is_negative());
        } else {
            prop_assert_eq!(product.is_negative(), x.is_negative() != y.is_negative());
        }
        prop_assert!((&x * &Bcd::ZERO).is_zero());
    }

    #[test]
    fn zeroth_power(x in bcd()) {
        prop_assert_eq!(x.pow(&Bcd::ZERO), Bcd::ONE);
        prop_assert_eq!(x.pow(&Bcd::from(-1)).error(), Some(ErrorKind::PowNeg));
    }

    #[test]
    fn factorial_recurrence(n in 1u64..=30) {
        let n = Bcd::from(n);
        prop_assert_eq!(n.factorial(), &n * &n.dec().factorial());
    }

    #[test]
    fn display_then_parse(x in bcd()) {
        prop_assert_eq!(x.to_string().parse::<Bcd>(), Ok(x));
    }

    #[test]
    fn shifts_undo(x in bcd(), k in 0usize..50) {
        let scaled = &x << k;
        prop_assert_eq!(&scaled >> k, x.clone());
        prop_assert_eq!(&(&scaled >> k) << k, scaled.clone());
        prop_assert_eq!(scaled.decimal_digits(), if x.is_zero() { 0 } else { x.decimal_digits() + k });
    }

    #[test]
    fn native_round_trip(x in any::<i64>(), y in any::<u64>()) {
        prop_assert_eq!(Bcd::from(x).to_i64(), x);
        prop_assert_eq!(i64::try_from(&Bcd::from(x)), Ok(x));
        prop_assert_eq!(Bcd::from(y).unsigned_abs(), y);
        prop_assert_eq!(Bcd::from(y).compare_u64(y), Some(Ordering::Equal));
        prop_assert_eq!(Bcd::from(x).compare_i64(x), Some(Ordering::Equal));
    }

    #[test]
    fn nan_keeps_original(x in bcd(), y in bcd()) {
        let nan = Bcd::nan(ErrorKind::DivZero, ErrorKind::DivZero);
        let chained = ((&(&nan + &x) * &y) - &x).shl_digits(1).pow(&Bcd::ONE);
        prop_assert_eq!(chained.error(), Some(ErrorKind::PowNan));
        prop_assert_eq!(chained.original_error(), Some(ErrorKind::DivZero));
    }
}

#[test]
fn scenarios() {
    assert_eq!(Bcd::from(91) * Bcd::from(99), Bcd::from(9009));
    assert_eq!(Bcd::from(28).divmod(&Bcd::from(5)), (Bcd::from(5), Bcd::from(3)));
    assert_eq!(Bcd::from(-7).divmod(&Bcd::from(2)), (Bcd::from(-4), Bcd::from(1)));
    assert_eq!(Bcd::from(10).factorial(), Bcd::from(3628800));
    assert_eq!((Bcd::from(5) / Bcd::ZERO).error(), Some(ErrorKind::DivZero));
    assert_eq!(Bcd::from(2).pow(&Bcd::from(10)), Bcd::from(1024));
}
