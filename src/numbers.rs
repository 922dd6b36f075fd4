use alloc::{borrow::Cow, vec::Vec};

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::digit::{self, Pair};
use crate::ErrorKind;

pub(crate) mod compare;
mod native;
mod trait_implementations;

pub use native::{I64_SENTINEL, U64_SENTINEL};

/// Packed decimal digits, little-endian, as a borrowed slice.
///
/// Implementation ***must ensure*** the slice is canonical wherever a `Pairs`
/// is handed out: every pair valid, and the last (most significant) pair non-zero.
/// The empty slice is zero.
///
/// This is what the engines operate on, the sign lives one level up in [`Bcd`].
#[derive(RefCast)]
#[repr(transparent)]
pub struct Pairs([Pair]);

impl Pairs {
    pub(crate) fn new(pairs: &[Pair]) -> &Self {
        Self::ref_cast(pairs)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Twice the pair count, less one if the top nibble is unused.
    pub fn decimal_digits(&self) -> usize {
        match self.0.last() {
            None => 0,
            Some(&top) => 2 * self.0.len() - (digit::tens(top) == 0) as usize,
        }
    }

    pub fn is_even(&self) -> bool {
        self.0.first().map_or(true, |&pair| digit::units(pair) % 2 == 0)
    }

    pub fn is_one(&self) -> bool {
        self.0 == [0x01]
    }
}

/// Drops most significant zero pairs.
pub(crate) fn trim(pairs: &mut Vec<Pair>) {
    while pairs.last() == Some(&0) {
        pairs.pop();
    }
}

/// Room for `additional` more pairs, or [`ErrorKind::OutOfMemory`].
pub(crate) fn reserve(pairs: &mut Vec<Pair>, additional: usize) -> core::result::Result<(), ErrorKind> {
    pairs.try_reserve_exact(additional).map_err(|_| {
        tracing::warn!(len = pairs.len(), additional, "digit buffer allocation failed");
        ErrorKind::OutOfMemory
    })
}

/// A digit buffer with room for `capacity` pairs.
pub(crate) fn allocate(capacity: usize) -> core::result::Result<Vec<Pair>, ErrorKind> {
    let mut pairs = Vec::new();
    reserve(&mut pairs, capacity)?;
    Ok(pairs)
}

/// An owned copy, with one spare pair for a carry.
pub(crate) fn copied(pairs: &Pairs) -> core::result::Result<Vec<Pair>, ErrorKind> {
    let mut copy = allocate(pairs.0.len() + 1)?;
    copy.extend_from_slice(&pairs.0);
    Ok(copy)
}

/// The digits of a finite [`Bcd`].
///
/// Either borrowed from static storage (the constants), or exclusively owned.
pub struct Magnitude(Cow<'static, [Pair]>);

impl Magnitude {
    pub(crate) fn from_canonical(pairs: Vec<Pair>) -> Self {
        debug_assert!(pairs.last() != Some(&0));
        debug_assert!(pairs.iter().all(|&pair| digit::is_valid(pair)));
        Magnitude(Cow::Owned(pairs))
    }

    pub fn pairs(&self) -> &Pairs {
        Pairs::new(&self.0)
    }

    /// Borrows static storage, i.e., is one of the constants.
    pub fn is_constant(&self) -> bool {
        matches!(self.0, Cow::Borrowed(_))
    }
}

/// Byte order of packed input to [`Bcd::from_bytes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    /// least significant pair first (the internal order)
    Little,
    /// most significant pair first
    Big,
}

/// Signed integer of unbounded size, in packed binary-coded decimal.
///
/// Errors are part of the value: anything that goes wrong produces [`Bcd::NaN`],
/// and every operation fed a NaN produces a NaN again. The `original` tag
/// survives such chains unchanged, `error` names the latest operation.
///
/// Zero is the empty magnitude and never negative.
pub enum Bcd {
    Finite { negative: bool, magnitude: Magnitude },
    NaN { error: ErrorKind, original: ErrorKind },
}

/// ## Constants and constructors
impl Bcd {
    pub const ZERO: Bcd = Bcd::Finite { negative: false, magnitude: Magnitude(Cow::Borrowed(&[])) };
    pub const ONE: Bcd = Bcd::Finite { negative: false, magnitude: Magnitude(Cow::Borrowed(&[0x01])) };
    pub const NAN: Bcd = Bcd::NaN { error: ErrorKind::Nan, original: ErrorKind::Nan };

    /// A fresh NaN.
    pub fn nan(error: ErrorKind, original: ErrorKind) -> Self {
        tracing::debug!(%error, %original, "NaN");
        Bcd::NaN { error, original }
    }

    /// The NaN an operation tagged `error` produces from the first NaN among its operands.
    pub(crate) fn propagate(error: ErrorKind, x: &Bcd, y: &Bcd) -> Self {
        let original = x.original_error().or_else(|| y.original_error()).unwrap_or(error);
        tracing::trace!(%error, %original, "propagating NaN");
        Bcd::NaN { error, original }
    }

    /// Takes canonical pairs.
    pub(crate) fn finite(negative: bool, pairs: Vec<Pair>) -> Self {
        if pairs.is_empty() {
            return Bcd::ZERO;
        }
        Bcd::Finite { negative, magnitude: Magnitude::from_canonical(pairs) }
    }

    /// An engine result, with failures turned into NaN.
    pub(crate) fn from_engine(negative: bool, pairs: core::result::Result<Vec<Pair>, ErrorKind>) -> Self {
        match pairs {
            Ok(pairs) => Self::finite(negative, pairs),
            Err(kind) => Self::nan(kind, kind),
        }
    }

    /// Packs the decimal digits of `n`, two per byte.
    pub fn from_u64_with_sign(mut n: u64, negative: bool) -> Self {
        if n == 0 {
            return Bcd::ZERO;
        }
        let mut digits = 0;
        let mut rest = n;
        while rest != 0 {
            rest /= 10;
            digits += 1;
        }

        let mut pairs = match allocate((digits + 1) / 2) {
            Ok(pairs) => pairs,
            Err(kind) => return Self::nan(kind, kind),
        };
        while n != 0 {
            pairs.push(digit::from_value((n % 100) as u8));
            n /= 100;
        }
        Self::finite(negative, pairs)
    }

    /// Takes packed pairs in either byte order.
    ///
    /// Leading zero pairs are trimmed, so empty or all-zero input is [`Bcd::ZERO`]
    /// (no allocation). A nibble above 9 gives `NaN(InvalidDigit)`.
    pub fn from_bytes(bytes: &[u8], negative: bool, endian: Endian) -> Self {
        if bytes.iter().all(|&byte| byte == 0) {
            return Bcd::ZERO;
        }
        if !bytes.iter().all(|&byte| digit::is_valid(byte)) {
            return Self::nan(ErrorKind::InvalidDigit, ErrorKind::InvalidDigit);
        }

        let mut pairs = match allocate(bytes.len()) {
            Ok(pairs) => pairs,
            Err(kind) => return Self::nan(kind, kind),
        };
        match endian {
            Endian::Little => pairs.extend_from_slice(bytes),
            Endian::Big => pairs.extend(bytes.iter().rev()),
        }
        trim(&mut pairs);
        Self::finite(negative, pairs)
    }

    /// Takes ASCII decimal digits, most significant first, no sign.
    ///
    /// Anything outside `'0'..='9'` gives `NaN(InvalidDigit)`.
    pub fn from_ascii(digits: impl AsRef<[u8]>, negative: bool) -> Self {
        let digits = digits.as_ref();
        if !digits.iter().all(u8::is_ascii_digit) {
            return Self::nan(ErrorKind::InvalidDigit, ErrorKind::InvalidDigit);
        }

        let mut packed = match allocate((digits.len() + 1) / 2) {
            Ok(packed) => packed,
            Err(kind) => return Self::nan(kind, kind),
        };
        // an odd count leaves the top nibble of the leading pair empty
        let (lone, rest) = digits.split_at(digits.len() % 2);
        if let Some(&d) = lone.first() {
            packed.push(d - b'0');
        }
        for chunk in rest.chunks_exact(2) {
            packed.push(((chunk[0] - b'0') << 4) | (chunk[1] - b'0'));
        }
        Self::from_bytes(&packed, negative, Endian::Big)
    }

    /// Deep copy. Never constant, even if `self` is.
    pub fn copy(&self) -> Self {
        match self {
            Bcd::NaN { error, original } => Bcd::NaN { error: *error, original: *original },
            Bcd::Finite { negative, magnitude } => {
                let mut pairs = match allocate(magnitude.0.len()) {
                    Ok(pairs) => pairs,
                    Err(kind) => return Self::nan(kind, kind),
                };
                pairs.extend_from_slice(&magnitude.0);
                Bcd::Finite { negative: *negative, magnitude: Magnitude(Cow::Owned(pairs)) }
            }
        }
    }

    /// Wipes and frees the digit buffer; constants are left alone.
    ///
    /// Dropping also frees, but does not wipe.
    pub fn release(mut self) {
        self.zeroize();
    }
}

/// ## Inspection
impl Bcd {
    pub fn is_nan(&self) -> bool {
        matches!(self, Bcd::NaN { .. })
    }

    pub fn is_finite(&self) -> bool {
        !self.is_nan()
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Bcd::Finite { magnitude, .. } if magnitude.pairs().is_zero())
    }

    /// Truth value: finite and different from zero.
    pub fn is_nonzero(&self) -> bool {
        matches!(self.compare(&Bcd::ZERO), Some(ordering) if ordering.is_ne())
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Bcd::Finite { negative: true, magnitude } if !magnitude.pairs().is_zero())
    }

    pub fn is_even(&self) -> bool {
        matches!(self, Bcd::Finite { magnitude, .. } if magnitude.pairs().is_even())
    }

    pub fn is_odd(&self) -> bool {
        matches!(self, Bcd::Finite { magnitude, .. } if !magnitude.pairs().is_even())
    }

    /// One of [`Bcd::ZERO`], [`Bcd::ONE`] (or a sign change thereof), i.e., owns no buffer.
    pub fn is_constant(&self) -> bool {
        matches!(self, Bcd::Finite { magnitude, .. } if magnitude.is_constant())
    }

    /// Sign and digits, unless NaN.
    pub fn parts(&self) -> Option<(bool, &Pairs)> {
        match self {
            Bcd::Finite { negative, magnitude } => Some((*negative, magnitude.pairs())),
            Bcd::NaN { .. } => None,
        }
    }

    /// The little-endian packed digits, unless NaN.
    pub fn pairs(&self) -> Option<&Pairs> {
        self.parts().map(|(_, pairs)| pairs)
    }

    /// Zero for NaN.
    pub fn decimal_digits(&self) -> usize {
        self.pairs().map_or(0, Pairs::decimal_digits)
    }

    /// Zero for NaN.
    pub fn pair_count(&self) -> usize {
        self.pairs().map_or(0, |pairs| pairs.len())
    }

    /// The latest error, if NaN.
    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            Bcd::NaN { error, .. } => Some(*error),
            Bcd::Finite { .. } => None,
        }
    }

    /// The error that started it all, if NaN.
    pub fn original_error(&self) -> Option<ErrorKind> {
        match self {
            Bcd::NaN { original, .. } => Some(*original),
            Bcd::Finite { .. } => None,
        }
    }
}

/// ## Sign manipulation
///
/// NaN passes through all of these untouched.
impl Bcd {
    /// Sets the sign in place; zero stays non-negative.
    pub fn set_sign(&mut self, negative: bool) {
        if let Bcd::Finite { negative: sign, magnitude } = self {
            *sign = negative && !magnitude.pairs().is_zero();
        }
    }

    pub fn with_sign(&self, negative: bool) -> Self {
        let mut x = self.copy();
        x.set_sign(negative);
        x
    }

    pub fn abs(&self) -> Self {
        self.with_sign(false)
    }

    pub fn abs_assign(&mut self) {
        self.set_sign(false);
    }

    /// `-|self|`
    pub fn negative_abs(&self) -> Self {
        self.with_sign(true)
    }

    pub fn neg_assign(&mut self) {
        let negative = !self.is_negative();
        self.set_sign(negative);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn from_native() {
        let x = Bcd::from_u64_with_sign(1234567, false);
        assert_eq!(&**x.pairs().unwrap(), &[0x67, 0x45, 0x23, 0x01]);
        assert_eq!(x.decimal_digits(), 7);
        assert_eq!(x.pair_count(), 4);
        assert!(x.is_odd());

        let x = Bcd::from_u64_with_sign(100, true);
        assert_eq!(&**x.pairs().unwrap(), &[0x00, 0x01]);
        assert_eq!(x.decimal_digits(), 3);
        assert!(x.is_negative());
        assert!(x.is_even());

        let x = Bcd::from_u64_with_sign(u64::MAX, false);
        assert_eq!(x.decimal_digits(), 20);

        assert!(Bcd::from_u64_with_sign(0, true).is_zero());
        assert!(!Bcd::from_u64_with_sign(0, true).is_negative());
    }

    #[test]
    fn from_bytes() {
        let little = Bcd::from_bytes(&hex!("34 12 00 00"), false, Endian::Little);
        let big = Bcd::from_bytes(&hex!("00 12 34"), false, Endian::Big);
        assert_eq!(&**little.pairs().unwrap(), &[0x34, 0x12]);
        assert_eq!(little, big);
        assert_eq!(little.decimal_digits(), 4);

        let odd = Bcd::from_bytes(&hex!("01 23"), true, Endian::Big);
        assert_eq!(odd.decimal_digits(), 3);
        assert!(odd.is_negative());

        assert!(Bcd::from_bytes(&[], false, Endian::Little).is_constant());
        assert!(Bcd::from_bytes(&hex!("00 00"), true, Endian::Big).is_zero());
        assert!(!Bcd::from_bytes(&hex!("00 00"), true, Endian::Big).is_negative());

        let invalid = Bcd::from_bytes(&hex!("1a"), false, Endian::Little);
        assert_eq!(invalid.error(), Some(ErrorKind::InvalidDigit));
    }

    #[test]
    fn from_ascii() {
        let x = Bcd::from_ascii("12345", false);
        assert_eq!(&**x.pairs().unwrap(), &hex!("45 23 01"));
        assert_eq!(x.decimal_digits(), 5);

        let x = Bcd::from_ascii(b"0009009", true);
        assert_eq!(&**x.pairs().unwrap(), &hex!("09 90"));
        assert!(x.is_negative());

        assert!(Bcd::from_ascii("", false).is_zero());
        assert!(Bcd::from_ascii("000", false).is_zero());
        assert_eq!(Bcd::from_ascii("12a4", false).error(), Some(ErrorKind::InvalidDigit));
        assert_eq!(Bcd::from_ascii("-12", false).original_error(), Some(ErrorKind::InvalidDigit));
    }

    #[test]
    fn constants() {
        assert!(Bcd::ZERO.is_zero());
        assert!(Bcd::ZERO.is_constant());
        assert!(Bcd::ONE.is_constant());
        assert_eq!(Bcd::ONE.decimal_digits(), 1);
        assert_eq!(Bcd::NAN.error(), Some(ErrorKind::Nan));
        assert_eq!(Bcd::NAN.original_error(), Some(ErrorKind::Nan));
        assert!(!Bcd::NAN.is_zero());
        assert!(!Bcd::NAN.is_nonzero());
    }

    #[test]
    fn copy_is_owned() {
        let one = Bcd::ONE.copy();
        assert!(!one.is_constant());
        assert_eq!(one, Bcd::ONE);

        let zero = Bcd::ZERO.copy();
        assert!(!zero.is_constant());
        assert!(zero.is_zero());

        let x = Bcd::from(-9009);
        let mut y = x.clone();
        y.neg_assign();
        assert_eq!(x, Bcd::from(-9009));
        assert_eq!(y, Bcd::from(9009));

        let nan = Bcd::nan(ErrorKind::DivZero, ErrorKind::OutOfMemory).copy();
        assert_eq!(nan.error(), Some(ErrorKind::DivZero));
        assert_eq!(nan.original_error(), Some(ErrorKind::OutOfMemory));
    }

    #[test]
    fn release() {
        Bcd::from(12345).release();
        Bcd::ONE.release();
        Bcd::NAN.release();
        assert_eq!(Bcd::ONE.decimal_digits(), 1);
    }

    #[test]
    fn signs() {
        let x = Bcd::from(42);
        assert!(x.negative_abs().is_negative());
        assert!(!x.negative_abs().abs().is_negative());
        assert!(x.with_sign(true).is_negative());

        let mut zero = Bcd::ZERO;
        zero.neg_assign();
        assert!(!zero.is_negative());

        let mut nan = Bcd::nan(ErrorKind::PowNeg, ErrorKind::PowNeg);
        nan.set_sign(true);
        assert_eq!(nan.error(), Some(ErrorKind::PowNeg));
        assert!(!nan.is_negative());
    }

    #[test]
    fn views_are_canonical() {
        let x = Bcd::from_bytes(&hex!("01 00 00"), false, Endian::Little);
        let pairs = x.pairs().unwrap();
        assert_eq!(pairs.last(), Some(&0x01));
        assert_eq!(pairs.decimal_digits(), 1);
        assert!(pairs.is_one());
        assert_eq!(Bcd::from(100).pairs().unwrap().decimal_digits(), 3);
    }

    #[test]
    fn truth() {
        assert!(Bcd::from(-1).is_nonzero());
        assert!(Bcd::ONE.is_nonzero());
        assert!(!Bcd::ZERO.is_nonzero());
    }
}
