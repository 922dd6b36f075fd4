use core::fmt;

/// There is but one conversion failure 🤪.
///
/// Arithmetic never fails this way, it goes [`NaN`][crate::Bcd::NaN] instead.
/// This is only returned by `FromStr` and the `TryFrom` conversions to
/// native integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error;

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not representable")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Why a value is [`NaN`][crate::Bcd::NaN].
///
/// A NaN carries two of these: the operation that produced it most recently,
/// and the one that originally started the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// the [`Bcd::NAN`][crate::Bcd::NAN] constant
    Nan,
    /// added a NaN
    AddNan,
    /// subtracted a NaN
    SubNan,
    /// multiplied a NaN
    MulNan,
    /// divided a NaN
    DivNan,
    /// used a NaN as base or exponent
    PowNan,
    /// factorial of a NaN
    FactNan,
    /// shifted a NaN
    ShiftNan,
    /// negative exponent
    PowNeg,
    /// negative factorial
    FactNeg,
    /// division or modulo by zero
    DivZero,
    /// digit buffer could not be allocated
    OutOfMemory,
    /// a constructor was fed something other than decimal digits
    InvalidDigit,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        f.write_str(match self {
            Nan => "NaN",
            AddNan => "add on NaN",
            SubNan => "subtract on NaN",
            MulNan => "multiply on NaN",
            DivNan => "divide on NaN",
            PowNan => "power on NaN",
            FactNan => "factorial on NaN",
            ShiftNan => "shift on NaN",
            PowNeg => "negative exponent",
            FactNeg => "negative factorial",
            DivZero => "divide by zero",
            OutOfMemory => "out of memory",
            InvalidDigit => "invalid decimal digit",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ErrorKind {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ErrorKind::DivZero.to_string(), "divide by zero");
        assert_eq!(ErrorKind::AddNan.to_string(), "add on NaN");
        assert_eq!(Error.to_string(), "not representable");
    }
}
