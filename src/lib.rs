#![cfg_attr(not(test), no_std)]
//! Signed integers of unbounded size in packed binary-coded decimal.
//!
//! Two decimal digits per byte, least significant byte first. Errors do not
//! escape through `Result`: arithmetic that fails yields [`Bcd::NaN`], and NaN
//! is contagious.
//!
//! ```
//! use packed_bcd::Bcd;
//!
//! let x = Bcd::from(91) * Bcd::from(99);
//! assert_eq!(x.to_string(), "9009");
//!
//! let (q, r) = Bcd::from(-7).divmod(&Bcd::from(2));
//! assert_eq!((q.to_i64(), r.to_i64()), (-4, 1));
//!
//! assert!((Bcd::from(5) / Bcd::ZERO).is_nan());
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
pub mod digit;
mod error;
pub use error::{Error, ErrorKind, Result};
mod numbers;
pub use numbers::{Bcd, Endian, Magnitude, Pairs, I64_SENTINEL, U64_SENTINEL};
