/// One byte of packed BCD: the tens digit in the high nibble, the units digit in the low one.
///
/// [`Bcd`][crate::Bcd] is composed of many pairs, least significant first.
pub type Pair = u8;

/// The decimal-adjust strategy the additive engine runs on.
///
/// On 32-bit x86 this is [`Daa`] (unless feature `portable` is set),
/// everywhere else [`Portable`]. The build script makes the choice.
pub type Native = strategy::Native;

#[cfg(bcd_daa)]
mod strategy {
    pub type Native = super::Daa;
}

#[cfg(not(bcd_daa))]
mod strategy {
    pub type Native = super::Portable;
}

/// Pair-wise addition and subtraction with carry, in decimal.
///
/// Implementations ***must*** agree with exact decimal arithmetic on every
/// valid pair (both nibbles at most 9) and every carry-in.
pub trait DecimalAdjust {
    /// `a + b + carry`, as a pair and the outgoing carry.
    fn add(a: Pair, b: Pair, carry: bool) -> (Pair, bool);

    /// `a - b - borrow`, as a pair and the outgoing borrow.
    fn sub(a: Pair, b: Pair, borrow: bool) -> (Pair, bool);
}

/// Binary addition followed by the "+6" correction, in plain Rust.
pub struct Portable;

impl DecimalAdjust for Portable {
    #[inline]
    fn add(a: Pair, b: Pair, carry: bool) -> (Pair, bool) {
        let mut sum = a as u16 + b as u16 + carry as u16;
        if (a & 0x0F) + (b & 0x0F) + carry as u8 > 9 {
            sum += 0x06;
        }
        let carry = sum > 0x9F;
        if carry {
            sum += 0x60;
        }
        (sum as Pair, carry)
    }

    #[inline]
    fn sub(a: Pair, b: Pair, borrow: bool) -> (Pair, bool) {
        let borrow = borrow as i16;
        let mut difference = a as i16 - b as i16 - borrow;
        if ((a & 0x0F) as i16) < (b & 0x0F) as i16 + borrow {
            difference -= 0x06;
        }
        let borrow = (a as i16) < b as i16 + borrow;
        if borrow {
            difference -= 0x60;
        }
        (difference as Pair, borrow)
    }
}

/// The x86 `adc`+`daa` and `sbb`+`das` instruction pairs.
#[cfg(bcd_daa)]
pub struct Daa;

#[cfg(bcd_daa)]
impl DecimalAdjust for Daa {
    #[inline]
    fn add(a: Pair, b: Pair, carry: bool) -> (Pair, bool) {
        let sum: Pair;
        let carry_out: u8;
        // SAFETY: register-only arithmetic, flags are the only other state touched.
        unsafe {
            core::arch::asm!(
                "bt {c:e}, 0",
                "adc al, {b}",
                "daa",
                "setc {out}",
                c = in(reg) carry as u32,
                b = in(reg_byte) b,
                out = out(reg_byte) carry_out,
                inout("al") a => sum,
                options(pure, nomem, nostack),
            );
        }
        (sum, carry_out != 0)
    }

    #[inline]
    fn sub(a: Pair, b: Pair, borrow: bool) -> (Pair, bool) {
        let difference: Pair;
        let borrow_out: u8;
        // SAFETY: as above.
        unsafe {
            core::arch::asm!(
                "bt {c:e}, 0",
                "sbb al, {b}",
                "das",
                "setc {out}",
                c = in(reg) borrow as u32,
                b = in(reg_byte) b,
                out = out(reg_byte) borrow_out,
                inout("al") a => difference,
                options(pure, nomem, nostack),
            );
        }
        (difference, borrow_out != 0)
    }
}

#[inline]
pub const fn tens(pair: Pair) -> u8 {
    pair >> 4
}

#[inline]
pub const fn units(pair: Pair) -> u8 {
    pair & 0x0F
}

/// The value `0..=99` of a valid pair.
#[inline]
pub const fn value(pair: Pair) -> u8 {
    10 * tens(pair) + units(pair)
}

/// Packs `value` (must be below 100).
#[inline]
pub const fn from_value(value: u8) -> Pair {
    debug_assert!(value < 100);
    ((value / 10) << 4) | (value % 10)
}

#[inline]
pub const fn is_valid(pair: Pair) -> bool {
    tens(pair) <= 9 && units(pair) <= 9
}

/// The 2-digit by 2-digit kernel of multiplication.
///
/// With `ab = [a|b]` and `cd = [c|d]`, this is
/// $100 \cdot ac + 10 \cdot (ad + bc) + bd$, always in `0..=9801`.
#[inline]
pub fn mul_pairs(ab: Pair, cd: Pair) -> u16 {
    let (a, b) = (tens(ab) as u16, units(ab) as u16);
    let (c, d) = (tens(cd) as u16, units(cd) as u16);
    100 * a * c + 10 * (a * d + b * c) + b * d
}
