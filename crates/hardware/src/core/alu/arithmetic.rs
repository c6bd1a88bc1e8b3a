//! ALU arithmetic operations.
//!
//! Add and subtract run in a widened intermediate so the carry/borrow out of
//! bit 3 is observable, then truncate back to four bits. Signed overflow
//! follows the standard two's-complement rules on the 4-bit views.

use crate::common::Nibble;

/// `(A + B) mod 16` with carry and signed overflow.
///
/// Carry is bit 4 of the unsigned 5-bit sum. Overflow is set when both
/// operands share a sign and the result's sign differs.
pub fn add(a: Nibble, b: Nibble) -> (Nibble, bool, bool) {
    let wide = u16::from(a.get()) + u16::from(b.get());
    let result = Nibble::new(wide as u8);
    let carry = wide & 0x10 != 0;
    let overflow = a.sign() == b.sign() && result.sign() != a.sign();
    (result, carry, overflow)
}

/// `(A - B) mod 16` with borrow and signed overflow.
///
/// Carry doubles as the borrow flag (`A < B` unsigned). Overflow follows the
/// addition rule with B negated: operand signs differ and the result's sign
/// differs from the minuend's.
pub fn sub(a: Nibble, b: Nibble) -> (Nibble, bool, bool) {
    let wide = u16::from(a.get()).wrapping_sub(u16::from(b.get()));
    let result = Nibble::new(wide as u8);
    let borrow = a.get() < b.get();
    let overflow = a.sign() != b.sign() && result.sign() != a.sign();
    (result, borrow, overflow)
}
