//! ALU shift operations.
//!
//! When the shift opcode is selected, operand B is repurposed as a control
//! nibble: bits `[3:2]` give the shift amount (0–3), bit `[1]` the direction
//! (0 = right, 1 = left), bit `[0]` the fill value for vacated positions.
//! The reference circuit enumerates every amount/direction/fill combination
//! by hand; a single parameterized routine here is behaviorally equivalent.

use crate::common::Nibble;

/// Shift direction, decoded from control bit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Drop low bits, fill at the top.
    Right,
    /// Drop high bits, fill at the bottom.
    Left,
}

/// Decoded shift control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftControl {
    /// Shift distance in bits, structurally limited to `0..=3`.
    pub amount: u8,
    /// Shift direction.
    pub direction: ShiftDirection,
    /// Bit value inserted into vacated positions.
    pub fill: bool,
}

impl ShiftControl {
    /// Decodes a control nibble into its amount/direction/fill fields.
    pub const fn decode(ctl: Nibble) -> Self {
        Self {
            amount: (ctl.get() >> 2) & 0b11,
            direction: if ctl.bit(1) {
                ShiftDirection::Left
            } else {
                ShiftDirection::Right
            },
            fill: ctl.bit(0),
        }
    }
}

/// Applies a decoded shift to `value`.
///
/// Shifted-out bits are dropped; the fill bit is replicated into every
/// vacated position.
///
/// # Panics
///
/// Panics (debug builds) if the amount is outside `0..=3`; the 2-bit decode
/// field makes that unreachable from any control nibble.
pub fn execute(value: Nibble, ctl: ShiftControl) -> Nibble {
    debug_assert!(ctl.amount <= 3, "shift amount outside the 2-bit field");
    let fill_bits: u8 = if ctl.fill { (1 << ctl.amount) - 1 } else { 0 };
    let v = value.get();
    let shifted = match ctl.direction {
        ShiftDirection::Left => (v << ctl.amount) | fill_bits,
        ShiftDirection::Right => (v >> ctl.amount) | (fill_bits << (4 - ctl.amount)),
    };
    Nibble::new(shifted)
}
