//! Execution & flag unit.
//!
//! Combinational-then-registered: when the execute pulse is high the unit
//! computes the selected operation over the latched operands and rewrites the
//! whole result bundle atomically; on every other tick the bundle holds its
//! previous value. The dispatch is split by operation family:
//! 1. [`arithmetic`] — add/subtract with carry/borrow and signed overflow.
//! 2. [`logic`] — bitwise AND/OR/XOR and the two comparisons.
//! 3. [`shifts`] — the enumerated 0–3 bit shifts with fill.

pub mod arithmetic;
pub mod logic;
pub mod shifts;

use serde::Serialize;

use crate::common::Nibble;
use shifts::ShiftControl;

/// Decoded operation selector.
///
/// Decoded once from the opcode nibble; undefined encodings map to
/// [`AluOp::Nop`], which produces a zero result with clear carry/overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `(A + B) mod 16`, carry = bit 4 of the unsigned sum.
    Add,
    /// `(A - B) mod 16`, carry = borrow.
    Sub,
    /// Bitwise `A & B`.
    And,
    /// Bitwise `A | B`.
    Or,
    /// Bitwise `A ^ B`.
    Xor,
    /// `1` in the low bit if `A > B` (unsigned), else `0`.
    GreaterThan,
    /// `1` in the low bit if `A < B` (unsigned), else `0`.
    LessThan,
    /// Shift of A controlled by the B nibble (amount/direction/fill).
    Shift,
    /// Default for undefined opcodes: zero result, no flags.
    Nop,
}

impl AluOp {
    /// Decodes the opcode nibble into an operation selector.
    pub const fn decode(opcode: Nibble) -> Self {
        match opcode.get() {
            0b0000 => Self::Add,
            0b0001 => Self::Sub,
            0b0010 => Self::And,
            0b0011 => Self::Or,
            0b0100 => Self::Xor,
            0b0101 => Self::GreaterThan,
            0b0110 => Self::LessThan,
            0b0111 => Self::Shift,
            _ => Self::Nop,
        }
    }
}

/// Registered result bus and status flags.
///
/// All five fields update atomically on the tick the execute pulse is
/// consumed; no partial update is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResultBundle {
    /// 4-bit result.
    pub result: Nibble,
    /// Carry out of bit 3 (addition) or borrow (subtraction).
    pub carry: bool,
    /// Two's-complement signed overflow.
    pub overflow: bool,
    /// True if `result` is zero.
    pub zero: bool,
    /// Bit 3 of `result`.
    pub sign: bool,
}

/// Execution unit register set: the held result bundle.
#[derive(Debug, Clone, Default)]
pub struct ExecuteUnit {
    bundle: ResultBundle,
}

impl ExecuteUnit {
    /// Creates a unit with an all-zero held bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the unit by one tick.
    ///
    /// When `pulse` is true the bundle is recomputed from the operands and
    /// opcode; otherwise the previously held bundle is returned unchanged.
    pub fn step(&mut self, pulse: bool, a: Nibble, b: Nibble, opcode: Nibble) -> ResultBundle {
        if pulse {
            self.bundle = Self::compute(a, b, opcode);
        }
        self.bundle
    }

    /// Returns the held bundle without advancing the clock.
    pub const fn bundle(&self) -> ResultBundle {
        self.bundle
    }

    /// Combinational computation of one operation and its flags.
    fn compute(a: Nibble, b: Nibble, opcode: Nibble) -> ResultBundle {
        let op = AluOp::decode(opcode);
        let (result, carry, overflow) = match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),
            AluOp::Shift => (shifts::execute(a, ShiftControl::decode(b)), false, false),
            AluOp::Nop => (Nibble::ZERO, false, false),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::GreaterThan | AluOp::LessThan => {
                (logic::execute(op, a, b), false, false)
            }
        };
        ResultBundle {
            result,
            carry,
            overflow,
            zero: result.is_zero(),
            sign: result.sign(),
        }
    }
}
