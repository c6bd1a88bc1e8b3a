//! ALU logical and comparison operations.
//!
//! Bitwise AND/OR/XOR plus unsigned greater-than and less-than. Comparisons
//! place their boolean in the low result bit. None of these set carry or
//! overflow; those flags stay clear at the dispatch site.

use crate::common::Nibble;
use crate::core::alu::AluOp;

/// Executes a logical or comparison operation.
///
/// Returns zero for opcodes handled by the other operation families.
pub fn execute(op: AluOp, a: Nibble, b: Nibble) -> Nibble {
    match op {
        AluOp::And => Nibble::new(a.get() & b.get()),
        AluOp::Or => Nibble::new(a.get() | b.get()),
        AluOp::Xor => Nibble::new(a.get() ^ b.get()),
        AluOp::GreaterThan => Nibble::new(u8::from(a.get() > b.get())),
        AluOp::LessThan => Nibble::new(u8::from(a.get() < b.get())),
        AluOp::Add | AluOp::Sub | AluOp::Shift | AluOp::Nop => Nibble::ZERO,
    }
}
