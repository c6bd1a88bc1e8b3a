//! 4-bit unsigned values.
//!
//! Every bus, operand, and result register in the controller is four bits
//! wide. `Nibble` keeps that width explicit in the type system instead of
//! scattering `& 0xF` masks through the arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when converting a `u8` that does not fit in 4 bits.
///
/// Produced by the checked [`TryFrom<u8>`] conversion used when
/// deserializing external stimulus; internal arithmetic uses the masking
/// constructor [`Nibble::new`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value {0:#04x} does not fit in 4 bits")]
pub struct NibbleOverflow(pub u8);

/// A 4-bit unsigned value (`0..=15`).
///
/// The masking constructor maps any `u8` onto a valid value, mirroring how a
/// physical 4-bit bus simply has no wires for the upper bits. Checked
/// conversion from host-supplied data goes through [`TryFrom<u8>`], so a
/// stimulus file driving `16` onto the bus is rejected at load time.
///
/// # Examples
///
/// ```
/// use nybble_core::Nibble;
///
/// let n = Nibble::new(0b1_0110); // masked to the low 4 bits
/// assert_eq!(n.get(), 0b0110);
/// assert!(Nibble::try_from(16u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Nibble(u8);

impl Nibble {
    /// The all-zeros value.
    pub const ZERO: Self = Self(0);
    /// The all-ones value (`0b1111`).
    pub const MAX: Self = Self(0xF);

    /// Creates a nibble from the low 4 bits of `raw`; upper bits are dropped.
    pub const fn new(raw: u8) -> Self {
        Self(raw & 0xF)
    }

    /// Returns the value as a `u8` in `0..=15`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns bit `idx` (0 = least significant). Bits above 3 are always zero.
    pub const fn bit(self, idx: u8) -> bool {
        (self.0 >> idx) & 1 == 1
    }

    /// Returns the sign bit (bit 3) under the two's-complement reading.
    pub const fn sign(self) -> bool {
        self.bit(3)
    }

    /// Returns true if the value is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Nibble {
    type Error = NibbleOverflow;

    /// Converts without masking; values above 15 are rejected.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > 0xF {
            Err(NibbleOverflow(raw))
        } else {
            Ok(Self(raw))
        }
    }
}

impl From<Nibble> for u8 {
    fn from(n: Nibble) -> Self {
        n.0
    }
}

impl fmt::Display for Nibble {
    /// Formats as a 4-digit binary literal, e.g. `0b1010`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06b}", self.0)
    }
}
