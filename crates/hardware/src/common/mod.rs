//! Shared leaf types used across the controller and the simulation driver.
//!
//! This module provides:
//! 1. **Nibble:** A `u8`-backed newtype for 4-bit unsigned values.
//! 2. **Tick records:** The per-tick input sampled from the host and the
//!    per-tick output snapshot read back from the controller.

/// The 4-bit value newtype and its conversions.
pub mod nibble;
/// Per-tick input and output records.
pub mod tick;

pub use nibble::{Nibble, NibbleOverflow};
pub use tick::{TickInput, TickOutput};
