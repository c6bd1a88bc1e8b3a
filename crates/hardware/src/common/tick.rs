//! Per-tick input and output records.
//!
//! The host/harness drives [`TickInput`] into the controller once per clock
//! edge and reads a [`TickOutput`] snapshot back. Both are plain data: the
//! input deserializes straight out of a stimulus file, and the output
//! serializes for trace dumping.

use serde::{Deserialize, Serialize};

use crate::common::Nibble;
use crate::core::alu::ResultBundle;
use crate::core::sequencer::CaptureState;

/// Externally driven inputs sampled at one clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// The raw, possibly glitching input line.
    #[serde(default)]
    pub raw: bool,
    /// The shared 4-bit operand/opcode bus.
    #[serde(default)]
    pub bus: Nibble,
    /// Asynchronous reset; checked before any clocked logic on this tick.
    #[serde(default)]
    pub reset: bool,
}

/// Observable controller state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickOutput {
    /// Capture sequencer state after this tick's transition.
    pub state: CaptureState,
    /// Debounced level produced by the filter this tick.
    pub stable: bool,
    /// One-tick confirmed-press pulse fed to the sequencer this tick.
    pub press: bool,
    /// One-tick execute pulse emitted by the sequencer this tick.
    pub execute: bool,
    /// Held result and flags; updates the tick after an execute pulse.
    pub result: ResultBundle,
}
