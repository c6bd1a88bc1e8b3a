//! Capture sequencer.
//!
//! A four-state FSM that walks `AwaitA → AwaitB → AwaitOp → Execute` one
//! confirmed press at a time, latching the shared bus into the operand and
//! opcode registers at each press, then emits a single-tick execute pulse
//! and cycles back to `AwaitA`.

use serde::Serialize;

use crate::common::Nibble;

/// Capture sequencer state.
///
/// Never terminal: `Execute` always returns to `AwaitA` on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CaptureState {
    /// Waiting to latch operand A from the bus.
    #[default]
    AwaitA,
    /// Waiting to latch operand B from the bus.
    AwaitB,
    /// Waiting to latch the opcode from the bus.
    AwaitOp,
    /// All three registers latched; the execute pulse fires this tick.
    Execute,
}

/// Operand and opcode registers, written once per capture cycle.
///
/// Held stable while the execute pulse fires; overwritten only as the next
/// capture cycle latches fresh values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatchedOperands {
    /// First operand, latched in `AwaitA`.
    pub operand_a: Nibble,
    /// Second operand, latched in `AwaitB`.
    pub operand_b: Nibble,
    /// Operation selector, latched in `AwaitOp`.
    pub opcode: Nibble,
}

/// Sequencer outputs for one tick.
#[derive(Debug, Clone, Copy)]
pub struct SequencerOutput {
    /// State after this tick's transition.
    pub state: CaptureState,
    /// True for exactly the one tick spent in [`CaptureState::Execute`].
    pub execute: bool,
    /// The latched registers as of this tick.
    pub latches: LatchedOperands,
}

/// Capture sequencer register set.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    state: CaptureState,
    latches: LatchedOperands,
}

impl Sequencer {
    /// Creates a sequencer in `AwaitA` with cleared registers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the FSM by one tick.
    ///
    /// `reset` is asynchronous and has priority: it forces `AwaitA`, zeroes
    /// all three latched registers, and suppresses the pulse before the
    /// transition table is evaluated.
    ///
    /// External invariant: `press` must be a one-tick pulse per physical
    /// press (see [`EdgeDetector`](crate::core::edge::EdgeDetector)). Feeding
    /// a held level here would consume one long press as three captures on
    /// three consecutive ticks.
    pub fn step(&mut self, press: bool, bus: Nibble, reset: bool) -> SequencerOutput {
        if reset {
            self.state = CaptureState::AwaitA;
            self.latches = LatchedOperands::default();
            return SequencerOutput {
                state: self.state,
                execute: false,
                latches: self.latches,
            };
        }

        let mut execute = false;
        match self.state {
            CaptureState::AwaitA if press => {
                self.latches.operand_a = bus;
                self.state = CaptureState::AwaitB;
            }
            CaptureState::AwaitB if press => {
                self.latches.operand_b = bus;
                self.state = CaptureState::AwaitOp;
            }
            CaptureState::AwaitOp if press => {
                self.latches.opcode = bus;
                self.state = CaptureState::Execute;
            }
            CaptureState::Execute => {
                execute = true;
                self.state = CaptureState::AwaitA;
            }
            // No press while awaiting: hold state.
            CaptureState::AwaitA | CaptureState::AwaitB | CaptureState::AwaitOp => {}
        }

        SequencerOutput {
            state: self.state,
            execute,
            latches: self.latches,
        }
    }

    /// Returns the current state without advancing the clock.
    pub const fn state(&self) -> CaptureState {
        self.state
    }

    /// Returns the latched registers without advancing the clock.
    pub const fn latches(&self) -> LatchedOperands {
        self.latches
    }
}
