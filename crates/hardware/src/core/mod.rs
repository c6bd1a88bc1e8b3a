//! The controller: filter, sequencer, execution unit, and their wiring.
//!
//! [`Controller`] composes the three stages the way the real circuit does,
//! with a register between each pair: on any given tick the execution unit
//! consumes the sequencer outputs latched on the *previous* tick, and the
//! sequencer consumes the debounced level latched on the previous tick. That
//! one-tick propagation delay per stage is part of the observable behavior
//! and is deliberately not collapsed into a single combinational pass.

/// Execution & flag unit (ALU).
pub mod alu;
/// Debounce filter for the noisy input line.
pub mod debounce;
/// Rising-edge derivation for the press line.
pub mod edge;
/// Operand/opcode capture FSM.
pub mod sequencer;

use tracing::trace;

use crate::common::{TickInput, TickOutput};
use crate::config::Config;
use alu::{ExecuteUnit, ResultBundle};
use debounce::Debouncer;
use edge::EdgeDetector;
use sequencer::{CaptureState, LatchedOperands, Sequencer};

/// Top-level synchronous controller.
///
/// Advance it once per clock edge with [`Controller::tick`]. All state lives
/// in the three component register sets plus the inter-stage registers held
/// here; nothing changes between ticks.
#[derive(Debug, Clone)]
pub struct Controller {
    debouncer: Debouncer,
    edge: EdgeDetector,
    sequencer: Sequencer,
    execute_unit: ExecuteUnit,

    /// Debounced level registered last tick; feeds the edge detector.
    stable_q: bool,
    /// Execute pulse registered last tick; feeds the execution unit.
    pulse_q: bool,
    /// Latched operands registered last tick; feed the execution unit.
    latches_q: LatchedOperands,
    /// Pulse seen on the previous tick, for the consecutive-pulse check.
    last_pulse: bool,
}

impl Controller {
    /// Builds a controller from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configured debounce window is zero.
    pub fn new(config: &Config) -> Self {
        Self {
            debouncer: Debouncer::new(config.debounce.window_ticks),
            edge: EdgeDetector::new(),
            sequencer: Sequencer::new(),
            execute_unit: ExecuteUnit::new(),
            stable_q: false,
            pulse_q: false,
            latches_q: LatchedOperands::default(),
            last_pulse: false,
        }
    }

    /// Advances every stage by one clock edge.
    ///
    /// Stage order matters only in that each stage must read its upstream
    /// register *before* that register is rewritten for the next tick; the
    /// effect is identical to all registers clocking simultaneously.
    ///
    /// Asynchronous reset is checked first: on a reset tick the capture path
    /// (sequencer state, latched operands, and the inter-stage pulse/latch
    /// registers) is cleared before any transition table runs. The debounce
    /// filter and the held result bundle are outside the reset domain.
    ///
    /// # Panics
    ///
    /// Panics if the sequencer asserts the execute pulse on two consecutive
    /// ticks; that cannot happen in a correct sequencer and indicates a
    /// fatal internal defect, not a recoverable condition.
    pub fn tick(&mut self, input: TickInput) -> TickOutput {
        if input.reset {
            self.pulse_q = false;
            self.latches_q = LatchedOperands::default();
            self.last_pulse = false;
        }

        // Execute stage: consumes the pulse and operands registered last tick.
        let result = self.execute_unit.step(
            self.pulse_q,
            self.latches_q.operand_a,
            self.latches_q.operand_b,
            self.latches_q.opcode,
        );

        // Capture stage: consumes the debounced level registered last tick.
        let press = self.edge.step(self.stable_q);
        let seq = self.sequencer.step(press, input.bus, input.reset);

        // Input stage: samples the raw line now.
        let stable = self.debouncer.step(input.raw);

        assert!(
            !(seq.execute && self.last_pulse),
            "execute pulse asserted on two consecutive ticks"
        );
        self.last_pulse = seq.execute;

        // Register updates for the next tick.
        self.stable_q = stable;
        self.pulse_q = seq.execute;
        self.latches_q = seq.latches;

        trace!(
            state = ?seq.state,
            stable,
            press,
            execute = seq.execute,
            result = %result.result,
            "tick"
        );

        TickOutput {
            state: seq.state,
            stable,
            press,
            execute: seq.execute,
            result,
        }
    }

    /// Returns the sequencer state as of the last completed tick.
    pub const fn state(&self) -> CaptureState {
        self.sequencer.state()
    }

    /// Returns the operands latched as of the last completed tick.
    pub const fn latches(&self) -> LatchedOperands {
        self.sequencer.latches()
    }

    /// Returns the held result bundle as of the last completed tick.
    pub const fn result(&self) -> ResultBundle {
        self.execute_unit.bundle()
    }
}
