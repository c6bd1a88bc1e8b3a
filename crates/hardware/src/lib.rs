//! Cycle-accurate simulator for a 4-bit synchronous bus controller.
//!
//! This crate models a small clocked digital circuit, sampled once per clock
//! edge, with the following stages:
//! 1. **Debounce Filter:** Cleans a mechanically noisy input line into a stable
//!    logic level after a configurable settle window.
//! 2. **Capture Sequencer:** A four-state FSM that latches operand A, operand B,
//!    and an opcode from a shared 4-bit bus, one confirmed press at a time, then
//!    emits a single-tick execute pulse.
//! 3. **Execution & Flag Unit:** Computes one of eight arithmetic/logic/shift
//!    operations over the latched operands and derives carry/overflow/zero/sign.
//! 4. **Simulation:** Stimulus loading, a tick-loop driver, configuration, and
//!    run statistics.
//!
//! All state transitions are pure functions of (current state, sampled inputs);
//! nothing changes between ticks, and the one-tick register delay between
//! stages of the real circuit is reproduced rather than collapsed.

/// Shared leaf types (4-bit values, per-tick input/output records).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// The controller itself: debounce, edge detection, sequencer, ALU, wiring.
pub mod core;
/// Simulation driver: stimulus loader and tick-loop simulator.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Top-level controller; advance it with [`Controller::tick`].
pub use crate::core::Controller;
/// 4-bit unsigned value used on every bus and register.
pub use crate::common::Nibble;
/// Tick-loop driver owning a controller and its statistics.
pub use crate::sim::Simulator;
