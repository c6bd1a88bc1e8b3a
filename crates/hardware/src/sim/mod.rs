//! Simulation driver: stimulus loading and the tick loop.
//!
//! A stimulus file describes the externally driven inputs tick by tick; the
//! [`Simulator`] feeds them through a [`Controller`](crate::core::Controller)
//! and collects outputs and statistics.

/// Tick-loop driver.
pub mod simulator;
/// Stimulus file format and loader.
pub mod stimulus;

pub use simulator::Simulator;
pub use stimulus::{StimulusError, StimulusRecord};
