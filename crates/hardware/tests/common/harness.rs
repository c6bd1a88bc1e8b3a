//! Stimulus-building harness.
//!
//! Controller-level tests mostly want to say "press the button with value X
//! on the bus" without re-deriving debounce timing in every test. The
//! [`Stimulus`] builder encodes the timing once:
//!
//! - a press is `window` ticks of the raw line high followed by `window`
//!   ticks low, with the bus held throughout;
//! - with presses packed back to back from power-up, the confirmed press
//!   pulse for press `k` (0-based) lands at tick index `2*window*k + window`,
//!   the execute pulse one tick after the third press pulse, and the result
//!   bundle update one tick after that.

use nybble_core::common::{Nibble, TickInput};
use nybble_core::config::Config;

/// Debounce window used by most controller-level tests. Small enough to keep
/// stimulus sequences readable, large enough to exercise the settle window.
pub const WINDOW: u32 = 3;

/// Returns a config with the given debounce window and defaults elsewhere.
pub fn test_config(window_ticks: u32) -> Config {
    let mut config = Config::default();
    config.debounce.window_ticks = window_ticks;
    config
}

/// Fluent builder for per-tick input sequences.
pub struct Stimulus {
    window: u32,
    ticks: Vec<TickInput>,
}

impl Stimulus {
    /// Starts an empty sequence for the given debounce window.
    pub fn new(window: u32) -> Self {
        Self {
            window,
            ticks: Vec::new(),
        }
    }

    /// Appends `count` ticks with the raw line low and the bus idle.
    pub fn idle(mut self, count: u32) -> Self {
        for _ in 0..count {
            self.ticks.push(TickInput::default());
        }
        self
    }

    /// Appends one fully debounced press driving `bus`: `window` ticks high
    /// then `window` ticks low, bus held for the whole press.
    pub fn press(mut self, bus: u8) -> Self {
        let bus = Nibble::new(bus);
        for _ in 0..self.window {
            self.ticks.push(TickInput {
                raw: true,
                bus,
                reset: false,
            });
        }
        for _ in 0..self.window {
            self.ticks.push(TickInput {
                raw: false,
                bus,
                reset: false,
            });
        }
        self
    }

    /// Appends a single tick with explicit inputs.
    pub fn tick(mut self, raw: bool, bus: u8, reset: bool) -> Self {
        self.ticks.push(TickInput {
            raw,
            bus: Nibble::new(bus),
            reset,
        });
        self
    }

    /// Finishes the sequence.
    pub fn build(self) -> Vec<TickInput> {
        self.ticks
    }
}

/// Tick index of the confirmed press pulse for press `k` (0-based) in a
/// sequence of back-to-back presses starting at power-up.
pub const fn press_pulse_index(window: u32, k: u32) -> usize {
    (2 * window * k + window) as usize
}
