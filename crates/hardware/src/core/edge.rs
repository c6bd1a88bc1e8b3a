//! Rising-edge detector.
//!
//! The capture sequencer consumes one-tick press pulses, not levels: a press
//! held high across several ticks must count as a single capture, so the
//! level coming out of the debounce filter is re-derived into an edge here.

/// One-register rising-edge detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    /// Creates a detector with the level register cleared.
    pub const fn new() -> Self {
        Self { last: false }
    }

    /// Samples `level` and returns true only on a low-to-high transition.
    pub fn step(&mut self, level: bool) -> bool {
        let rising = level && !self.last;
        self.last = level;
        rising
    }
}
