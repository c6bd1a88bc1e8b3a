//! Debounce filter.
//!
//! Converts a noisy boolean line sampled once per tick into a stable logic
//! level that changes only after the input has held a new value for a full
//! settle window of consecutive ticks.
//!
//! # The settle-window quirk
//!
//! The reference circuit forces its output register low for every tick spent
//! inside the settle window, and only latches the raw value sampled at the
//! tick the window completes. The filter therefore emits an observable
//! low-going glitch on every debounce event, including the power-up settle.
//! That behavior is reproduced here bit-for-bit; it is a documented quirk of
//! the design, not something this simulator is allowed to clean up.

/// Debounce filter register set.
///
/// Owns the stable signal exclusively; consumers read the value returned by
/// [`Debouncer::step`] (or [`Debouncer::output`]) and never write it.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Settle window length in ticks (at least 1).
    window: u32,
    /// The observable stable signal.
    stable: bool,
    /// Ticks elapsed inside the current settle window.
    counter: u32,
    /// True while a settle window is in progress.
    counting: bool,
    /// True until the first tick has been processed.
    first_run: bool,
}

impl Debouncer {
    /// Creates a filter with the given settle window.
    ///
    /// # Panics
    ///
    /// Panics if `window_ticks` is zero; a zero-length window has no meaning
    /// in the reference circuit and would make the counter compare vacuous.
    pub fn new(window_ticks: u32) -> Self {
        assert!(window_ticks >= 1, "debounce window must be at least 1 tick");
        Self {
            window: window_ticks,
            stable: false,
            counter: 0,
            counting: false,
            first_run: true,
        }
    }

    /// Advances the filter by one tick and returns the stable signal.
    ///
    /// The very first tick unconditionally enters the settle window: there is
    /// no prior value to compare the sample against. In steady state a sample
    /// that disagrees with the held value starts a new window. While the
    /// window runs the output is forced low; at the tick the counter reaches
    /// the window length, the output latches the raw value sampled at that
    /// tick and the filter returns to steady state.
    pub fn step(&mut self, raw: bool) -> bool {
        if self.first_run {
            self.first_run = false;
            self.counting = true;
            self.counter = 0;
            self.stable = raw;
        } else if !self.counting && raw != self.stable {
            self.counting = true;
            self.counter = 0;
            self.stable = raw;
        }

        if self.counting {
            self.counter += 1;
            if self.counter >= self.window {
                self.counting = false;
                self.stable = raw;
            } else {
                // Hold-low masking: the register is cleared for the entire
                // settle window, not merely left unchanged.
                self.stable = false;
            }
        }

        self.stable
    }

    /// Returns the stable signal as of the last completed tick.
    pub const fn output(&self) -> bool {
        self.stable
    }

    /// Returns true while a settle window is in progress.
    pub const fn is_settling(&self) -> bool {
        self.counting
    }
}
