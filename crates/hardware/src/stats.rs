//! Run statistics collection and reporting.
//!
//! Tracks what happened over a simulation run:
//! 1. **Ticks:** Total clock edges simulated and host wall-clock time.
//! 2. **Input path:** Debounced-level changes and confirmed presses.
//! 3. **Capture path:** Completed capture cycles (execute pulses) and resets.

use std::time::Instant;

/// Statistics for one simulation run.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total clock edges simulated.
    pub ticks: u64,
    /// Number of times the debounced level changed value.
    pub level_changes: u64,
    /// Confirmed one-tick press pulses delivered to the sequencer.
    pub presses: u64,
    /// Completed capture cycles (execute pulses emitted).
    pub executes: u64,
    /// Ticks on which the asynchronous reset was asserted.
    pub resets: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            level_changes: 0,
            presses: 0,
            executes: 0,
            resets: 0,
        }
    }
}

impl SimStats {
    /// Creates a zeroed statistics record starting the wall clock now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let ticks = if self.ticks == 0 { 1 } else { self.ticks };
        let khz = (ticks as f64 / seconds) / 1000.0;
        println!("\n==========================================================");
        println!("NYBBLE CONTROLLER SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_ticks                {}", self.ticks);
        println!("sim_freq                 {khz:.2} kHz");
        println!("----------------------------------------------------------");
        println!("input.level_changes      {}", self.level_changes);
        println!("input.presses            {}", self.presses);
        println!("capture.executes         {}", self.executes);
        println!("capture.resets           {}", self.resets);
        println!("==========================================================");
    }
}
