//! Tick-loop driver: owns the controller and the run statistics.

use tracing::{debug, info};

use crate::common::{TickInput, TickOutput};
use crate::config::Config;
use crate::core::Controller;
use crate::stats::SimStats;

/// Top-level simulator: controller state plus bookkeeping for a run.
#[derive(Debug)]
pub struct Simulator {
    /// The controller under simulation.
    pub controller: Controller,
    /// Statistics accumulated over the run.
    pub stats: SimStats,
    trace_ticks: bool,
    max_ticks: Option<u64>,
    prev_stable: bool,
}

impl Simulator {
    /// Creates a simulator with a freshly powered-up controller.
    ///
    /// # Panics
    ///
    /// Panics if the configured debounce window is zero.
    pub fn new(config: &Config) -> Self {
        Self {
            controller: Controller::new(config),
            stats: SimStats::new(),
            trace_ticks: config.general.trace_ticks,
            max_ticks: config.general.max_ticks,
            prev_stable: false,
        }
    }

    /// Advances the controller by one clock edge, updating statistics.
    pub fn tick(&mut self, input: TickInput) -> TickOutput {
        let out = self.controller.tick(input);

        self.stats.ticks += 1;
        if input.reset {
            self.stats.resets += 1;
        }
        if out.stable != self.prev_stable {
            self.stats.level_changes += 1;
        }
        self.prev_stable = out.stable;
        if out.press {
            self.stats.presses += 1;
            debug!(tick = self.stats.ticks, bus = %input.bus, "press confirmed");
        }
        if out.execute {
            self.stats.executes += 1;
            let latches = self.controller.latches();
            debug!(
                tick = self.stats.ticks,
                a = %latches.operand_a,
                b = %latches.operand_b,
                opcode = %latches.opcode,
                "execute pulse"
            );
        }
        if self.trace_ticks {
            info!(
                tick = self.stats.ticks,
                state = ?out.state,
                stable = out.stable,
                execute = out.execute,
                result = %out.result.result,
                "tick"
            );
        }

        out
    }

    /// Runs a full stimulus, honoring the configured tick limit.
    ///
    /// Returns one output snapshot per simulated tick.
    pub fn run(&mut self, stimulus: &[TickInput]) -> Vec<TickOutput> {
        let limit = self
            .max_ticks
            .map_or(stimulus.len(), |m| stimulus.len().min(m as usize));
        let mut outputs = Vec::with_capacity(limit);
        for input in &stimulus[..limit] {
            outputs.push(self.tick(*input));
        }
        outputs
    }
}
