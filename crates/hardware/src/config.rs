//! Configuration system for the controller simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (debounce window, nominal sample rate).
//! 2. **Structures:** Hierarchical config for general simulation settings and
//!    the debounce filter.
//!
//! Configuration is supplied as JSON or built with `Config::default()` for
//! the CLI.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of consecutive ticks an input must hold steady before the
    /// debounced output may change.
    ///
    /// At the default 1 kHz sampling rate this models a ~50 ms settle window,
    /// a typical figure for mechanical switch bounce.
    pub const DEBOUNCE_WINDOW_TICKS: u32 = 50;

    /// Nominal sampling rate of the external clock, in Hz.
    ///
    /// Documentation only: the simulator is tick-driven and never sleeps.
    /// The rate relates the window tick count to wall-clock bounce time.
    pub const SAMPLE_RATE_HZ: u32 = 1_000;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Deserializing from JSON, with every omitted field defaulted:
///
/// ```
/// use nybble_core::config::Config;
///
/// let json = r#"{ "debounce": { "window_ticks": 3 } }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.debounce.window_ticks, 3);
/// assert_eq!(config.debounce.sample_rate_hz, 1000);
/// assert!(!config.general.trace_ticks);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Debounce filter parameters.
    #[serde(default)]
    pub debounce: DebounceConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every tick at INFO level instead of TRACE (verbose).
    #[serde(default)]
    pub trace_ticks: bool,

    /// Stop a stimulus run after this many ticks, if set.
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

/// Debounce filter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DebounceConfig {
    /// Settle window length in ticks. Must be at least 1.
    #[serde(default = "DebounceConfig::default_window")]
    pub window_ticks: u32,

    /// Nominal sampling rate in Hz, relating ticks to wall-clock time.
    #[serde(default = "DebounceConfig::default_sample_rate")]
    pub sample_rate_hz: u32,
}

impl DebounceConfig {
    /// Returns the default settle window length in ticks.
    fn default_window() -> u32 {
        defaults::DEBOUNCE_WINDOW_TICKS
    }

    /// Returns the default nominal sampling rate in Hz.
    fn default_sample_rate() -> u32 {
        defaults::SAMPLE_RATE_HZ
    }

    /// Returns the settle window expressed in milliseconds at the nominal
    /// sampling rate.
    pub fn window_millis(&self) -> f64 {
        f64::from(self.window_ticks) * 1_000.0 / f64::from(self.sample_rate_hz)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            window_ticks: defaults::DEBOUNCE_WINDOW_TICKS,
            sample_rate_hz: defaults::SAMPLE_RATE_HZ,
        }
    }
}
