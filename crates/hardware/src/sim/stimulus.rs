//! Stimulus file format and loader.
//!
//! A stimulus file is a JSON array of tick records. Each record carries the
//! three externally driven inputs, all optional (false/zero when omitted),
//! plus a `repeat` count so long idle stretches stay compact:
//!
//! ```json
//! [
//!     { "repeat": 10 },
//!     { "raw": true, "bus": 5, "repeat": 3 },
//!     { "bus": 5, "repeat": 3 }
//! ]
//! ```
//!
//! Bus values above 15 are rejected at load time; a 4-bit bus has no wires
//! for them.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::{Nibble, TickInput};

/// Errors produced while loading a stimulus file.
#[derive(Debug, Error)]
pub enum StimulusError {
    /// The file could not be read.
    #[error("failed to read stimulus file {path}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file was not valid stimulus JSON (including out-of-range bus values).
    #[error("failed to parse stimulus file {path}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// One stimulus record: inputs for `repeat` consecutive ticks.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StimulusRecord {
    /// Raw input line level.
    #[serde(default)]
    pub raw: bool,
    /// Shared bus value (0–15).
    #[serde(default)]
    pub bus: Nibble,
    /// Asynchronous reset line.
    #[serde(default)]
    pub reset: bool,
    /// Number of consecutive ticks this record drives (default 1).
    #[serde(default = "StimulusRecord::default_repeat")]
    pub repeat: u64,
}

impl StimulusRecord {
    /// Returns the default repeat count for a record.
    const fn default_repeat() -> u64 {
        1
    }

    /// Returns the per-tick input this record drives.
    pub const fn input(&self) -> TickInput {
        TickInput {
            raw: self.raw,
            bus: self.bus,
            reset: self.reset,
        }
    }
}

/// Loads and expands a stimulus file into per-tick inputs.
///
/// # Errors
///
/// Returns [`StimulusError::Io`] if the file cannot be read and
/// [`StimulusError::Parse`] if it is not a valid stimulus JSON array.
pub fn load(path: &Path) -> Result<Vec<TickInput>, StimulusError> {
    let text = fs::read_to_string(path).map_err(|source| StimulusError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records: Vec<StimulusRecord> =
        serde_json::from_str(&text).map_err(|source| StimulusError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(expand(&records))
}

/// Expands records into one [`TickInput`] per tick.
pub fn expand(records: &[StimulusRecord]) -> Vec<TickInput> {
    let mut ticks = Vec::new();
    for record in records {
        let input = record.input();
        for _ in 0..record.repeat {
            ticks.push(input);
        }
    }
    ticks
}
