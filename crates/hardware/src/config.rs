//! Configuration system for the SIA emulator.
//!
//! This module defines the configuration structures used to parameterize the emulator. It
//! provides:
//! 1. **Defaults:** Baseline machine constants (the initial stack pointer).
//! 2. **Structures:** Sectioned config; `general` holds the simulation settings.
//! 3. **Loading:** Parsing a JSON document, from a string or from a file on disk.
//!
//! Every field is optional in the JSON form; anything left out takes its default, and
//! `Config::default()` is what the CLI uses when no `--config` file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::constants::INITIAL_SP;

    /// Initial stack pointer: the top of the 1000-byte memory.
    pub const STACK_POINTER: i32 = INITIAL_SP;
}

/// Root configuration structure containing all emulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use siasim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.general.initial_sp, 1000);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use siasim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 5000 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(5000));
/// assert_eq!(config.general.initial_sp, 1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` when the document is not valid JSON or names a field
    /// that does not exist.
    pub fn from_json(json: &str) -> SimResult<Self> {
        serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` when the file cannot be read and `SimError::Config` when it
    /// does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
///
/// Contains high-level simulation configuration such as tracing, the cycle watchdog and
/// the initial stack pointer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Trace every stage event and print a pipeline occupancy diagram each cycle
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop with an error if the program has not halted after this many cycles
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Initial value of the stack pointer register (r15)
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: i32,
}

impl GeneralConfig {
    fn default_initial_sp() -> i32 {
        defaults::STACK_POINTER
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: None,
            initial_sp: defaults::STACK_POINTER,
        }
    }
}
