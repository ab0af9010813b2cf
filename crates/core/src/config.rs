//! Configuration for the simulator.
//!
//! This module defines the construction-time parameters of the core:
//! 1. **Register file mode:** standard RV32I (32 registers) or embedded RV32E (16).
//! 2. **Memory ceiling:** the exclusive upper bound on addressable memory.
//!
//! Configuration is supplied via JSON from the CLI or use `Config::default()`.
//! The core consumes it as a constructor argument, never as a global.

use serde::Deserialize;

use crate::common::constants::{
    DEFAULT_MEMORY_CEILING, EMBEDDED_MEMORY_CEILING, REG_COUNT, REG_COUNT_EMBEDDED,
};

/// Top-level simulator configuration.
///
/// Deserializable from JSON with every field optional; absent fields take
/// the defaults below.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Run in embedded (RV32E) mode: 16 registers and a 64 KiB memory
    /// ceiling unless `memory_ceiling` overrides it.
    pub embedded: bool,

    /// Exclusive upper bound on addressable memory, in bytes.
    ///
    /// `None` selects the mode default: 2 GiB, or 64 KiB in embedded mode.
    pub memory_ceiling: Option<u64>,
}

impl Config {
    /// Number of general-purpose registers for this configuration.
    pub fn register_count(&self) -> usize {
        if self.embedded {
            REG_COUNT_EMBEDDED
        } else {
            REG_COUNT
        }
    }

    /// Effective memory ceiling for this configuration.
    pub fn memory_ceiling(&self) -> u64 {
        self.memory_ceiling.unwrap_or(if self.embedded {
            EMBEDDED_MEMORY_CEILING
        } else {
            DEFAULT_MEMORY_CEILING
        })
    }
}
