//! Common utilities and types used throughout the RV32IM simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Register width, instruction size, and shift masks.
//! 2. **Fault Handling:** The four terminal fault kinds with their diagnostic payloads.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault types raised by the core.
pub mod fault;

pub use constants::{INSTRUCTION_SIZE, SHAMT_MASK, XLEN};
pub use fault::Fault;
