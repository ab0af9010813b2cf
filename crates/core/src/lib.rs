//! RISC-V RV32IM functional instruction-set simulator library.
//!
//! This crate implements a sequential, single-instruction-at-a-time RV32IM
//! simulator with the following:
//! 1. **Core:** Register file, byte-addressable memory, execution engine, and control loop.
//! 2. **ISA:** Decoding and execution for RV32I and the M multiply/divide extension.
//! 3. **Faults:** Precise invalid-register, invalid-memory, invalid-jump, and invalid-opcode reporting.
//! 4. **Simulation:** Binary loader and construction-time configuration.
//!
//! There is no timing model: each step fetches one 32-bit word, decodes it,
//! executes it, and advances the program counter. The run ends when the PC
//! runs off the end of the program image (halt) or an instruction faults.

/// Common types and constants (faults, register widths).
pub mod common;
/// Simulator configuration (register count, memory ceiling).
pub mod config;
/// CPU core (register file, memory, execution engine, control loop).
pub mod core;
/// Instruction set (decode, instruction fields, RV32I/M constants, disassembler).
pub mod isa;
/// Binary image loader.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The fault taxonomy; every fault is terminal for a run.
pub use crate::common::Fault;
/// Main CPU type; owns the register file, memory, and program counter.
pub use crate::core::Cpu;
/// Run outcome (running, halted, or faulted).
pub use crate::core::State;
