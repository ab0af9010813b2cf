//! Fault definitions.
//!
//! This module defines the fault model for the simulator. Every fault is a
//! terminal condition for a run: the control loop transitions to
//! [`Faulted`](crate::core::State::Faulted) and never retries or recovers.
//! Each variant carries the payload a caller needs to present a diagnostic:
//! 1. **InvalidRegister:** the out-of-range register index.
//! 2. **InvalidMemory:** the offending address with the access width and required alignment.
//! 3. **InvalidJump:** the misaligned program counter.
//! 4. **InvalidOp:** the unrecognized `(opcode, funct3, funct7)` triple.

use thiserror::Error;

/// A terminal fault raised during decode or execution.
///
/// Faults are synchronous: each instruction raises at most one fault, and
/// the control loop stops at the first. Side effects committed earlier in
/// the same step are not rolled back.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A decoded register index falls outside the configured register count.
    ///
    /// Raised in embedded (RV32E) mode when an instruction names x16-x31.
    #[error("invalid register x{index}")]
    InvalidRegister {
        /// The out-of-range register index.
        index: usize,
    },

    /// A memory access is misaligned for its width or beyond the ceiling.
    ///
    /// Every access of `width` bits at address `A` requires
    /// `A % alignment == 0` and `A < ceiling`; either violation raises this.
    #[error("invalid {width}-bit access at {addr:#010x}: must be {alignment}-byte aligned and below the memory ceiling")]
    InvalidMemory {
        /// The effective address of the access.
        addr: u32,
        /// Access width in bits (8, 16, or 32).
        width: u32,
        /// Required alignment in bytes (`width / 8`).
        alignment: u32,
    },

    /// The program counter is not a multiple of 4 after a step.
    #[error("invalid jump target {pc:#010x}: not 4-byte aligned")]
    InvalidJump {
        /// The offending program counter value.
        pc: u32,
    },

    /// No execution rule matches the decoded instruction.
    #[error("unsupported op: {opcode:#x}, funct3: {funct3:#x}, funct7: {funct7:#x}")]
    InvalidOp {
        /// The 7-bit major opcode.
        opcode: u32,
        /// The 3-bit minor opcode.
        funct3: u32,
        /// The 7-bit function modifier.
        funct7: u32,
    },
}
