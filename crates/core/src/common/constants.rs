//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Register Constants:** Native register width and register-file sizes.
//! 2. **Instruction Constants:** Instruction size and shift-amount masking.
//! 3. **Memory Constants:** Default and embedded-mode memory ceilings.

/// Native integer register width in bits.
pub const XLEN: u32 = 32;

/// Size of an RV32 instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers in the standard (RV32I) register file.
pub const REG_COUNT: usize = 32;

/// Number of general-purpose registers in the embedded (RV32E) register file.
pub const REG_COUNT_EMBEDDED: usize = 16;

/// Mask for extracting a shift amount from an immediate or register operand.
///
/// RV32 shift amounts are the low 5 bits; higher bits are ignored.
pub const SHAMT_MASK: u32 = 0x1F;

/// Default memory ceiling in bytes (2 GiB address space).
///
/// Accesses at or beyond this address fault with `InvalidMemory`.
pub const DEFAULT_MEMORY_CEILING: u64 = 0x8000_0000;

/// Memory ceiling in embedded mode (64 KiB).
pub const EMBEDDED_MEMORY_CEILING: u64 = 0x1_0000;
