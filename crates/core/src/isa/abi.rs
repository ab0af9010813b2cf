//! RISC-V Application Binary Interface (ABI) register constants.
//!
//! Defines the register indices the simulator refers to by role rather
//! than by number.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;

/// ABI register names for x0-x31, indexed by register number.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];
