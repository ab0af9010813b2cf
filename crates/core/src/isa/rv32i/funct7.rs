//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects between alternate encodings that
//! share an opcode and funct3 (ADD vs SUB, SRL vs SRA).

/// Base encoding (ADD, SLL, SRL, and every other non-alternate R-type op).
pub const BASE: u32 = 0b0000000;

/// Alternate encoding selector (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;
