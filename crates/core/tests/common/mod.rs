//! Shared test infrastructure: instruction encoders and a run harness.
//!
//! The encoders construct raw 32-bit instructions from fields, one per
//! format; the mnemonic helpers below them keep test programs readable.

use rv32sim_core::{Config, Cpu};

// ──────────────────────────────────────────────────────────
// Encoding helpers (construct raw 32-bit instructions)
// ──────────────────────────────────────────────────────────

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | lo << 7
        | (opcode & 0x7F)
}

/// Encode a B-type instruction.
pub fn b_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | bits4_1 << 8
        | bit11 << 7
        | (opcode & 0x7F)
}

/// Encode a U-type instruction.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a J-type instruction.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    bit20 << 31
        | bits10_1 << 21
        | bit11 << 20
        | bits19_12 << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

// ──────────────────────────────────────────────────────────
// Mnemonic helpers for readable test programs
// ──────────────────────────────────────────────────────────

/// `addi rd, rs1, imm`
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(0b0010011, rd, 0b000, rs1, imm)
}

/// `lui rd, imm20`
pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(0b0110111, rd, imm20)
}

/// `add rd, rs1, rs2`
pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0b0110011, rd, 0b000, rs1, rs2, 0)
}

/// An R-type op against the `OP_REG` opcode with explicit funct codes.
pub fn op_reg(rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    r_type(0b0110011, rd, funct3, rs1, rs2, funct7)
}

/// An M-extension op (`funct7 == 1`).
pub fn op_m(rd: u32, funct3: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0b0110011, rd, funct3, rs1, rs2, 1)
}

/// `jal rd, offset`
pub fn jal(rd: u32, offset: i32) -> u32 {
    j_type(0b1101111, rd, offset)
}

/// `jalr rd, offset(rs1)`
pub fn jalr(rd: u32, rs1: u32, offset: i32) -> u32 {
    i_type(0b1100111, rd, 0b000, rs1, offset)
}

/// Materializes an arbitrary 32-bit constant in `rd` via `lui` + `addi`.
///
/// The upper part is rounded so the sign-extended low 12 bits cancel.
pub fn li(rd: u32, value: u32) -> [u32; 2] {
    let hi = value.wrapping_add(0x800) >> 12;
    let lo = ((value & 0xFFF) << 20) as i32 >> 20;
    [lui(rd, hi), addi(rd, rd, lo)]
}

/// An encoding no decode rule matches (all-zero word).
pub const UNDEFINED: u32 = 0;

// ──────────────────────────────────────────────────────────
// Run harness
// ──────────────────────────────────────────────────────────

/// Flattens instruction words into a little-endian program image.
pub fn image(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Builds a CPU over the given instruction words with the default config.
pub fn cpu_with(words: &[u32]) -> Cpu {
    Cpu::new(&Config::default(), image(words))
}

/// Assembles the words, runs to a terminal state, and returns the CPU for
/// inspection. Faults are left in the CPU state rather than unwrapped.
pub fn run(words: &[u32]) -> Cpu {
    let mut cpu = cpu_with(words);
    let _ = cpu.run();
    cpu
}

/// Reads a register, panicking only on indices the test got wrong.
pub fn reg(cpu: &Cpu, idx: usize) -> u32 {
    match cpu.regs.read(idx) {
        Ok(val) => val,
        Err(fault) => panic!("register x{idx} unreadable: {fault}"),
    }
}
