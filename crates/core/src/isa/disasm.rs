//! Instruction Disassembler for RV32IM.
//!
//! Converts a decoded instruction into a human-readable mnemonic string for
//! debug tracing, logging, and test diagnostics.

use crate::isa::abi::REG_NAMES;
use crate::isa::instruction::{Instr, Op};

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Renders a decoded instruction as a mnemonic string.
///
/// Returns text like `"addi a0, zero, 10"` or `"sw a1, 8(sp)"`. Register
/// operands use ABI names; branch and jump offsets are shown as signed
/// byte offsets relative to the instruction.
pub fn disassemble(instr: &Instr) -> String {
    let rd = xreg(instr.rd);
    let rs1 = xreg(instr.rs1);
    let rs2 = xreg(instr.rs2);
    let imm = instr.imm;

    match instr.op {
        Op::Lb | Op::Lh | Op::Lw | Op::Lbu | Op::Lhu => {
            format!("{} {rd}, {imm}({rs1})", load_mnemonic(instr.op))
        }
        Op::Sb => format!("sb {rs2}, {imm}({rs1})"),
        Op::Sh => format!("sh {rs2}, {imm}({rs1})"),
        Op::Sw => format!("sw {rs2}, {imm}({rs1})"),

        Op::Addi => format!("addi {rd}, {rs1}, {imm}"),
        Op::Slti => format!("slti {rd}, {rs1}, {imm}"),
        Op::Sltiu => format!("sltiu {rd}, {rs1}, {imm}"),
        Op::Xori => format!("xori {rd}, {rs1}, {imm}"),
        Op::Ori => format!("ori {rd}, {rs1}, {imm}"),
        Op::Andi => format!("andi {rd}, {rs1}, {imm}"),
        Op::Slli => format!("slli {rd}, {rs1}, {}", imm & 0x1F),
        Op::Srli => format!("srli {rd}, {rs1}, {}", imm & 0x1F),
        Op::Srai => format!("srai {rd}, {rs1}, {}", imm & 0x1F),

        Op::Lui => format!("lui {rd}, {:#x}", (imm as u32) >> 12),
        Op::Auipc => format!("auipc {rd}, {:#x}", (imm as u32) >> 12),

        Op::Add | Op::Sub | Op::Sll | Op::Slt | Op::Sltu | Op::Xor | Op::Srl | Op::Sra
        | Op::Or | Op::And | Op::Mul | Op::Mulh | Op::Mulhsu | Op::Mulhu | Op::Div | Op::Divu
        | Op::Rem | Op::Remu => {
            format!("{} {rd}, {rs1}, {rs2}", reg_mnemonic(instr.op))
        }

        Op::Beq => format!("beq {rs1}, {rs2}, {imm}"),
        Op::Bne => format!("bne {rs1}, {rs2}, {imm}"),
        Op::Blt => format!("blt {rs1}, {rs2}, {imm}"),
        Op::Bge => format!("bge {rs1}, {rs2}, {imm}"),
        Op::Bltu => format!("bltu {rs1}, {rs2}, {imm}"),
        Op::Bgeu => format!("bgeu {rs1}, {rs2}, {imm}"),

        Op::Jal => format!("jal {rd}, {imm}"),
        Op::Jalr => format!("jalr {rd}, {imm}({rs1})"),
    }
}

/// Mnemonic for a load operation.
fn load_mnemonic(op: Op) -> &'static str {
    match op {
        Op::Lb => "lb",
        Op::Lh => "lh",
        Op::Lw => "lw",
        Op::Lbu => "lbu",
        _ => "lhu",
    }
}

/// Mnemonic for a register-register operation.
fn reg_mnemonic(op: Op) -> &'static str {
    match op {
        Op::Add => "add",
        Op::Sub => "sub",
        Op::Sll => "sll",
        Op::Slt => "slt",
        Op::Sltu => "sltu",
        Op::Xor => "xor",
        Op::Srl => "srl",
        Op::Sra => "sra",
        Op::Or => "or",
        Op::And => "and",
        Op::Mul => "mul",
        Op::Mulh => "mulh",
        Op::Mulhsu => "mulhsu",
        Op::Mulhu => "mulhu",
        Op::Div => "div",
        Op::Divu => "divu",
        Op::Rem => "rem",
        _ => "remu",
    }
}
