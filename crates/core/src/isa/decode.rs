//! RISC-V Instruction Decoder.
//!
//! This module decodes 32-bit RV32IM instruction encodings into the
//! structured [`Instr`] form. It extracts the fixed fields, reconstructs the
//! format-dependent immediate (sign-extending where the format calls for
//! it), and selects the exact [`Op`] for the `(opcode, funct3, funct7)`
//! triple. Encodings that select no operation are rejected here with
//! [`Fault::InvalidOp`], so the execution engine's match is exhaustive over
//! valid operations only.

use crate::common::Fault;
use crate::isa::instruction::{Instr, InstructionBits, Op};
use crate::isa::rv32i::{funct3, funct7, opcodes};
use crate::isa::rv32m::{funct3 as m_funct3, opcodes as m_opcodes};

/// Total width of an RV32 instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Decodes a 32-bit instruction word.
///
/// # Errors
///
/// Returns [`Fault::InvalidOp`] carrying the full `(opcode, funct3, funct7)`
/// triple when no operation matches the encoding.
pub fn decode(inst: u32) -> Result<Instr, Fault> {
    let opcode = inst.opcode();
    let f3 = inst.funct3();
    let f7 = inst.funct7();

    let invalid = || Fault::InvalidOp {
        opcode,
        funct3: f3,
        funct7: f7,
    };

    let (op, imm) = match opcode {
        opcodes::OP_LOAD => {
            let op = match f3 {
                funct3::LB => Op::Lb,
                funct3::LH => Op::Lh,
                funct3::LW => Op::Lw,
                funct3::LBU => Op::Lbu,
                funct3::LHU => Op::Lhu,
                _ => return Err(invalid()),
            };
            (op, decode_i_type_imm(inst))
        }

        opcodes::OP_IMM => {
            let op = match f3 {
                funct3::ADD_SUB => Op::Addi,
                funct3::SLT => Op::Slti,
                funct3::SLTU => Op::Sltiu,
                funct3::XOR => Op::Xori,
                funct3::OR => Op::Ori,
                funct3::AND => Op::Andi,
                // Shift-immediate encodings reuse funct7 to select the
                // arithmetic variant; any other funct7 is unassigned.
                funct3::SLL if f7 == funct7::BASE => Op::Slli,
                funct3::SRL_SRA if f7 == funct7::BASE => Op::Srli,
                funct3::SRL_SRA if f7 == funct7::ALT => Op::Srai,
                _ => return Err(invalid()),
            };
            (op, decode_i_type_imm(inst))
        }

        opcodes::OP_AUIPC => (Op::Auipc, decode_u_type_imm(inst)),
        opcodes::OP_LUI => (Op::Lui, decode_u_type_imm(inst)),

        opcodes::OP_STORE => {
            let op = match f3 {
                funct3::SB => Op::Sb,
                funct3::SH => Op::Sh,
                funct3::SW => Op::Sw,
                _ => return Err(invalid()),
            };
            (op, decode_s_type_imm(inst))
        }

        opcodes::OP_REG => {
            let op = match (f3, f7) {
                (funct3::ADD_SUB, funct7::BASE) => Op::Add,
                (funct3::ADD_SUB, funct7::ALT) => Op::Sub,
                (funct3::SLL, funct7::BASE) => Op::Sll,
                (funct3::SLT, funct7::BASE) => Op::Slt,
                (funct3::SLTU, funct7::BASE) => Op::Sltu,
                (funct3::XOR, funct7::BASE) => Op::Xor,
                (funct3::SRL_SRA, funct7::BASE) => Op::Srl,
                (funct3::SRL_SRA, funct7::ALT) => Op::Sra,
                (funct3::OR, funct7::BASE) => Op::Or,
                (funct3::AND, funct7::BASE) => Op::And,
                (m_funct3::MUL, m_opcodes::M_EXTENSION) => Op::Mul,
                (m_funct3::MULH, m_opcodes::M_EXTENSION) => Op::Mulh,
                (m_funct3::MULHSU, m_opcodes::M_EXTENSION) => Op::Mulhsu,
                (m_funct3::MULHU, m_opcodes::M_EXTENSION) => Op::Mulhu,
                (m_funct3::DIV, m_opcodes::M_EXTENSION) => Op::Div,
                (m_funct3::DIVU, m_opcodes::M_EXTENSION) => Op::Divu,
                (m_funct3::REM, m_opcodes::M_EXTENSION) => Op::Rem,
                (m_funct3::REMU, m_opcodes::M_EXTENSION) => Op::Remu,
                _ => return Err(invalid()),
            };
            (op, 0)
        }

        opcodes::OP_BRANCH => {
            let op = match f3 {
                funct3::BEQ => Op::Beq,
                funct3::BNE => Op::Bne,
                funct3::BLT => Op::Blt,
                funct3::BGE => Op::Bge,
                funct3::BLTU => Op::Bltu,
                funct3::BGEU => Op::Bgeu,
                _ => return Err(invalid()),
            };
            (op, decode_b_type_imm(inst))
        }

        opcodes::OP_JALR => {
            if f3 != funct3::JALR {
                return Err(invalid());
            }
            (Op::Jalr, decode_i_type_imm(inst))
        }

        opcodes::OP_JAL => (Op::Jal, decode_j_type_imm(inst)),

        _ => return Err(invalid()),
    };

    Ok(Instr {
        raw: inst,
        op,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm,
    })
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
/// Used for loads, JALR, and immediate arithmetic.
fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> 20
}

/// Decodes the immediate value for S-Type instructions.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
/// Used for stores.
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> 7) & 0x1F;
    let high = (inst >> 25) & 0x7F;
    sign_extend((high << 5) | low, 12)
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
/// Used for conditional branches; the immediate is an even offset.
fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> 7) & 1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bit_12 = (inst >> 31) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, 13)
}

/// Decodes the immediate value for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`.
/// Used for LUI and AUIPC; the low 12 bits are zero.
fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & 0xFFFF_F000) as i32
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
/// Used for JAL; the immediate is an even offset.
fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = (inst >> 31) & 1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, 21)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// The extracted bit pattern is shifted to the top of the word and
/// arithmetic-shifted back down, which preserves exact two's-complement
/// semantics for all edge values (0x800 in a 12-bit field yields -2048).
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
