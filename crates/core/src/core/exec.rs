//! Execution Engine.
//!
//! One exhaustive match over the decoded [`Op`]: each arm reads its
//! operands, performs the operation, and commits the result to the register
//! file, memory, or PC. The decoder has already rejected unrecognized
//! encodings, so every reachable arm is a defined operation.
//!
//! Arithmetic is modular: ADD/SUB/MUL wrap silently at 32 bits, matching
//! fixed-width register semantics. Division edge cases follow the RISC-V
//! M-extension convention: division by zero yields all-ones for DIV/DIVU
//! and the dividend for REM/REMU, and `i32::MIN / -1` yields `i32::MIN`
//! for DIV and 0 for REM. None of these fault.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::{INSTRUCTION_SIZE, SHAMT_MASK};
use crate::isa::instruction::{Instr, Op};

impl Cpu {
    /// Computes a load/store effective address: `rs1 + immediate`, modulo
    /// the register width.
    fn effective_addr(&self, rs1: usize, imm: i32) -> Result<u32, Fault> {
        Ok(self.regs.read(rs1)?.wrapping_add(imm as u32))
    }

    /// Executes one decoded instruction against the architectural state.
    ///
    /// Branches and jumps set the PC directly; the control loop advances it
    /// by 4 only when this leaves it untouched.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidRegister` from operand access and `InvalidMemory`
    /// from loads and stores. Side effects committed before the fault stand.
    pub(crate) fn execute(&mut self, instr: &Instr) -> Result<(), Fault> {
        let &Instr {
            op,
            rd,
            rs1,
            rs2,
            imm,
            ..
        } = instr;

        match op {
            // ── Loads ─────────────────────────────────────
            Op::Lb => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.mem.read_u8(addr)? as i8;
                self.regs.write(rd, val as i32 as u32)?;
            }
            Op::Lh => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.mem.read_u16(addr)? as i16;
                self.regs.write(rd, val as i32 as u32)?;
            }
            Op::Lw => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.mem.read_u32(addr)?;
                self.regs.write(rd, val)?;
            }
            Op::Lbu => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.mem.read_u8(addr)?;
                self.regs.write(rd, u32::from(val))?;
            }
            Op::Lhu => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.mem.read_u16(addr)?;
                self.regs.write(rd, u32::from(val))?;
            }

            // ── Stores ────────────────────────────────────
            Op::Sb => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.regs.read(rs2)?;
                self.mem.write_u8(addr, val as u8)?;
            }
            Op::Sh => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.regs.read(rs2)?;
                self.mem.write_u16(addr, val as u16)?;
            }
            Op::Sw => {
                let addr = self.effective_addr(rs1, imm)?;
                let val = self.regs.read(rs2)?;
                self.mem.write_u32(addr, val)?;
            }

            // ── Register-immediate ALU ────────────────────
            Op::Addi => {
                let a = self.regs.read(rs1)?;
                self.regs.write(rd, a.wrapping_add(imm as u32))?;
            }
            Op::Slti => {
                let a = self.regs.read(rs1)? as i32;
                self.regs.write(rd, u32::from(a < imm))?;
            }
            Op::Sltiu => {
                // The immediate is sign-extended first, then compared unsigned.
                let a = self.regs.read(rs1)?;
                self.regs.write(rd, u32::from(a < imm as u32))?;
            }
            Op::Xori => {
                let a = self.regs.read(rs1)?;
                self.regs.write(rd, a ^ imm as u32)?;
            }
            Op::Ori => {
                let a = self.regs.read(rs1)?;
                self.regs.write(rd, a | imm as u32)?;
            }
            Op::Andi => {
                let a = self.regs.read(rs1)?;
                self.regs.write(rd, a & imm as u32)?;
            }
            Op::Slli => {
                let a = self.regs.read(rs1)?;
                self.regs.write(rd, a << (imm as u32 & SHAMT_MASK))?;
            }
            Op::Srli => {
                let a = self.regs.read(rs1)?;
                self.regs.write(rd, a >> (imm as u32 & SHAMT_MASK))?;
            }
            Op::Srai => {
                let a = self.regs.read(rs1)? as i32;
                self.regs.write(rd, (a >> (imm as u32 & SHAMT_MASK)) as u32)?;
            }

            // ── Upper immediate ───────────────────────────
            Op::Lui => {
                self.regs.write(rd, imm as u32)?;
            }
            Op::Auipc => {
                self.regs.write(rd, self.pc.wrapping_add(imm as u32))?;
            }

            // ── Register-register ALU ─────────────────────
            Op::Add => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a.wrapping_add(b))?;
            }
            Op::Sub => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a.wrapping_sub(b))?;
            }
            Op::Sll => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a << (b & SHAMT_MASK))?;
            }
            Op::Slt => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, u32::from((a as i32) < (b as i32)))?;
            }
            Op::Sltu => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, u32::from(a < b))?;
            }
            Op::Xor => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a ^ b)?;
            }
            Op::Srl => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a >> (b & SHAMT_MASK))?;
            }
            Op::Sra => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, ((a as i32) >> (b & SHAMT_MASK)) as u32)?;
            }
            Op::Or => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a | b)?;
            }
            Op::And => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a & b)?;
            }

            // ── Multiply/divide ───────────────────────────
            Op::Mul => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.regs.write(rd, a.wrapping_mul(b))?;
            }
            Op::Mulh => {
                let (a, b) = self.operands(rs1, rs2)?;
                // Both operands signed: sign-extend through i64 so the
                // product keeps negative values.
                let product = i64::from(a as i32) * i64::from(b as i32);
                self.regs.write(rd, (product >> 32) as u32)?;
            }
            Op::Mulhsu => {
                let (a, b) = self.operands(rs1, rs2)?;
                // Operand a signed, b unsigned.
                let product = i64::from(a as i32) * i64::from(b);
                self.regs.write(rd, (product >> 32) as u32)?;
            }
            Op::Mulhu => {
                let (a, b) = self.operands(rs1, rs2)?;
                let product = u64::from(a) * u64::from(b);
                self.regs.write(rd, (product >> 32) as u32)?;
            }
            Op::Div => {
                let (a, b) = self.operands(rs1, rs2)?;
                let val = if b == 0 {
                    u32::MAX
                } else {
                    // wrapping_div pins i32::MIN / -1 to i32::MIN.
                    (a as i32).wrapping_div(b as i32) as u32
                };
                self.regs.write(rd, val)?;
            }
            Op::Divu => {
                let (a, b) = self.operands(rs1, rs2)?;
                let val = if b == 0 { u32::MAX } else { a / b };
                self.regs.write(rd, val)?;
            }
            Op::Rem => {
                let (a, b) = self.operands(rs1, rs2)?;
                let val = if b == 0 {
                    a
                } else {
                    // wrapping_rem pins i32::MIN % -1 to 0.
                    (a as i32).wrapping_rem(b as i32) as u32
                };
                self.regs.write(rd, val)?;
            }
            Op::Remu => {
                let (a, b) = self.operands(rs1, rs2)?;
                let val = if b == 0 { a } else { a % b };
                self.regs.write(rd, val)?;
            }

            // ── Branches ──────────────────────────────────
            Op::Beq => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.branch(a == b, imm);
            }
            Op::Bne => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.branch(a != b, imm);
            }
            Op::Blt => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.branch((a as i32) < (b as i32), imm);
            }
            Op::Bge => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.branch((a as i32) >= (b as i32), imm);
            }
            Op::Bltu => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.branch(a < b, imm);
            }
            Op::Bgeu => {
                let (a, b) = self.operands(rs1, rs2)?;
                self.branch(a >= b, imm);
            }

            // ── Jumps ─────────────────────────────────────
            Op::Jal => {
                self.regs.write(rd, self.pc.wrapping_add(INSTRUCTION_SIZE))?;
                self.pc = self.pc.wrapping_add(imm as u32);
            }
            Op::Jalr => {
                // Target from the old rs1: the link write may clobber it.
                let target = self.regs.read(rs1)?.wrapping_add(imm as u32) & !1;
                self.regs.write(rd, self.pc.wrapping_add(INSTRUCTION_SIZE))?;
                self.pc = target;
            }
        }

        Ok(())
    }

    /// Reads both source operands.
    fn operands(&self, rs1: usize, rs2: usize) -> Result<(u32, u32), Fault> {
        Ok((self.regs.read(rs1)?, self.regs.read(rs2)?))
    }

    /// Applies a branch: on a taken condition the PC moves by the B-type
    /// offset, otherwise it is left for the control loop's +4 advance.
    fn branch(&mut self, taken: bool, imm: i32) {
        if taken {
            self.pc = self.pc.wrapping_add(imm as u32);
        }
    }
}
