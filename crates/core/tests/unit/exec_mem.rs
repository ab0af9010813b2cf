//! # Load/Store Execution Tests
//!
//! End-to-end tests for effective-address computation, little-endian
//! store/load round trips, load extension behavior, and memory faults
//! raised mid-program.

use pretty_assertions::assert_eq;
use rv32sim_core::{Fault, State};

use crate::common::{addi, i_type, li, reg, run, s_type};

const OP_LOAD: u32 = 0b0000011;
const OP_STORE: u32 = 0b0100011;

const LB: u32 = 0b000;
const LH: u32 = 0b001;
const LW: u32 = 0b010;
const LBU: u32 = 0b100;
const LHU: u32 = 0b101;
const SB: u32 = 0b000;
const SH: u32 = 0b001;
const SW: u32 = 0b010;

/// `load rd, offset(rs1)`
fn load(funct3: u32, rd: u32, rs1: u32, offset: i32) -> u32 {
    i_type(OP_LOAD, rd, funct3, rs1, offset)
}

/// `store rs2, offset(rs1)`
fn store(funct3: u32, rs2: u32, rs1: u32, offset: i32) -> u32 {
    s_type(OP_STORE, funct3, rs1, rs2, offset)
}

#[test]
fn test_sw_lw_roundtrip() {
    let mut program = Vec::new();
    program.extend(li(1, 0xDEAD_BEEF));
    program.push(addi(2, 0, 0x100));
    program.push(store(SW, 1, 2, 0));
    program.push(load(LW, 3, 2, 0));
    let cpu = run(&program);
    assert_eq!(*cpu.state(), State::Halted);
    assert_eq!(reg(&cpu, 3), 0xDEAD_BEEF);
    assert_eq!(cpu.mem.read_u32(0x100), Ok(0xDEAD_BEEF));
}

#[test]
fn test_store_uses_effective_address() {
    // Base 0x200 with offset -4 lands at 0x1FC.
    let mut program = Vec::new();
    program.extend(li(1, 0xAB));
    program.push(addi(2, 0, 0x200));
    program.push(store(SB, 1, 2, -4));
    let cpu = run(&program);
    assert_eq!(cpu.mem.read_u8(0x1FC), Ok(0xAB));
}

#[test]
fn test_sb_writes_low_byte_only() {
    let mut program = Vec::new();
    program.extend(li(1, 0x1234_56FF));
    program.push(addi(2, 0, 0x80));
    program.push(store(SB, 1, 2, 0));
    let cpu = run(&program);
    assert_eq!(cpu.mem.read_u8(0x80), Ok(0xFF));
    assert_eq!(cpu.mem.read_u8(0x81), Ok(0));
}

#[test]
fn test_sh_little_endian() {
    let mut program = Vec::new();
    program.extend(li(1, 0xCAFE));
    program.push(addi(2, 0, 0x40));
    program.push(store(SH, 1, 2, 0));
    let cpu = run(&program);
    assert_eq!(cpu.mem.read_u8(0x40), Ok(0xFE));
    assert_eq!(cpu.mem.read_u8(0x41), Ok(0xCA));
}

#[test]
fn test_lb_sign_extends() {
    let mut program = Vec::new();
    program.extend(li(1, 0x80));
    program.push(addi(2, 0, 0x60));
    program.push(store(SB, 1, 2, 0));
    program.push(load(LB, 3, 2, 0));
    program.push(load(LBU, 4, 2, 0));
    let cpu = run(&program);
    assert_eq!(reg(&cpu, 3), 0xFFFF_FF80); // sign-extended
    assert_eq!(reg(&cpu, 4), 0x80); // zero-extended
}

#[test]
fn test_lh_sign_extends() {
    let mut program = Vec::new();
    program.extend(li(1, 0x8001));
    program.push(addi(2, 0, 0x60));
    program.push(store(SH, 1, 2, 0));
    program.push(load(LH, 3, 2, 0));
    program.push(load(LHU, 4, 2, 0));
    let cpu = run(&program);
    assert_eq!(reg(&cpu, 3), 0xFFFF_8001);
    assert_eq!(reg(&cpu, 4), 0x8001);
}

#[test]
fn test_load_of_unwritten_memory_is_zero() {
    let cpu = run(&[addi(2, 0, 0x700), load(LW, 3, 2, 0), load(LB, 4, 2, 2)]);
    assert_eq!(*cpu.state(), State::Halted);
    assert_eq!(reg(&cpu, 3), 0);
    assert_eq!(reg(&cpu, 4), 0);
}

#[test]
fn test_load_into_x0_is_discarded() {
    let mut program = Vec::new();
    program.extend(li(1, 0x5555_5555));
    program.push(addi(2, 0, 0x40));
    program.push(store(SW, 1, 2, 0));
    program.push(load(LW, 0, 2, 0));
    let cpu = run(&program);
    assert_eq!(*cpu.state(), State::Halted);
    assert_eq!(reg(&cpu, 0), 0);
}

#[test]
fn test_misaligned_halfword_load_faults() {
    let cpu = run(&[addi(2, 0, 0x41), load(LH, 3, 2, 0)]);
    assert_eq!(
        *cpu.state(),
        State::Faulted(Fault::InvalidMemory {
            addr: 0x41,
            width: 16,
            alignment: 2,
        })
    );
}

#[test]
fn test_misaligned_word_store_faults() {
    let cpu = run(&[addi(2, 0, 0x42), store(SW, 1, 2, 0)]);
    assert_eq!(
        *cpu.state(),
        State::Faulted(Fault::InvalidMemory {
            addr: 0x42,
            width: 32,
            alignment: 4,
        })
    );
}

#[test]
fn test_misalignment_comes_from_effective_address() {
    // Aligned base, odd offset.
    let cpu = run(&[addi(2, 0, 0x40), load(LH, 3, 2, 1)]);
    assert_eq!(
        *cpu.state(),
        State::Faulted(Fault::InvalidMemory {
            addr: 0x41,
            width: 16,
            alignment: 2,
        })
    );
}

#[test]
fn test_store_beyond_ceiling_faults() {
    // Default ceiling is 0x8000_0000; li(1, 0x8000_0000) then sw there.
    let mut program = Vec::new();
    program.extend(li(1, 0x8000_0000));
    program.push(store(SW, 2, 1, 0));
    let cpu = run(&program);
    assert_eq!(
        *cpu.state(),
        State::Faulted(Fault::InvalidMemory {
            addr: 0x8000_0000,
            width: 32,
            alignment: 4,
        })
    );
}

#[test]
fn test_fault_preserves_earlier_side_effects() {
    // The store to 0x40 lands before the faulting load; it is not rolled back.
    let mut program = Vec::new();
    program.extend(li(1, 77));
    program.push(addi(2, 0, 0x40));
    program.push(store(SW, 1, 2, 0));
    program.push(load(LW, 3, 2, 2)); // misaligned
    let cpu = run(&program);
    assert!(matches!(cpu.state(), State::Faulted(_)));
    assert_eq!(cpu.mem.read_u32(0x40), Ok(77));
}
