//! CPU core.
//!
//! This module owns the architectural state and the control loop:
//! 1. **State:** Register file, memory, program counter, and program image.
//! 2. **Control Loop:** Fetch, decode, execute, zero-register re-enforcement,
//!    PC advance and validation, and loop termination.
//! 3. **Outcome Reporting:** A [`State`] machine distinguishing a normal
//!    halt from each fault kind, queryable after the run together with the
//!    final register and memory contents.

/// Execution engine (one exhaustive match over decoded operations).
mod exec;
/// General-purpose register file.
pub mod gpr;
/// Byte-addressable memory.
pub mod memory;

use crate::common::Fault;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::config::Config;
use crate::isa::{decode, disasm};

pub use gpr::Gpr;
pub use memory::Memory;

/// Run state of the CPU.
///
/// `Running` is the only non-terminal state; the control loop never leaves
/// `Halted` or `Faulted`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// The next call to [`Cpu::step`] will execute an instruction.
    Running,
    /// The PC ran off the end of the program image; a normal end.
    Halted,
    /// An instruction faulted; the payload names the fault.
    Faulted(Fault),
}

/// The software CPU: register file, memory, program counter, and the
/// loaded program image.
///
/// Construct one per run; the register file and memory are owned
/// exclusively for the run's duration and remain queryable after it ends,
/// whether it halted or faulted.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Data memory.
    pub mem: Memory,
    /// Program counter; always a multiple of 4 while running.
    pub pc: u32,
    program: Vec<u8>,
    state: State,
}

impl Cpu {
    /// Creates a CPU with the given configuration and program image.
    ///
    /// Registers and memory start zeroed; the PC starts at 0. The image's
    /// length is the end boundary for the fetch loop.
    pub fn new(config: &Config, program: Vec<u8>) -> Self {
        Self {
            regs: Gpr::new(config.register_count()),
            mem: Memory::new(config.memory_ceiling()),
            pc: 0,
            program,
            state: State::Running,
        }
    }

    /// Current run state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Length of the loaded program image in bytes.
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// Fetches the instruction word at the PC, little-endian.
    ///
    /// Returns `None` when fewer than 4 bytes remain at the PC, which ends
    /// the run; a truncated trailing word counts as the end of the image.
    fn fetch(&self) -> Option<u32> {
        let start = self.pc as usize;
        let bytes = self.program.get(start..start + INSTRUCTION_SIZE as usize)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Executes one instruction.
    ///
    /// A full step is: fetch at PC, decode, execute, force `x0` back to
    /// zero, advance the PC by 4 unless the instruction moved it, then
    /// validate the PC (multiple of 4, else `InvalidJump`) and halt once it
    /// reaches the end of the image. In a terminal state this is a no-op.
    ///
    /// The returned state is terminal (`Halted` or `Faulted`) when the run
    /// is over. Callers imposing an instruction budget can drive this
    /// directly instead of [`run`](Self::run).
    pub fn step(&mut self) -> &State {
        if self.state != State::Running {
            return &self.state;
        }

        let Some(word) = self.fetch() else {
            tracing::debug!(pc = self.pc, "halted: end of program image");
            self.state = State::Halted;
            return &self.state;
        };

        let old_pc = self.pc;
        let result = decode::decode(word).and_then(|instr| {
            tracing::trace!(pc = old_pc, "{}", disasm::disassemble(&instr));
            self.execute(&instr)
        });

        if let Err(fault) = result {
            tracing::debug!(pc = old_pc, %fault, "faulted");
            self.state = State::Faulted(fault);
            return &self.state;
        }

        // An instruction may have named x0 as its destination.
        self.regs.reset_zero();

        if self.pc == old_pc {
            self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
        }

        if self.pc % INSTRUCTION_SIZE != 0 {
            let fault = Fault::InvalidJump { pc: self.pc };
            tracing::debug!(pc = self.pc, %fault, "faulted");
            self.state = State::Faulted(fault);
            return &self.state;
        }

        if self.pc as usize >= self.program.len() {
            tracing::debug!(pc = self.pc, "halted: end of program image");
            self.state = State::Halted;
        }

        &self.state
    }

    /// Runs until the CPU halts or faults.
    ///
    /// # Errors
    ///
    /// Returns the fault that ended the run; `Ok(())` means a normal halt.
    /// The final state stays queryable through [`state`](Self::state),
    /// [`regs`](Self::regs), and [`mem`](Self::mem) either way.
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.state == State::Running {
            let _ = self.step();
        }
        match &self.state {
            State::Faulted(fault) => Err(fault.clone()),
            _ => Ok(()),
        }
    }
}
