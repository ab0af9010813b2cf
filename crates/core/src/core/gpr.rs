//! General-Purpose Register File.
//!
//! This module implements the RV32 general-purpose register file:
//! 1. **Storage:** 32 registers (`x0`-`x31`), or 16 in embedded (RV32E) mode.
//! 2. **Invariant Enforcement:** Register `x0` always reads as zero. Writes
//!    to it are applied to the backing cell and reset by the control loop at
//!    the end of each step, so instructions that target it incidentally are
//!    tolerated.
//! 3. **Bounds Checking:** Indices at or beyond the configured register
//!    count fault with `InvalidRegister`.

use crate::common::Fault;
use crate::common::constants::REG_COUNT;
use crate::isa::abi::REG_ZERO;

/// General-Purpose Register file.
///
/// Storage is always 32 cells; embedded mode restricts the addressable
/// count to 16 without changing the layout. Every stored value is a `u32`,
/// so truncation to the register width is structural.
#[derive(Debug)]
pub struct Gpr {
    regs: [u32; REG_COUNT],
    count: usize,
}

impl Gpr {
    /// Creates a register file with `count` addressable registers, all zero.
    pub fn new(count: usize) -> Self {
        Self {
            regs: [0; REG_COUNT],
            count,
        }
    }

    /// Number of addressable registers (16 or 32).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reads a register.
    ///
    /// Register `x0` always yields 0 regardless of the backing cell.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidRegister`] if `idx` is at or beyond the
    /// configured register count.
    pub fn read(&self, idx: usize) -> Result<u32, Fault> {
        if idx >= self.count {
            return Err(Fault::InvalidRegister { index: idx });
        }
        Ok(if idx == REG_ZERO { 0 } else { self.regs[idx] })
    }

    /// Writes a register.
    ///
    /// A write to `x0` is applied to the backing cell; the control loop
    /// resets it after the step, and reads observe 0 in the meantime.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidRegister`] if `idx` is at or beyond the
    /// configured register count.
    pub fn write(&mut self, idx: usize, val: u32) -> Result<(), Fault> {
        if idx >= self.count {
            return Err(Fault::InvalidRegister { index: idx });
        }
        self.regs[idx] = val;
        Ok(())
    }

    /// Forces the `x0` backing cell back to zero.
    ///
    /// Called by the control loop at the end of every step.
    pub fn reset_zero(&mut self) {
        self.regs[REG_ZERO] = 0;
    }

    /// Iterates over the observed value of every addressable register.
    ///
    /// The first yielded value is always 0.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.regs[..self.count]
            .iter()
            .enumerate()
            .map(|(idx, &val)| if idx == REG_ZERO { 0 } else { val })
    }
}
