//! Byte-Addressable Memory.
//!
//! This module implements the simulator's flat data memory:
//! 1. **Storage:** A grow-on-demand byte vector; addresses never written
//!    read as zero, so memory is implicitly zero-initialized up to the
//!    ceiling without being allocated up front.
//! 2. **Access Checking:** Every access of width W bits at address A
//!    requires `A % (W/8) == 0` and `A < ceiling`. Either violation faults
//!    with `InvalidMemory`; addresses never wrap.
//! 3. **Endianness:** Multi-byte accesses are little-endian.
//!
//! The ceiling is 4-byte aligned by construction of the configuration
//! defaults, so an aligned access that starts below it never crosses it.

use crate::common::Fault;

/// Flat little-endian memory with a configurable address ceiling.
#[derive(Debug)]
pub struct Memory {
    data: Vec<u8>,
    ceiling: u64,
}

impl Memory {
    /// Creates an empty memory with the given exclusive address ceiling.
    pub fn new(ceiling: u64) -> Self {
        Self {
            data: Vec::new(),
            ceiling,
        }
    }

    /// Exclusive upper bound on addressable bytes.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Validates bounds and alignment for a `width`-bit access at `addr`.
    fn check(&self, addr: u32, width: u32) -> Result<(), Fault> {
        let alignment = width / 8;
        if u64::from(addr) >= self.ceiling || addr % alignment != 0 {
            return Err(Fault::InvalidMemory {
                addr,
                width,
                alignment,
            });
        }
        Ok(())
    }

    /// Reads the byte at `addr`, yielding 0 beyond the written extent.
    #[inline]
    fn byte(&self, addr: u32) -> u8 {
        self.data.get(addr as usize).copied().unwrap_or(0)
    }

    /// Grows the written extent to cover `end` bytes.
    fn grow_to(&mut self, end: usize) {
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
    }

    /// Reads a byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidMemory`] if `addr` is at or beyond the ceiling.
    pub fn read_u8(&self, addr: u32) -> Result<u8, Fault> {
        self.check(addr, 8)?;
        Ok(self.byte(addr))
    }

    /// Reads a little-endian halfword.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidMemory`] if `addr` is odd or beyond the ceiling.
    pub fn read_u16(&self, addr: u32) -> Result<u16, Fault> {
        self.check(addr, 16)?;
        Ok(u16::from_le_bytes([self.byte(addr), self.byte(addr + 1)]))
    }

    /// Reads a little-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidMemory`] if `addr` is not 4-byte aligned or
    /// beyond the ceiling.
    pub fn read_u32(&self, addr: u32) -> Result<u32, Fault> {
        self.check(addr, 32)?;
        Ok(u32::from_le_bytes([
            self.byte(addr),
            self.byte(addr + 1),
            self.byte(addr + 2),
            self.byte(addr + 3),
        ]))
    }

    /// Writes a byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidMemory`] if `addr` is at or beyond the ceiling.
    pub fn write_u8(&mut self, addr: u32, val: u8) -> Result<(), Fault> {
        self.check(addr, 8)?;
        self.grow_to(addr as usize + 1);
        self.data[addr as usize] = val;
        Ok(())
    }

    /// Writes a little-endian halfword.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidMemory`] if `addr` is odd or beyond the ceiling.
    pub fn write_u16(&mut self, addr: u32, val: u16) -> Result<(), Fault> {
        self.check(addr, 16)?;
        self.grow_to(addr as usize + 2);
        self.data[addr as usize..addr as usize + 2].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Writes a little-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidMemory`] if `addr` is not 4-byte aligned or
    /// beyond the ceiling.
    pub fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), Fault> {
        self.check(addr, 32)?;
        self.grow_to(addr as usize + 4);
        self.data[addr as usize..addr as usize + 4].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Number of bytes in the written extent.
    pub fn extent(&self) -> usize {
        self.data.len()
    }

    /// Iterates over the written extent as `(address, word)` pairs.
    ///
    /// Words are reconstructed little-endian; a partial trailing word is
    /// padded with zeros. Used by dump collaborators.
    pub fn words(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.data.chunks(4).enumerate().map(|(i, chunk)| {
            let mut bytes = [0u8; 4];
            bytes[..chunk.len()].copy_from_slice(chunk);
            ((i * 4) as u32, u32::from_le_bytes(bytes))
        })
    }
}
