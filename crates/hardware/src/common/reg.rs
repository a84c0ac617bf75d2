//! Register File.
//!
//! This module provides the `RegisterFile` struct, the architectural register state of the
//! machine. It provides:
//! 1. **Storage:** Sixteen signed 32-bit registers, `r0`-`r15`.
//! 2. **Stack Pointer:** Register `r15` holds a byte offset into memory; it is an ordinary
//!    writable register with a helper for the wrapping adjustment used by stack instructions.

use crate::common::constants::{INITIAL_SP, MEMORY_SIZE, NUM_REGISTERS, REG_SP};

/// Architectural register file.
///
/// No register is hardwired; every index is readable and writable by the store stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed except the stack pointer.
    ///
    /// # Arguments
    ///
    /// * `sp` - Initial stack pointer value.
    pub fn new(sp: i32) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP] = sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// Register indices come from 4-bit instruction fields, so only the low nibble of `idx`
    /// is significant.
    #[inline]
    pub fn read(&self, idx: usize) -> i32 {
        self.regs[idx & 0xF]
    }

    /// Writes a register.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx & 0xF] = val;
    }

    /// Current stack pointer.
    #[inline]
    pub fn sp(&self) -> i32 {
        self.regs[REG_SP]
    }

    /// Moves the stack pointer by `delta` bytes and returns the new value.
    ///
    /// Overflow and underflow wrap around the memory bound instead of failing: a result
    /// above the top of memory has the memory size subtracted once, a negative result has
    /// it added once. A stack pointer that an ordinary register write left far outside
    /// memory is therefore not brought back into range.
    pub fn adjust_sp(&mut self, delta: i32) -> i32 {
        let size = MEMORY_SIZE as i32;
        let mut sp = self.regs[REG_SP].wrapping_add(delta);
        if sp > size {
            sp -= size;
        }
        if sp < 0 {
            sp += size;
        }
        self.regs[REG_SP] = sp;
        sp
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(INITIAL_SP)
    }
}
