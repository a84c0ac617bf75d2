//! Main Memory.
//!
//! This module implements the flat byte-addressable memory of the SIA machine. It provides:
//! 1. **Storage:** A fixed 1000-byte array holding code (from offset 0), data and the stack
//!    (growing down from the top).
//! 2. **Word Access:** Big-endian 32-bit reads and writes, the layout registers use in memory.
//! 3. **Range Checking:** Every access is checked against the memory bound; an access that
//!    does not fit is a fatal `MemoryOutOfBounds`, never wrapped or truncated.

use std::ops::Range;

use crate::common::constants::{FETCH_WINDOW, MEMORY_SIZE, WORD_SIZE};
use crate::common::error::{SimError, SimResult};
use crate::isa::instruction::InstructionWindow;

/// The machine's main memory.
///
/// Addresses are taken as `i64` so computed addresses (base register plus a negative offset)
/// can be reported exactly when they fall below zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Creates a zeroed memory.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Size of memory in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; memory has a fixed non-zero size.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks that `len` bytes starting at `addr` lie inside memory.
    fn span(&self, addr: i64, len: usize) -> SimResult<Range<usize>> {
        let start = usize::try_from(addr).map_err(|_| SimError::out_of_bounds(addr, len))?;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| SimError::out_of_bounds(addr, len))?;
        Ok(start..end)
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// `MemoryOutOfBounds` if `addr` is outside memory.
    pub fn read_byte(&self, addr: i64) -> SimResult<u8> {
        let span = self.span(addr, 1)?;
        Ok(self.bytes[span.start])
    }

    /// Reads a big-endian 32-bit word.
    ///
    /// # Errors
    ///
    /// `MemoryOutOfBounds` if any of the four bytes is outside memory.
    pub fn read_word(&self, addr: i64) -> SimResult<i32> {
        let span = self.span(addr, WORD_SIZE)?;
        let mut word = [0; WORD_SIZE];
        word.copy_from_slice(&self.bytes[span]);
        Ok(i32::from_be_bytes(word))
    }

    /// Writes a big-endian 32-bit word.
    ///
    /// # Errors
    ///
    /// `MemoryOutOfBounds` if any of the four bytes is outside memory; memory is unchanged.
    pub fn write_word(&mut self, addr: i64, val: i32) -> SimResult<()> {
        let span = self.span(addr, WORD_SIZE)?;
        self.bytes[span].copy_from_slice(&val.to_be_bytes());
        Ok(())
    }

    /// Reads the fetch window at `pc`.
    ///
    /// # Errors
    ///
    /// `MemoryOutOfBounds` if the window runs past the end of memory.
    pub fn read_window(&self, pc: u32) -> SimResult<InstructionWindow> {
        let span = self.span(pc as i64, FETCH_WINDOW)?;
        let mut window = [0; FETCH_WINDOW];
        window.copy_from_slice(&self.bytes[span]);
        Ok(window)
    }

    /// Copies a program image to offset 0.
    ///
    /// # Errors
    ///
    /// `ProgramTooLarge` if the image is longer than memory; memory is unchanged.
    pub fn load(&mut self, image: &[u8]) -> SimResult<()> {
        if image.len() > self.bytes.len() {
            return Err(SimError::ProgramTooLarge {
                len: image.len(),
                capacity: self.bytes.len(),
            });
        }
        self.bytes[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Raw view of all of memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .field("nonzero_bytes", &used)
            .finish()
    }
}
