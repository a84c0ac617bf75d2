//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the four pipeline stages:
//! Fetch → Decode → Execute → Store.
//!
//! 1. **Single-slot Channels:** Each latch holds at most one entry. The producer moves an
//!    entry in with `put`, the consumer moves it out with `take`, so an entry is owned by
//!    exactly one stage at any time.
//! 2. **Tagged Payloads:** Each entry carries its instruction's address together with
//!    the data the next stage needs (raw bytes, resolved operands, or the computed result).
//!    A fetch that could not be performed travels as a `FetchFault` in place of the
//!    instruction and becomes fatal only if it reaches Execute.
//! 3. **Flush:** Discarding a latch drops whatever it holds; nothing of a squashed entry
//!    survives into the next cycle.

use crate::common::constants::FETCH_WINDOW;
use crate::common::error::SimError;
use crate::core::units::bru::BranchOutcome;
use crate::isa::instruction::{Instruction, InstructionWindow};

/// A single-slot channel between two adjacent stages.
///
/// The one-cycle lag of each handoff comes from the order the driver runs the stages in,
/// not from the latch: later stages run first, so a consumer always sees the entry its
/// producer wrote in the previous cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latch<T> {
    slot: Option<T>,
}

impl<T> Latch<T> {
    /// Creates an empty latch.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Whether the latch holds an entry not yet consumed.
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.slot.is_some()
    }

    /// Hands an entry to the next stage, replacing anything unconsumed.
    #[inline]
    pub fn put(&mut self, entry: T) {
        self.slot = Some(entry);
    }

    /// Consumes the pending entry, if any.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Borrows the pending entry without consuming it.
    #[inline]
    pub const fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Discards the pending entry.
    ///
    /// # Returns
    ///
    /// `true` if an entry was dropped.
    #[inline]
    pub fn flush(&mut self) -> bool {
        self.slot.take().is_some()
    }
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Why the Fetch stage could not read an instruction window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchFault {
    /// The window would reach the stack pointer.
    StackCollision {
        /// Stack pointer at the time of the fetch.
        sp: i32,
    },
    /// The window runs past the end of memory.
    OutOfRange,
}

impl FetchFault {
    /// The fatal error this fault raises for an instruction at `pc`.
    pub const fn into_error(self, pc: u32) -> SimError {
        match self {
            Self::StackCollision { sp } => SimError::InstructionStackCollision { pc, sp },
            Self::OutOfRange => SimError::MemoryOutOfBounds {
                addr: pc as i64,
                len: FETCH_WINDOW,
            },
        }
    }
}

/// Entry in the IF/ID latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Address the window was fetched from.
    pub pc: u32,
    /// Four bytes read at `pc`, or why they could not be read.
    pub fetched: Result<InstructionWindow, FetchFault>,
}

/// Entry in the ID/EX latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// Decoded instruction, or the fault its fetch produced.
    pub inst: Result<Instruction, FetchFault>,
    /// Value read for the first operand slot (0 if unused).
    pub op1: i32,
    /// Value read for the second operand slot (0 if unused).
    pub op2: i32,
}

/// Work the Store stage performs for an instruction, computed by the Execute stage.
///
/// Each variant carries exactly what its commit needs, so the Store stage matches on it
/// without re-reading operands (the one exception is a memory store, whose data register
/// is read at commit time).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExResult {
    /// Nothing to commit beyond advancing the program counter (interrupt, unknown).
    Advance,
    /// Write a register (ALU result, loaded word, move immediate).
    WriteReg {
        /// Destination register.
        reg: usize,
        /// Value to write.
        value: i32,
    },
    /// Write the current value of `src` to memory at `addr`.
    StoreWord {
        /// Effective address.
        addr: i64,
        /// Register holding the data.
        src: usize,
    },
    /// Relative branch outcome.
    Branch(BranchOutcome),
    /// Call or jump to an absolute byte address.
    Jump {
        /// Target address in bytes.
        target: i64,
    },
    /// Return to the address popped from the stack.
    Return {
        /// Target address in bytes.
        target: i64,
    },
    /// Push a value.
    Push {
        /// Value to push.
        value: i32,
    },
    /// Pop a value into a register.
    Pop {
        /// Destination register.
        reg: usize,
        /// Word read from the top of the stack.
        value: i32,
    },
}

/// Entry in the EX/ST latch (Execute to Store stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExStEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Result to commit.
    pub result: ExResult,
}

/// IF/ID latch.
pub type IfId = Latch<IfIdEntry>;

/// ID/EX latch.
pub type IdEx = Latch<IdExEntry>;

/// EX/ST latch.
pub type ExSt = Latch<ExStEntry>;
