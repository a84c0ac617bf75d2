//! Branch Resolution Unit (BRU).
//!
//! Evaluates relative branch conditions in the Execute stage. The outcome travels to the
//! Store stage, which applies it to the program counter and flushes the pipeline when the
//! branch is taken.

use crate::isa::instruction::{BranchCond, Instruction};

/// Outcome of a relative branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Condition false; fall through to the next instruction.
    NotTaken,
    /// Condition true; the payload is the byte offset from the branch's own address.
    Taken(i32),
}

impl BranchOutcome {
    /// Whether the branch redirects the program counter.
    #[inline]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken(_))
    }
}

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Compares two signed operands.
    #[inline]
    pub const fn condition(cond: BranchCond, a: i32, b: i32) -> bool {
        match cond {
            BranchCond::Less => a < b,
            BranchCond::LessOrEqual => a <= b,
            BranchCond::Equal => a == b,
            BranchCond::NotEqual => a != b,
            BranchCond::Greater => a > b,
            BranchCond::GreaterOrEqual => a >= b,
        }
    }

    /// Resolves a relative branch.
    ///
    /// # Arguments
    ///
    /// * `cond`   - Comparison to apply.
    /// * `a`, `b` - Forwarded values of the two compared registers.
    /// * `offset` - Encoded half-word offset.
    ///
    /// # Returns
    ///
    /// `Taken` with the doubled byte offset if the condition holds, otherwise `NotTaken`.
    pub const fn resolve(cond: BranchCond, a: i32, b: i32, offset: i16) -> BranchOutcome {
        if Self::condition(cond, a, b) {
            BranchOutcome::Taken(Instruction::branch_offset_bytes(offset))
        } else {
            BranchOutcome::NotTaken
        }
    }
}
