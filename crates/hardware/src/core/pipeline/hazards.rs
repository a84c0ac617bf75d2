//! Data Hazard Forwarding.
//!
//! This module implements the forwarding unit that keeps in-flight instructions from
//! reading stale register values. It provides:
//! 1. **Write History:** A ring of the four most recent register writes made by the Store
//!    stage, oldest overwritten first.
//! 2. **Operand Resolution:** Substituting the newest recorded value for a register in
//!    place of the value read from the register file.

use crate::common::constants::HISTORY_DEPTH;

/// One recorded register write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Register written.
    pub reg: usize,
    /// Value written.
    pub value: i32,
}

/// Ring of the most recent register writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: [Option<HistoryEntry>; HISTORY_DEPTH],
    cursor: usize,
}

impl History {
    /// Creates an empty history.
    pub const fn new() -> Self {
        Self {
            entries: [None; HISTORY_DEPTH],
            cursor: 0,
        }
    }

    /// Records a register write, overwriting the oldest entry.
    pub fn record(&mut self, reg: usize, value: i32) {
        self.cursor = (self.cursor + 1) % HISTORY_DEPTH;
        self.entries[self.cursor] = Some(HistoryEntry { reg, value });
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        (1..=HISTORY_DEPTH)
            .filter_map(move |age| self.entries[(self.cursor + age) % HISTORY_DEPTH])
    }

    /// Looks up the newest recorded value for `reg`.
    ///
    /// Scans oldest to newest and keeps the last match.
    pub fn lookup(&self, reg: usize) -> Option<i32> {
        let mut found = None;
        for entry in self.iter() {
            if entry.reg == reg {
                found = Some(entry.value);
            }
        }
        found
    }

    /// Resolves an operand read.
    ///
    /// # Arguments
    ///
    /// * `reg`      - Register the operand was read from.
    /// * `fallback` - Value read from the register file.
    ///
    /// # Returns
    ///
    /// The newest recorded value for `reg`, or `fallback` if none of the last four writes
    /// touched it.
    #[inline]
    pub fn resolve(&self, reg: usize, fallback: i32) -> i32 {
        self.lookup(reg).unwrap_or(fallback)
    }
}
