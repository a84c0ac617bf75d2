//! Diagnostic Interrupts.
//!
//! The SIA machine has two interrupts, both purely diagnostic: code 0 prints every register
//! and code 1 prints all of memory. They run in the Execute stage as soon as the interrupt
//! instruction reaches it, with all older instructions already committed. Other codes are
//! ignored.

use std::fmt::Write as _;

use tracing::warn;

use super::Cpu;
use crate::common::constants::{MEMORY_DUMP_ROW, NUM_REGISTERS};
use crate::isa::opcodes::interrupt;

/// Separator line framing a memory dump.
const DUMP_RULE: &str = "=================================================================";

impl Cpu {
    /// Raises a diagnostic interrupt, writing its output to the console.
    pub fn interrupt(&mut self, code: u8) {
        let text = match code {
            interrupt::REGISTER_DUMP => self.register_dump(),
            interrupt::MEMORY_DUMP => self.memory_dump(),
            _ => {
                warn!(code, pc = self.pc, "unknown interrupt code ignored");
                return;
            }
        };
        self.console.write_str(&text);
    }

    /// Formats every register, one per line, with forwarding applied.
    pub fn register_dump(&self) -> String {
        let mut out = String::from("Register contents:\n");
        for reg in 0..NUM_REGISTERS {
            let value = self.history.resolve(reg, self.regs.read(reg));
            let _ = writeln!(out, "Reg[{reg:<2}]: {value}");
        }
        out
    }

    /// Formats all of memory as rows of two-digit hex bytes, each row followed by the
    /// offset of its first byte.
    pub fn memory_dump(&self) -> String {
        let mut out = format!("Memory contents:\n{DUMP_RULE}\n");
        for (row, bytes) in self.mem.as_slice().chunks(MEMORY_DUMP_ROW).enumerate() {
            for byte in bytes {
                let _ = write!(out, "{byte:02X} ");
            }
            let _ = writeln!(out, " {:04}", row * MEMORY_DUMP_ROW);
        }
        let _ = writeln!(out, "{DUMP_RULE}");
        out
    }
}
