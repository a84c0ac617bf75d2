//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, memory, the committed program counter and
//!    the halt flag.
//! 2. **Pipeline Control:** Owns the inter-stage latches, the speculative fetch address and
//!    the forwarding history.
//! 3. **Commit Helpers:** Register writes, stack pointer adjustment and control-flow
//!    redirects used by the Store stage.

/// Cycle execution and pipeline coordination.
pub mod execution;

/// Diagnostic interrupt handling (register and memory dumps).
pub mod interrupt;

use tracing::debug;

use crate::common::RegisterFile;
use crate::common::constants::{FETCH_WINDOW, MEMORY_SIZE, REG_SP};
use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::arch::Memory;
use crate::core::pipeline::hazards::History;
use crate::core::pipeline::latches::{ExSt, IdEx, IfId};
use crate::devices::Console;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
///
/// There are no globals: the driver owns one `Cpu` and passes it by mutable reference to
/// every stage.
#[derive(Debug)]
pub struct Cpu {
    /// Architectural register file.
    pub regs: RegisterFile,
    /// Main memory.
    pub mem: Memory,
    /// Program counter of the next instruction to commit.
    pub pc: u32,
    /// Address the Fetch stage reads next; runs ahead of `pc` along the sequential path.
    pub fetch_pc: u32,
    /// Set by the Execute stage when it runs a `halt`.
    pub halted: bool,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/ST Latch.
    pub ex_st: ExSt,
    /// Recent register writes, for forwarding.
    pub history: History,

    /// Destination of diagnostic interrupt output.
    pub console: Console,
    /// Performance statistics.
    pub stats: SimStats,
    /// Enable per-stage instruction tracing.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with zeroed memory and registers, the configured stack pointer, and an
    /// empty pipeline at address 0.
    ///
    /// # Arguments
    ///
    /// * `config` - The emulator configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.general.initial_sp),
            mem: Memory::new(),
            pc: 0,
            fetch_pc: 0,
            halted: false,
            if_id: IfId::new(),
            id_ex: IdEx::new(),
            ex_st: ExSt::new(),
            history: History::new(),
            console: Console::default(),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Writes a register and records the write for forwarding.
    pub fn commit_reg(&mut self, reg: usize, value: i32) {
        self.regs.write(reg, value);
        self.history.record(reg, value);
    }

    /// Moves the stack pointer with wrap-around and records the new value for forwarding.
    ///
    /// # Returns
    ///
    /// The new stack pointer.
    pub fn commit_sp(&mut self, delta: i32) -> i32 {
        let sp = self.regs.adjust_sp(delta);
        self.history.record(REG_SP, sp);
        sp
    }

    /// Discards every instruction fetched or decoded but not yet executed.
    ///
    /// # Returns
    ///
    /// The number of instructions squashed.
    pub fn flush_pipeline(&mut self) -> u64 {
        let squashed = u64::from(self.if_id.flush()) + u64::from(self.id_ex.flush());
        self.stats.flushes += 1;
        self.stats.squashed += squashed;
        squashed
    }

    /// Sends control to `target`: commits it as the program counter, flushes the
    /// sequential-path instructions behind the redirecting one, and restarts fetch there.
    ///
    /// # Errors
    ///
    /// `MemoryOutOfBounds` if `target` is outside memory.
    pub fn redirect(&mut self, target: i64) -> SimResult<()> {
        let pc = u32::try_from(target)
            .ok()
            .filter(|&pc| (pc as usize) < MEMORY_SIZE)
            .ok_or_else(|| SimError::out_of_bounds(target, FETCH_WINDOW))?;
        let squashed = self.flush_pipeline();
        debug!(from = self.pc, to = pc, squashed, "pipeline flush");
        self.stats.branches_taken += 1;
        self.pc = pc;
        self.fetch_pc = pc;
        Ok(())
    }
}
