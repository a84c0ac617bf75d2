//! Simulator: the execution driver.
//!
//! Owns the `Cpu` and runs the cycle loop. The only normal termination is the halt flag,
//! checked at the top of every cycle; the optional cycle watchdog turns a runaway program
//! into an error instead of a hang.

use serde::Serialize;
use tracing::{debug, info};

use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::Cpu;

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Cycles executed, including the cycle in which `halt` executed.
    pub cycles: u64,
    /// Instructions retired, including the `halt`.
    pub instructions_retired: u64,
    /// Committed program counter: the address of the `halt`.
    pub pc: u32,
}

/// Top-level simulator: CPU architectural state plus the cycle watchdog.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, memory, pipeline, stats).
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a new simulator with an empty memory.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Copies a program image into memory at offset 0.
    ///
    /// # Errors
    ///
    /// `ProgramTooLarge` if the image does not fit in memory.
    pub fn load_program(&mut self, image: &[u8]) -> SimResult<()> {
        self.cpu.mem.load(image)?;
        debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Whether the program has halted.
    pub const fn is_halted(&self) -> bool {
        self.cpu.halted
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Any fatal condition raised by the pipeline.
    pub fn tick(&mut self) -> SimResult<()> {
        self.cpu.tick()
    }

    /// Runs until the program halts.
    ///
    /// # Errors
    ///
    /// The first fatal condition raised by the pipeline, or `CycleLimitExceeded` when a
    /// configured watchdog expires first.
    pub fn run(&mut self) -> SimResult<RunSummary> {
        while !self.cpu.halted {
            let cycles = self.cpu.stats.cycles;
            if let Some(limit) = self.max_cycles.filter(|&limit| cycles >= limit) {
                return Err(SimError::CycleLimitExceeded { limit });
            }
            self.cpu.tick()?;
        }
        let summary = self.summary();
        info!(
            cycles = summary.cycles,
            retired = summary.instructions_retired,
            pc = summary.pc,
            "halted"
        );
        Ok(summary)
    }

    /// Counters for the run so far.
    pub const fn summary(&self) -> RunSummary {
        RunSummary {
            cycles: self.cpu.stats.cycles,
            instructions_retired: self.cpu.stats.instructions_retired,
            pc: self.cpu.pc,
        }
    }
}
