//! Main Execution Loop.
//!
//! This module implements the cycle of the CPU. It performs the following:
//! 1. **Pipeline Coordination:** Runs the four stages once per cycle, in reverse pipeline
//!    order (Store, Execute, Decode, Fetch), so every stage consumes what its producer
//!    latched in the previous cycle and an instruction spends one cycle in each stage.
//! 2. **Halt Handling:** Stops the upstream stages in the cycle `halt` executes.
//! 3. **Observability:** Provides a per-cycle pipeline occupancy diagram for tracing.

use tracing::debug;

use super::Cpu;
use crate::common::error::SimResult;
use crate::core::pipeline::latches::FetchFault;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, store_stage};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Advances the machine by one cycle.
    ///
    /// Store runs first, so an older instruction's commit (and any flush it triggers) is
    /// visible to the younger instructions behind it in the same cycle. Once Execute raises
    /// the halt flag, Decode and Fetch are skipped, and every later call is a no-op.
    ///
    /// # Errors
    ///
    /// Any fatal condition raised by a stage. The machine state is left as it was at the
    /// point of failure.
    pub fn tick(&mut self) -> SimResult<()> {
        if self.halted {
            return Ok(());
        }
        self.stats.cycles += 1;

        store_stage(self)?;
        execute_stage(self)?;
        if self.halted {
            return Ok(());
        }
        decode_stage(self);
        fetch_stage(self);

        if self.trace {
            self.print_pipeline_diagram();
        }
        Ok(())
    }

    /// Describes what each latch holds at the end of the cycle.
    pub fn pipeline_diagram(&self) -> String {
        let fetched = self.if_id.peek().map_or_else(
            || "-".to_string(),
            |e| e.fetched.map_or_else(fault_text, |w| disassemble(&decode(w))),
        );
        let decoded = self.id_ex.peek().map_or_else(
            || "-".to_string(),
            |e| e.inst.map_or_else(fault_text, |inst| disassemble(&inst)),
        );
        let executed = self
            .ex_st
            .peek()
            .map_or_else(|| "-".to_string(), |e| disassemble(&e.inst));
        format!(
            "cycle {:>5} | pc={:#05x} | IF/ID [{fetched}] | ID/EX [{decoded}] | EX/ST [{executed}]",
            self.stats.cycles, self.pc
        )
    }

    /// Logs the pipeline occupancy diagram at debug level.
    pub fn print_pipeline_diagram(&self) {
        debug!("{}", self.pipeline_diagram());
    }
}

fn fault_text(fault: FetchFault) -> String {
    format!("{fault:?}")
}
