//! Result Store (ST) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It commits the
//! result computed by Execute to the architectural state, records every register write in
//! the forwarding history, and advances the program counter. Taken branches, calls, jumps
//! and returns redirect the program counter and flush the younger instructions fetched
//! along the sequential path.
//!
//! Stack pointer adjustments wrap around the memory bound instead of failing; every other
//! out-of-range access is fatal.

use tracing::trace;

use crate::common::constants::WORD_SIZE;
use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExResult, ExStEntry};
use crate::core::units::bru::BranchOutcome;
use crate::isa::disasm::disassemble;

/// Stack pointer adjustment of one push or pop.
const STACK_SLOT: i32 = WORD_SIZE as i32;

/// Executes the result store stage of the pipeline.
///
/// Does nothing when no executed instruction is pending.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// `MemoryOutOfBounds` when a store or push writes outside memory, or a redirect targets an
/// address outside memory.
pub fn store_stage(cpu: &mut Cpu) -> SimResult<()> {
    let Some(ExStEntry { pc, inst, result }) = cpu.ex_st.take() else {
        return Ok(());
    };
    let next = pc + inst.size();

    if cpu.trace {
        trace!("ST  pc={pc:#05x} {}", disassemble(&inst));
    }

    match result {
        ExResult::Advance => cpu.pc = next,
        ExResult::WriteReg { reg, value } => {
            cpu.commit_reg(reg, value);
            cpu.pc = next;
        }
        ExResult::StoreWord { addr, src } => {
            cpu.mem.write_word(addr, cpu.regs.read(src))?;
            cpu.pc = next;
        }
        ExResult::Branch(BranchOutcome::NotTaken) => cpu.pc = next,
        ExResult::Branch(BranchOutcome::Taken(offset)) => {
            cpu.redirect(pc as i64 + offset as i64)?;
        }
        ExResult::Jump { target } => cpu.redirect(target)?,
        ExResult::Return { target } => {
            let _ = cpu.commit_sp(STACK_SLOT);
            cpu.redirect(target)?;
        }
        ExResult::Push { value } => {
            let sp = cpu.commit_sp(-STACK_SLOT);
            cpu.mem.write_word(sp as i64, value)?;
            cpu.pc = next;
        }
        ExResult::Pop { reg, value } => {
            cpu.commit_reg(reg, value);
            let _ = cpu.commit_sp(STACK_SLOT);
            cpu.pc = next;
        }
    }

    cpu.stats.retire(&inst);
    Ok(())
}
