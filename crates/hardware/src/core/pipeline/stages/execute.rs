//! Instruction Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It performs the
//! following:
//! 1. **Forwarding:** Re-resolves both operands against the register write history, so a
//!    value committed after decode read the register file is still seen.
//! 2. **Computation:** Runs the ALU, resolves branch conditions, computes effective
//!    addresses, and reads memory for loads, pops and returns.
//! 3. **Side Effects:** Raises the diagnostic interrupts immediately and sets the halt flag.
//!
//! Every older instruction has already committed by the time an instruction executes,
//! because the Store stage runs first in each cycle.

use tracing::{debug, trace, warn};

use crate::common::constants::REG_SP;
use crate::common::error::{SimError, SimResult};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExResult, ExStEntry, IdExEntry};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;

/// Executes the instruction execute stage of the pipeline.
///
/// Does nothing when no decoded instruction is pending.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// * `InstructionStackCollision` or `MemoryOutOfBounds` when the entry is a fetch fault,
///   which at this point is on the committed path.
/// * `DivisionByZero` for a `divide` with a zero divisor.
/// * `MemoryOutOfBounds` when a load, pop or return reads outside memory.
pub fn execute_stage(cpu: &mut Cpu) -> SimResult<()> {
    let Some(entry) = cpu.id_ex.take() else {
        return Ok(());
    };
    let pc = entry.pc;
    let inst = entry.inst.map_err(|fault| fault.into_error(pc))?;
    let (op1, op2) = forward_operands(cpu, &entry, &inst);

    let result = match inst {
        Instruction::Halt => {
            debug!(pc, "halt");
            cpu.halted = true;
            cpu.stats.retire(&inst);
            return Ok(());
        }
        Instruction::Alu { op, rc, .. } => ExResult::WriteReg {
            reg: rc,
            value: Alu::execute(op, op1, op2).ok_or(SimError::DivisionByZero { pc })?,
        },
        Instruction::Branch { cond, offset, .. } => {
            ExResult::Branch(Bru::resolve(cond, op1, op2, offset))
        }
        Instruction::Call { target } | Instruction::Jump { target } => ExResult::Jump {
            target: Instruction::target_bytes(target) as i64,
        },
        Instruction::Load { rd, offset, .. } => ExResult::WriteReg {
            reg: rd,
            value: cpu.mem.read_word(op1 as i64 + offset as i64)?,
        },
        Instruction::Store { rs, offset, .. } => ExResult::StoreWord {
            addr: op1 as i64 + offset as i64,
            src: rs,
        },
        Instruction::Return => ExResult::Return {
            target: cpu.mem.read_word(forwarded(cpu, REG_SP) as i64)? as i64,
        },
        Instruction::Push { reg } => ExResult::Push {
            value: forwarded(cpu, reg),
        },
        Instruction::Pop { reg } => ExResult::Pop {
            reg,
            value: cpu.mem.read_word(forwarded(cpu, REG_SP) as i64)?,
        },
        Instruction::Move { rd, imm } => ExResult::WriteReg {
            reg: rd,
            value: imm as i32,
        },
        Instruction::Interrupt { code } => {
            cpu.interrupt(code);
            ExResult::Advance
        }
        Instruction::Unknown { raw } => {
            warn!(
                pc,
                "unknown instruction {:02X} {:02X} executed as a no-op", raw[0], raw[1]
            );
            cpu.stats.unknown_opcodes += 1;
            ExResult::Advance
        }
    };

    if cpu.trace {
        trace!("EX  pc={pc:#05x} {} -> {result:?}", disassemble(&inst));
    }

    cpu.ex_st.put(ExStEntry { pc, inst, result });
    Ok(())
}

/// Current value of a register as seen by an executing instruction.
fn forwarded(cpu: &Cpu, reg: usize) -> i32 {
    cpu.history.resolve(reg, cpu.regs.read(reg))
}

/// Re-applies forwarding to the operands latched by decode.
fn forward_operands(cpu: &mut Cpu, entry: &IdExEntry, inst: &Instruction) -> (i32, i32) {
    let (src1, src2) = inst.sources();
    let mut resolve = |src: Option<usize>, latched: i32| match src {
        Some(reg) => {
            let value = cpu.history.resolve(reg, latched);
            if value != latched {
                cpu.stats.forwarded_operands += 1;
                debug!(pc = entry.pc, reg, latched, value, "operand forwarded");
            }
            value
        }
        None => latched,
    };
    let op1 = resolve(src1, entry.op1);
    let op2 = resolve(src2, entry.op2);
    (op1, op2)
}
