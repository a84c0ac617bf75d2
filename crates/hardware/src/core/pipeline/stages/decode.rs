//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It decodes the
//! fetched window into an `Instruction` and reads the register operands the Execute stage
//! will need: both compared/combined registers for ALU and branch instructions, the base
//! register for loads and stores.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

/// Executes the instruction decode stage of the pipeline.
///
/// Does nothing when no fetched instruction is pending. A fetch fault is passed through
/// unchanged. Operands are read through the forwarding unit; since Store has already run
/// this cycle, that agrees with the register file, and the forwarding that matters happens
/// again in Execute.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode_stage(cpu: &mut Cpu) {
    let Some(IfIdEntry { pc, fetched }) = cpu.if_id.take() else {
        return;
    };
    let window = match fetched {
        Ok(window) => window,
        Err(fault) => {
            cpu.id_ex.put(IdExEntry {
                pc,
                inst: Err(fault),
                op1: 0,
                op2: 0,
            });
            return;
        }
    };

    let inst = decode(window);
    let (src1, src2) = inst.sources();
    let op1 = src1.map_or(0, |reg| read_operand(cpu, reg));
    let op2 = src2.map_or(0, |reg| read_operand(cpu, reg));

    if cpu.trace {
        trace!("ID  pc={pc:#05x} {} op1={op1} op2={op2}", disassemble(&inst));
    }

    cpu.id_ex.put(IdExEntry {
        pc,
        inst: Ok(inst),
        op1,
        op2,
    });
}

fn read_operand(cpu: &Cpu, reg: usize) -> i32 {
    cpu.history.resolve(reg, cpu.regs.read(reg))
}
