//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads the
//! 4-byte window at the fetch address and steps the fetch address along the sequential
//! path by the size of the instruction just fetched. The fetch address runs ahead of the
//! committed program counter; the Store stage pulls it back when control flow redirects.
//!
//! A window that cannot be read is not an error here. The address may lie behind a `halt`
//! or in the shadow of a taken branch, so the fault is latched in its place and only raised
//! if Execute reaches it.

use tracing::trace;

use crate::common::constants::FETCH_WINDOW;
use crate::core::Cpu;
use crate::core::pipeline::latches::{FetchFault, IfIdEntry};
use crate::isa::instruction::instruction_size;

/// Executes the instruction fetch stage of the pipeline.
///
/// The fetch address only advances past a window that was read. After a fault it stays
/// put, so the stage keeps latching the same fault until a redirect moves it.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.fetch_pc;
    let sp = cpu.regs.sp();
    let fetched = if pc as i64 + FETCH_WINDOW as i64 >= sp as i64 {
        Err(FetchFault::StackCollision { sp })
    } else {
        cpu.mem
            .read_window(pc)
            .map_err(|_| FetchFault::OutOfRange)
    };

    match fetched {
        Ok(window) => {
            if cpu.trace {
                trace!(
                    "IF  pc={pc:#05x} bytes={:02X} {:02X} {:02X} {:02X}",
                    window[0], window[1], window[2], window[3]
                );
            }
            cpu.fetch_pc = pc + instruction_size(window[0]);
        }
        Err(fault) => {
            if cpu.trace {
                trace!("IF  pc={pc:#05x} {fault:?}");
            }
        }
    }

    cpu.if_id.put(IfIdEntry { pc, fetched });
}
