//! SIA Instruction Decoder.
//!
//! Maps a fetched 4-byte window onto the tagged `Instruction` type. Decoding is total:
//! encodings that no family claims come back as `Instruction::Unknown` and the execute stage
//! decides what to do with them.

use crate::isa::instruction::{
    AluOp, BranchCond, Instruction, InstructionBits, InstructionWindow,
};
use crate::isa::opcodes;

/// Decodes the instruction at the start of `window`.
///
/// Short instructions only look at the first two bytes; the trailing pair is ignored.
///
/// # Arguments
///
/// * `window` - Four bytes read from memory at the program counter.
///
/// # Returns
///
/// The decoded instruction. Never fails.
pub fn decode(window: InstructionWindow) -> Instruction {
    let opcode = window.opcode();

    if let Some(op) = AluOp::from_opcode(opcode) {
        return Instruction::Alu {
            op,
            ra: window.reg_a(),
            rb: window.reg_b(),
            rc: window.reg_c(),
        };
    }

    match opcode {
        opcodes::OP_HALT => Instruction::Halt,
        opcodes::OP_BRANCH => decode_branch(window),
        opcodes::OP_LOAD => Instruction::Load {
            rd: window.reg_a(),
            base: window.reg_b(),
            offset: window.offset4(),
        },
        opcodes::OP_STORE => Instruction::Store {
            rs: window.reg_a(),
            base: window.reg_b(),
            offset: window.offset4(),
        },
        opcodes::OP_STACK => decode_stack(window),
        opcodes::OP_MOVE => Instruction::Move {
            rd: window.reg_a(),
            imm: window.imm8(),
        },
        opcodes::OP_INTERRUPT => Instruction::Interrupt { code: window[1] },
        _ => unknown(window),
    }
}

/// Decodes the branch family: six relative conditions plus call and jump.
fn decode_branch(window: InstructionWindow) -> Instruction {
    let sub = window.branch_sub();
    if let Some(cond) = BranchCond::from_sub(sub) {
        return Instruction::Branch {
            cond,
            ra: window.reg_b(),
            rb: window.reg_c(),
            offset: window.half_offset(),
        };
    }
    match sub {
        opcodes::branch::CALL => Instruction::Call {
            target: window.half_address(),
        },
        opcodes::branch::JUMP => Instruction::Jump {
            target: window.half_address(),
        },
        _ => unknown(window),
    }
}

/// Decodes the stack family, selected by the top two bits of byte 1.
fn decode_stack(window: InstructionWindow) -> Instruction {
    match window.stack_sub() {
        opcodes::stack::RETURN => Instruction::Return,
        opcodes::stack::PUSH => Instruction::Push {
            reg: window.reg_a(),
        },
        opcodes::stack::POP => Instruction::Pop {
            reg: window.reg_a(),
        },
        _ => unknown(window),
    }
}

#[inline]
fn unknown(window: InstructionWindow) -> Instruction {
    Instruction::Unknown {
        raw: [window[0], window[1]],
    }
}
