//! SIA Instruction Encoder.
//!
//! The inverse of `decode`: packs an `Instruction` back into its byte layout. Used by the
//! assembler and by tests that build programs without going through source text.

use crate::isa::instruction::{Instruction, InstructionWindow, LOW_NIBBLE_MASK};
use crate::isa::opcodes;

/// Mask for the 24-bit half-word address of call and jump.
const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Packs a primary opcode and a low nibble into byte 0.
#[inline]
const fn head(opcode: u8, low: usize) -> u8 {
    (opcode << 4) | (low as u8 & LOW_NIBBLE_MASK)
}

/// Packs two register nibbles into one byte.
#[inline]
const fn pair(hi: usize, lo: usize) -> u8 {
    ((hi as u8 & LOW_NIBBLE_MASK) << 4) | (lo as u8 & LOW_NIBBLE_MASK)
}

/// Encodes an instruction.
///
/// Fields wider than their encoding are truncated to fit; the assembler range-checks
/// operands before calling this.
///
/// # Returns
///
/// The encoded bytes, zero-padded to four, and the number of significant bytes (2 or 4).
pub fn encode(inst: &Instruction) -> (InstructionWindow, usize) {
    let bytes = match *inst {
        Instruction::Halt => [0, 0, 0, 0],
        Instruction::Alu { op, ra, rb, rc } => [head(op.opcode(), ra), pair(rb, rc), 0, 0],
        Instruction::Branch {
            cond,
            ra,
            rb,
            offset,
        } => {
            let [hi, lo] = offset.to_be_bytes();
            [
                head(opcodes::OP_BRANCH, cond.sub() as usize),
                pair(ra, rb),
                hi,
                lo,
            ]
        }
        Instruction::Call { target } => address(opcodes::branch::CALL, target),
        Instruction::Jump { target } => address(opcodes::branch::JUMP, target),
        Instruction::Load { rd, base, offset } => [
            head(opcodes::OP_LOAD, rd),
            pair(base, offset as u8 as usize),
            0,
            0,
        ],
        Instruction::Store { rs, base, offset } => [
            head(opcodes::OP_STORE, rs),
            pair(base, offset as u8 as usize),
            0,
            0,
        ],
        Instruction::Return => [
            head(opcodes::OP_STACK, 0),
            opcodes::stack::RETURN << opcodes::stack::SHIFT,
            0,
            0,
        ],
        Instruction::Push { reg } => [
            head(opcodes::OP_STACK, reg),
            opcodes::stack::PUSH << opcodes::stack::SHIFT,
            0,
            0,
        ],
        Instruction::Pop { reg } => [
            head(opcodes::OP_STACK, reg),
            opcodes::stack::POP << opcodes::stack::SHIFT,
            0,
            0,
        ],
        Instruction::Move { rd, imm } => [head(opcodes::OP_MOVE, rd), imm as u8, 0, 0],
        Instruction::Interrupt { code } => [head(opcodes::OP_INTERRUPT, 0), code, 0, 0],
        Instruction::Unknown { raw } => [raw[0], raw[1], 0, 0],
    };
    (bytes, inst.size() as usize)
}

/// Call and jump: sub-opcode in byte 0, half-word address in bytes 1-3.
fn address(sub: u8, target: u32) -> InstructionWindow {
    let [_, a, b, c] = (target & ADDRESS_MASK).to_be_bytes();
    [head(opcodes::OP_BRANCH, sub as usize), a, b, c]
}
