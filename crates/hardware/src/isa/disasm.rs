//! Instruction Disassembler for SIA.
//!
//! Renders a decoded instruction as assembler source text for debug tracing, logging, and
//! the CLI `disasm` listing. The output uses exactly the syntax the assembler accepts, so
//! a disassembled line reassembles to the same bytes.
//!
//! # Usage
//!
//! ```
//! use siasim_core::isa::{decode::decode, disasm::disassemble};
//! assert_eq!(disassemble(&decode([0xB1, 0x05, 0, 0])), "move 5 r1");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionWindow, instruction_size};

/// One line of a binary listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Byte offset of the instruction in the image.
    pub offset: usize,
    /// Encoded bytes (2 or 4; fewer if the image ends mid-instruction).
    pub bytes: Vec<u8>,
    /// Assembler text.
    pub text: String,
}

/// Disassembles an instruction into one line of assembler source.
///
/// Branch offsets and call/jump targets are printed in bytes, the unit the assembler takes.
/// Unclaimed encodings print as a `#` comment carrying the raw bytes.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::Halt => "halt".to_string(),
        Instruction::Alu { op, ra, rb, rc } => {
            format!("{} r{} r{} r{}", op.mnemonic(), ra, rb, rc)
        }
        Instruction::Branch {
            cond,
            ra,
            rb,
            offset,
        } => format!(
            "{} r{} r{} {}",
            cond.mnemonic(),
            ra,
            rb,
            Instruction::branch_offset_bytes(offset)
        ),
        Instruction::Call { target } => format!("call {}", Instruction::target_bytes(target)),
        Instruction::Jump { target } => format!("jump {}", Instruction::target_bytes(target)),
        Instruction::Load { rd, base, offset } => format!("load r{rd} r{base} {offset}"),
        Instruction::Store { rs, base, offset } => format!("store r{rs} r{base} {offset}"),
        Instruction::Return => "return".to_string(),
        Instruction::Push { reg } => format!("push r{reg}"),
        Instruction::Pop { reg } => format!("pop r{reg}"),
        Instruction::Move { rd, imm } => format!("move {imm} r{rd}"),
        Instruction::Interrupt { code } => format!("interrupt {code}"),
        Instruction::Unknown { raw } => format!("# unknown {:02X} {:02X}", raw[0], raw[1]),
    }
}

/// Disassembles a whole program image, walking it instruction by instruction from offset 0.
///
/// A trailing instruction cut off by the end of the image is decoded as if padded with
/// zero bytes.
pub fn disassemble_image(image: &[u8]) -> Vec<ListingLine> {
    let mut lines = Vec::new();
    let mut offset = 0;
    while offset < image.len() {
        let mut window: InstructionWindow = [0; 4];
        let avail = &image[offset..];
        let take = avail.len().min(window.len());
        window[..take].copy_from_slice(&avail[..take]);

        let size = instruction_size(window[0]) as usize;
        let end = (offset + size).min(image.len());
        lines.push(ListingLine {
            offset,
            bytes: image[offset..end].to_vec(),
            text: disassemble(&decode(window)),
        });
        offset += size;
    }
    lines
}
