//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the fixed 4-byte fetch window and the
//! tagged `Instruction` type produced by the decoder. Every instruction family gets its
//! own variant so the execute and store stages can match exhaustively.

use crate::common::constants::{INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32};
use crate::isa::opcodes;

/// Bit mask for the high nibble of a byte.
pub const HIGH_NIBBLE_MASK: u8 = 0xF0;
/// Bit mask for the low nibble of a byte.
pub const LOW_NIBBLE_MASK: u8 = 0x0F;

/// Raw bytes of one fetch: the instruction at the program counter plus whatever follows it.
pub type InstructionWindow = [u8; 4];

/// Trait for extracting instruction fields from a fetched window.
///
/// Field positions follow the SIA byte layout. Which fields are meaningful depends on the
/// opcode; extraction itself never fails.
pub trait InstructionBits {
    /// Primary opcode (high nibble of byte 0).
    fn opcode(&self) -> u8;

    /// Low nibble of byte 0: first register field, or branch sub-opcode.
    fn reg_a(&self) -> usize;

    /// High nibble of byte 1: second register field.
    fn reg_b(&self) -> usize;

    /// Low nibble of byte 1: third register field.
    fn reg_c(&self) -> usize;

    /// Branch sub-opcode (low nibble of byte 0).
    fn branch_sub(&self) -> u8;

    /// Stack sub-opcode (top two bits of byte 1).
    fn stack_sub(&self) -> u8;

    /// Byte 1 as a sign-extended 8-bit immediate.
    fn imm8(&self) -> i8;

    /// Low nibble of byte 1 as a sign-extended 4-bit offset.
    fn offset4(&self) -> i8;

    /// Bytes 2-3 as a big-endian signed half-word offset.
    fn half_offset(&self) -> i16;

    /// Bytes 1-3 as a big-endian unsigned 24-bit half-word address.
    fn half_address(&self) -> u32;
}

impl InstructionBits for InstructionWindow {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        (self[0] & HIGH_NIBBLE_MASK) >> 4
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        (self[0] & LOW_NIBBLE_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self[1] & HIGH_NIBBLE_MASK) >> 4) as usize
    }

    #[inline(always)]
    fn reg_c(&self) -> usize {
        (self[1] & LOW_NIBBLE_MASK) as usize
    }

    #[inline(always)]
    fn branch_sub(&self) -> u8 {
        self[0] & LOW_NIBBLE_MASK
    }

    #[inline(always)]
    fn stack_sub(&self) -> u8 {
        self[1] >> opcodes::stack::SHIFT
    }

    #[inline(always)]
    fn imm8(&self) -> i8 {
        self[1] as i8
    }

    /// Shifts the nibble into the top of a byte and arithmetic-shifts it back down, which
    /// replicates bit 3 into the upper bits.
    #[inline(always)]
    fn offset4(&self) -> i8 {
        ((self[1] << 4) as i8) >> 4
    }

    #[inline(always)]
    fn half_offset(&self) -> i16 {
        i16::from_be_bytes([self[2], self[3]])
    }

    #[inline(always)]
    fn half_address(&self) -> u32 {
        u32::from_be_bytes([0, self[1], self[2], self[3]])
    }
}

/// Three-register ALU operations (opcodes 1-6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `rC = rA + rB`
    Add,
    /// `rC = rA & rB`
    And,
    /// `rC = rA / rB`
    Divide,
    /// `rC = rA * rB`
    Multiply,
    /// `rC = rA - rB`
    Subtract,
    /// `rC = rA | rB`
    Or,
}

impl AluOp {
    /// All ALU operations in opcode order.
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::And,
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Or,
    ];

    /// Maps a primary opcode to its ALU operation.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            opcodes::OP_ADD => Some(Self::Add),
            opcodes::OP_AND => Some(Self::And),
            opcodes::OP_DIVIDE => Some(Self::Divide),
            opcodes::OP_MULTIPLY => Some(Self::Multiply),
            opcodes::OP_SUBTRACT => Some(Self::Subtract),
            opcodes::OP_OR => Some(Self::Or),
            _ => None,
        }
    }

    /// Primary opcode of this operation.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Add => opcodes::OP_ADD,
            Self::And => opcodes::OP_AND,
            Self::Divide => opcodes::OP_DIVIDE,
            Self::Multiply => opcodes::OP_MULTIPLY,
            Self::Subtract => opcodes::OP_SUBTRACT,
            Self::Or => opcodes::OP_OR,
        }
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::And => "and",
            Self::Divide => "divide",
            Self::Multiply => "multiply",
            Self::Subtract => "subtract",
            Self::Or => "or",
        }
    }
}

/// Relative branch conditions (branch sub-opcodes 0-5), comparing `rA` against `rB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchCond {
    /// `rA < rB`
    Less,
    /// `rA <= rB`
    LessOrEqual,
    /// `rA == rB`
    Equal,
    /// `rA != rB`
    NotEqual,
    /// `rA > rB`
    Greater,
    /// `rA >= rB`
    GreaterOrEqual,
}

impl BranchCond {
    /// All branch conditions in sub-opcode order.
    pub const ALL: [Self; 6] = [
        Self::Less,
        Self::LessOrEqual,
        Self::Equal,
        Self::NotEqual,
        Self::Greater,
        Self::GreaterOrEqual,
    ];

    /// Maps a branch sub-opcode to its condition; 6 and 7 are call and jump.
    pub const fn from_sub(sub: u8) -> Option<Self> {
        match sub {
            opcodes::branch::LESS => Some(Self::Less),
            opcodes::branch::LESS_OR_EQUAL => Some(Self::LessOrEqual),
            opcodes::branch::EQUAL => Some(Self::Equal),
            opcodes::branch::NOT_EQUAL => Some(Self::NotEqual),
            opcodes::branch::GREATER => Some(Self::Greater),
            opcodes::branch::GREATER_OR_EQUAL => Some(Self::GreaterOrEqual),
            _ => None,
        }
    }

    /// Branch sub-opcode of this condition.
    pub const fn sub(self) -> u8 {
        match self {
            Self::Less => opcodes::branch::LESS,
            Self::LessOrEqual => opcodes::branch::LESS_OR_EQUAL,
            Self::Equal => opcodes::branch::EQUAL,
            Self::NotEqual => opcodes::branch::NOT_EQUAL,
            Self::Greater => opcodes::branch::GREATER,
            Self::GreaterOrEqual => opcodes::branch::GREATER_OR_EQUAL,
        }
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Less => "branchifless",
            Self::LessOrEqual => "branchiflessorequal",
            Self::Equal => "branchifequal",
            Self::NotEqual => "branchifnotequal",
            Self::Greater => "branchifgreater",
            Self::GreaterOrEqual => "branchifgreaterorequal",
        }
    }
}

/// A decoded SIA instruction, one variant per encoding family.
///
/// Register fields are indices `0..16`. Control-flow payloads are kept in their encoded
/// half-word units; [`Instruction::branch_offset_bytes`] and
/// [`Instruction::target_bytes`] apply the doubling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Stop the machine.
    Halt,
    /// Three-register ALU operation: `rc = ra op rb`.
    Alu {
        /// Operation.
        op: AluOp,
        /// First source register.
        ra: usize,
        /// Second source register.
        rb: usize,
        /// Destination register.
        rc: usize,
    },
    /// Conditional PC-relative branch.
    Branch {
        /// Comparison applied to `ra` and `rb`.
        cond: BranchCond,
        /// First compared register.
        ra: usize,
        /// Second compared register.
        rb: usize,
        /// Signed offset in half-words, relative to the branch's own address.
        offset: i16,
    },
    /// Absolute call.
    Call {
        /// Target in half-words.
        target: u32,
    },
    /// Absolute jump.
    Jump {
        /// Target in half-words.
        target: u32,
    },
    /// Load a big-endian word: `rd = mem[base + offset]`.
    Load {
        /// Destination register.
        rd: usize,
        /// Address register.
        base: usize,
        /// Signed 4-bit byte offset.
        offset: i8,
    },
    /// Store a big-endian word: `mem[base + offset] = rs`.
    Store {
        /// Source register.
        rs: usize,
        /// Address register.
        base: usize,
        /// Signed 4-bit byte offset.
        offset: i8,
    },
    /// Pop a return address and jump to it.
    Return,
    /// Push a register onto the stack.
    Push {
        /// Register whose value is pushed.
        reg: usize,
    },
    /// Pop the top of the stack into a register.
    Pop {
        /// Destination register.
        reg: usize,
    },
    /// Load a sign-extended 8-bit immediate.
    Move {
        /// Destination register.
        rd: usize,
        /// Immediate value.
        imm: i8,
    },
    /// Diagnostic interrupt.
    Interrupt {
        /// 0 = register dump, 1 = memory dump; other codes do nothing.
        code: u8,
    },
    /// An encoding no family claims (opcodes 13-15, stack sub-opcode 3).
    ///
    /// Executed as a no-op that still advances the program counter.
    Unknown {
        /// First two raw bytes.
        raw: [u8; 2],
    },
}

impl Instruction {
    /// Encoded size in bytes.
    pub const fn size(&self) -> u32 {
        match self {
            Self::Branch { .. } | Self::Call { .. } | Self::Jump { .. } => INSTRUCTION_SIZE_32,
            Self::Unknown { raw } => instruction_size(raw[0]),
            _ => INSTRUCTION_SIZE_16,
        }
    }

    /// Registers decode reads on behalf of execute: the two operand slots.
    pub const fn sources(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            Self::Alu { ra, rb, .. } | Self::Branch { ra, rb, .. } => (Some(ra), Some(rb)),
            Self::Load { base, .. } | Self::Store { base, .. } => (Some(base), None),
            _ => (None, None),
        }
    }

    /// Relative branch offset in bytes (half-word offset doubled).
    pub const fn branch_offset_bytes(offset: i16) -> i32 {
        offset as i32 * 2
    }

    /// Absolute call/jump target in bytes (half-word address doubled).
    pub const fn target_bytes(target: u32) -> u32 {
        target * 2
    }
}

/// Size in bytes of the instruction whose first byte is `byte0`.
///
/// Used by fetch to step along the sequential path before the instruction is decoded.
#[inline]
pub const fn instruction_size(byte0: u8) -> u32 {
    if (byte0 & HIGH_NIBBLE_MASK) >> 4 == opcodes::OP_BRANCH {
        INSTRUCTION_SIZE_32
    } else {
        INSTRUCTION_SIZE_16
    }
}
