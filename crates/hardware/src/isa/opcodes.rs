//! SIA Opcode and Sub-opcode Constants.
//!
//! The primary opcode is always the high nibble of the first instruction byte. The branch
//! family selects its operation with the low nibble of byte 0, the stack family with the
//! top two bits of byte 1.

/// Halt (both bytes zero).
pub const OP_HALT: u8 = 0x0;
/// `add rA rB rC`.
pub const OP_ADD: u8 = 0x1;
/// `and rA rB rC`.
pub const OP_AND: u8 = 0x2;
/// `divide rA rB rC`.
pub const OP_DIVIDE: u8 = 0x3;
/// `multiply rA rB rC`.
pub const OP_MULTIPLY: u8 = 0x4;
/// `subtract rA rB rC`.
pub const OP_SUBTRACT: u8 = 0x5;
/// `or rA rB rC`.
pub const OP_OR: u8 = 0x6;
/// Branch family (relative branches, call, jump).
pub const OP_BRANCH: u8 = 0x7;
/// `load rD rBase offset`.
pub const OP_LOAD: u8 = 0x8;
/// `store rS rBase offset`.
pub const OP_STORE: u8 = 0x9;
/// Stack family (return, push, pop).
pub const OP_STACK: u8 = 0xA;
/// `move imm rD`.
pub const OP_MOVE: u8 = 0xB;
/// `interrupt code`.
pub const OP_INTERRUPT: u8 = 0xC;

/// Branch-family sub-opcodes (low nibble of byte 0).
pub mod branch {
    /// `branchifless`.
    pub const LESS: u8 = 0;
    /// `branchiflessorequal`.
    pub const LESS_OR_EQUAL: u8 = 1;
    /// `branchifequal`.
    pub const EQUAL: u8 = 2;
    /// `branchifnotequal`.
    pub const NOT_EQUAL: u8 = 3;
    /// `branchifgreater`.
    pub const GREATER: u8 = 4;
    /// `branchifgreaterorequal`.
    pub const GREATER_OR_EQUAL: u8 = 5;
    /// `call address`.
    pub const CALL: u8 = 6;
    /// `jump address`.
    pub const JUMP: u8 = 7;
}

/// Stack-family sub-opcodes (top two bits of byte 1).
pub mod stack {
    /// `return`.
    pub const RETURN: u8 = 0;
    /// `push rX`.
    pub const PUSH: u8 = 1;
    /// `pop rX`.
    pub const POP: u8 = 2;
    /// Bit position of the sub-opcode within byte 1.
    pub const SHIFT: u8 = 6;
}

/// Interrupt codes carried in byte 1.
pub mod interrupt {
    /// Print every register.
    pub const REGISTER_DUMP: u8 = 0;
    /// Print all of memory.
    pub const MEMORY_DUMP: u8 = 1;
}
