//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. Every SIA ALU
//! instruction is a true two-operand operation, `rC = rA op rB`, on signed 32-bit values.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Subtract, Multiply, Divide
//! - [`logic`]:      And, Or

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical operations (and, or).
pub mod logic;

use crate::isa::instruction::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (value of `rA`)
    /// * `b`  - Second operand (value of `rB`)
    ///
    /// # Returns
    ///
    /// The result, or `None` when `op` is `Divide` and `b` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use siasim_core::core::units::alu::Alu;
    /// use siasim_core::isa::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Subtract, 3, 10), Some(-7));
    /// assert_eq!(Alu::execute(AluOp::Or, 0b1010, 0b0101), Some(0b1111));
    /// assert_eq!(Alu::execute(AluOp::Divide, 7, 0), None);
    /// ```
    pub fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
        match op {
            AluOp::Add => Some(arithmetic::add(a, b)),
            AluOp::Subtract => Some(arithmetic::subtract(a, b)),
            AluOp::Multiply => Some(arithmetic::multiply(a, b)),
            AluOp::Divide => arithmetic::divide(a, b),
            AluOp::And => Some(logic::and(a, b)),
            AluOp::Or => Some(logic::or(a, b)),
        }
    }
}
