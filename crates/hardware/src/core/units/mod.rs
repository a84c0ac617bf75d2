//! Execution units.
//!
//! This module contains the combinational units the execute stage drives: the integer ALU
//! and the branch resolution unit.

/// Arithmetic Logic Unit for the six register-register operations.
pub mod alu;

/// Branch Resolution Unit for the six relative branch conditions.
pub mod bru;
