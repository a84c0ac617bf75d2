//! Data Forwarding Tests: RAW Hazard Resolution.
//!
//! Verifies that an instruction reading a register written by the instruction directly
//! ahead of it sees the new value. Only that adjacent case needs the execute-stage
//! forwarding; anything older has committed before decode reads the register file.

use pretty_assertions::assert_eq;
use siasim_core::isa::{AluOp, Instruction};

use crate::common::TestContext;

#[test]
fn back_to_back_dependency() {
    let mut ctx = TestContext::new("move 5 r1\nadd r1 r1 r2\nhalt\n");
    let summary = ctx.run_ok();

    assert_eq!(ctx.reg(2), 10);
    assert_eq!(summary.pc, 4);
    assert_eq!(summary.cycles, 5);
    assert_eq!(summary.instructions_retired, 3);
    assert_eq!(ctx.cpu().stats.forwarded_operands, 2);
}

#[test]
fn one_instruction_gap_needs_no_forwarding() {
    let mut ctx = TestContext::new("move 5 r1
move 0 r3
add r1 r1 r2
halt
");
    let _ = ctx.run_ok();

    assert_eq!(ctx.reg(2), 10);
    assert_eq!(ctx.cpu().stats.forwarded_operands, 0);
}

#[test]
fn decode_latches_values_committed_the_same_cycle() {
    // Cycle 4 stores `move 5 r1` and then decodes the add.
    let mut ctx = TestContext::new("move 5 r1
move 0 r3
add r1 r1 r2
halt
");
    ctx.step(4).unwrap();

    let entry = *ctx.cpu().id_ex.peek().unwrap();
    assert_eq!(
        entry.inst,
        Ok(Instruction::Alu {
            op: AluOp::Add,
            ra: 1,
            rb: 1,
            rc: 2,
        })
    );
    assert_eq!((entry.op1, entry.op2), (5, 5));
}

#[test]
fn dependency_chain() {
    let src = "move 3 r1\n\
               add r1 r1 r2\n\
               add r2 r1 r3\n\
               multiply r3 r2 r4\n\
               subtract r4 r1 r5\n\
               halt\n";
    let mut ctx = TestContext::new(src);
    let _ = ctx.run_ok();

    assert_eq!(ctx.reg(2), 6);
    assert_eq!(ctx.reg(3), 9);
    assert_eq!(ctx.reg(4), 54);
    assert_eq!(ctx.reg(5), 51);
}

#[test]
fn load_sees_word_stored_just_before() {
    let src = "move 7 r1\n\
               move 40 r2\n\
               store r1 r2 4\n\
               load r3 r2 4\n\
               add r3 r3 r4\n\
               halt\n";
    let mut ctx = TestContext::new(src);
    let _ = ctx.run_ok();

    assert_eq!(ctx.reg(3), 7);
    assert_eq!(ctx.reg(4), 14);
    assert_eq!(ctx.cpu().mem.read_word(44).unwrap(), 7);
}

#[test]
fn branch_compares_fresh_values() {
    // r1 becomes 1 only in the instruction right before the branch.
    let src = "move 1 r1\n\
               branchifequal r1 r0 6\n\
               move 9 r2\n\
               halt\n";
    let mut ctx = TestContext::new(src);
    let _ = ctx.run_ok();
    assert_eq!(ctx.reg(2), 9);
}

#[test]
fn register_dump_follows_the_write_ahead_of_it() {
    let mut ctx = TestContext::new("move -3 r6\ninterrupt 0\nhalt\n");
    let _ = ctx.run_ok();
    assert!(ctx.output().contains("Reg[6 ]: -3\n"));
}
