//! Diagnostic Interrupt Tests.

use pretty_assertions::assert_eq;

use crate::common::TestContext;

#[test]
fn register_dump_lists_every_register() {
    let mut ctx = TestContext::new("move 7 r3\ninterrupt 0\nhalt\n");
    let _ = ctx.run_ok();
    let out = ctx.output();

    assert!(out.starts_with("Register contents:\n"));
    assert_eq!(out.lines().count(), 17);
    assert!(out.contains("Reg[0 ]: 0\n"));
    assert!(out.contains("Reg[3 ]: 7\n"));
    assert!(out.contains("Reg[15]: 1000\n"));
}

#[test]
fn memory_dump_shows_program_bytes() {
    let mut ctx = TestContext::new("move 1 r1\ninterrupt 1\nhalt\n");
    let _ = ctx.run_ok();
    let out = ctx.output();
    let lines: Vec<&str> = out.lines().collect();

    // header, two rules, 50 rows of 20 bytes
    assert_eq!(lines.len(), 53);
    assert_eq!(lines[0], "Memory contents:");
    assert_eq!(lines[1], "=".repeat(65));
    assert!(lines[2].starts_with("B1 01 C0 01 00 00 "));
    assert!(lines[2].ends_with("  0000"));
    assert!(lines[51].ends_with(" 0980"));
    assert_eq!(lines[52], "=".repeat(65));
}

#[test]
fn unknown_interrupt_code_is_ignored() {
    let mut ctx = TestContext::new("interrupt 9\nmove 1 r1\nhalt\n");
    let summary = ctx.run_ok();

    assert_eq!(ctx.output(), "");
    assert_eq!(ctx.reg(1), 1);
    assert_eq!(summary.instructions_retired, 3);
}

#[test]
fn each_interrupt_prints_once() {
    let mut ctx = TestContext::new("interrupt 0\ninterrupt 0\nhalt\n");
    let _ = ctx.run_ok();
    assert_eq!(ctx.output().matches("Register contents:").count(), 2);
}
