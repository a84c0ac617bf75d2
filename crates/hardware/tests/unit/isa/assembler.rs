//! Assembler Tests.
//!
//! Covers operand order, case and comment handling, field range checks, and the
//! skip-and-report recovery policy for malformed lines.

use pretty_assertions::assert_eq;
use rstest::rstest;
use siasim_core::asm::{assemble, assemble_line};
use siasim_core::common::AsmError;
use siasim_core::isa::{BranchCond, Instruction};

#[test]
fn program_bytes_concatenate_in_source_order() {
    let out = assemble("move 5 r1\nadd r1 r1 r2\nbranchifequal r1 r2 -8\nhalt\n");
    assert!(out.is_clean());
    assert_eq!(
        out.bytes,
        vec![0xB1, 0x05, 0x11, 0x12, 0x72, 0x12, 0xFF, 0xFC, 0x00, 0x00]
    );
}

#[test]
fn byte_offset_is_stored_in_half_words() {
    let inst = assemble_line("branchifless r3 r4 -8", 1).unwrap();
    assert_eq!(
        inst,
        Some(Instruction::Branch {
            cond: BranchCond::Less,
            ra: 3,
            rb: 4,
            offset: -4,
        })
    );
}

#[test]
fn move_takes_immediate_first() {
    assert_eq!(
        assemble_line("move -128 r7", 1).unwrap(),
        Some(Instruction::Move { rd: 7, imm: -128 })
    );
}

#[test]
fn mnemonics_and_registers_are_case_insensitive() {
    assert_eq!(
        assemble_line("  PUSH R15  # save sp", 1).unwrap(),
        Some(Instruction::Push { reg: 15 })
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("# just a comment")]
fn blank_lines_emit_nothing(#[case] line: &str) {
    assert_eq!(assemble_line(line, 1), Ok(None));
}

#[rstest]
#[case("load r1 r2 8")]
#[case("store r1 r2 -9")]
#[case("move 128 r1")]
#[case("interrupt 256")]
#[case("jump -2")]
fn out_of_range_immediates_are_rejected(#[case] line: &str) {
    assert!(matches!(
        assemble_line(line, 4),
        Err(AsmError::InvalidImmediate { line: 4, .. })
    ));
}

#[test]
fn odd_offsets_are_rejected() {
    assert_eq!(
        assemble_line("jump 7", 2),
        Err(AsmError::OddOffset { line: 2, value: 7 })
    );
}

#[rstest]
#[case("add r1 r2 r16")]
#[case("pop x3")]
#[case("push r")]
fn bad_registers_are_rejected(#[case] line: &str) {
    assert!(matches!(
        assemble_line(line, 1),
        Err(AsmError::InvalidRegister { .. })
    ));
}

#[rstest]
#[case("move r1 r2", "r1")]
#[case("interrupt 0x10", "0x10")]
#[case("load r1 r2 +3", "+3")]
fn non_integer_tokens_are_rejected_as_immediates(#[case] line: &str, #[case] operand: &str) {
    match assemble_line(line, 5) {
        Err(AsmError::InvalidImmediate { line: 5, operand: got, .. }) => assert_eq!(got, operand),
        other => panic!("expected InvalidImmediate, got {other:?}"),
    }
}

#[test]
fn operand_text_is_reported_as_written() {
    assert_eq!(
        assemble_line("PUSH Rx", 6),
        Err(AsmError::InvalidRegister {
            line: 6,
            operand: "Rx".to_string(),
        })
    );
}

#[test]
fn mnemonic_is_reported_lowercased() {
    assert_eq!(
        assemble_line("FROB r1", 1),
        Err(AsmError::UnknownMnemonic {
            line: 1,
            mnemonic: "frob".to_string(),
        })
    );
}

#[test]
fn missing_operands_are_reported() {
    assert!(matches!(
        assemble_line("add r1 r2", 9),
        Err(AsmError::MissingOperand {
            line: 9,
            expected: 3,
            ..
        })
    ));
}

#[test]
fn bad_lines_do_not_disturb_surrounding_output() {
    let out = assemble("move 1 r1\nfrobnicate r2\nmove 2 r2\nadd r1 r2\nhalt\n");
    assert_eq!(out.bytes, vec![0xB1, 0x01, 0xB2, 0x02, 0x00, 0x00]);
    let lines: Vec<usize> = out.diagnostics.iter().map(AsmError::line).collect();
    assert_eq!(lines, vec![2, 4]);
    assert_eq!(
        out.diagnostics[0],
        AsmError::UnknownMnemonic {
            line: 2,
            mnemonic: "frobnicate".to_string(),
        }
    );
}
