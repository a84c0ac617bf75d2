//! Instruction Codec Properties.
//!
//! Every well-formed instruction must survive `encode` then `decode` unchanged, and its
//! disassembly must assemble back to the same bytes.

use proptest::prelude::*;
use siasim_core::asm::assemble_line;
use siasim_core::isa::{AluOp, BranchCond, Instruction, decode, disassemble, encode};

fn reg() -> impl Strategy<Value = usize> {
    0usize..16
}

fn instruction() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        Just(Instruction::Halt),
        Just(Instruction::Return),
        (prop::sample::select(AluOp::ALL.to_vec()), reg(), reg(), reg())
            .prop_map(|(op, ra, rb, rc)| Instruction::Alu { op, ra, rb, rc }),
        (
            prop::sample::select(BranchCond::ALL.to_vec()),
            reg(),
            reg(),
            any::<i16>()
        )
            .prop_map(|(cond, ra, rb, offset)| Instruction::Branch {
                cond,
                ra,
                rb,
                offset
            }),
        (0u32..=0x00FF_FFFF).prop_map(|target| Instruction::Call { target }),
        (0u32..=0x00FF_FFFF).prop_map(|target| Instruction::Jump { target }),
        (reg(), reg(), -8i8..=7).prop_map(|(rd, base, offset)| Instruction::Load {
            rd,
            base,
            offset
        }),
        (reg(), reg(), -8i8..=7).prop_map(|(rs, base, offset)| Instruction::Store {
            rs,
            base,
            offset
        }),
        reg().prop_map(|reg| Instruction::Push { reg }),
        reg().prop_map(|reg| Instruction::Pop { reg }),
        (reg(), any::<i8>()).prop_map(|(rd, imm)| Instruction::Move { rd, imm }),
        any::<u8>().prop_map(|code| Instruction::Interrupt { code }),
    ]
}

proptest! {
    #[test]
    fn decode_inverts_encode(inst in instruction()) {
        let (bytes, len) = encode(&inst);
        prop_assert_eq!(len as u32, inst.size());
        prop_assert_eq!(decode(bytes), inst);
    }

    #[test]
    fn disassembly_reassembles(inst in instruction()) {
        let text = disassemble(&inst);
        let parsed = assemble_line(&text, 1);
        prop_assert_eq!(parsed, Ok(Some(inst)), "text: {}", text);
    }

    #[test]
    fn decode_is_total(window in any::<[u8; 4]>()) {
        let inst = decode(window);
        prop_assert!(inst.size() == 2 || inst.size() == 4);
    }
}
