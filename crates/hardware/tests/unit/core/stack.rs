//! Stack Tests.
//!
//! The stack grows down from the initial stack pointer in `r15`; words are stored
//! big-endian.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use siasim_core::common::SimError;

use crate::common::TestContext;

#[test]
fn push_writes_below_stack_pointer() {
    let mut ctx = TestContext::new("move -2 r1\npush r1\nhalt\n");
    let _ = ctx.run_ok();

    assert_eq!(ctx.reg(15), 996);
    assert_eq!(ctx.cpu().mem.read_word(996).unwrap(), -2);
    assert_eq!(ctx.cpu().mem.read_byte(996).unwrap(), 0xFF);
}

#[test]
fn pop_reads_value_pushed_right_before() {
    let mut ctx = TestContext::new("move 17 r1\npush r1\npop r2\nhalt\n");
    let _ = ctx.run_ok();

    assert_eq!(ctx.reg(2), 17);
    assert_eq!(ctx.reg(15), 1000);
}

#[test]
fn pop_on_empty_stack_reads_past_memory() {
    let mut ctx = TestContext::new("pop r1\nhalt\n");
    let err = ctx.run().unwrap_err();
    assert!(matches!(
        err,
        SimError::MemoryOutOfBounds { addr: 1000, len: 4 }
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pops_return_pushes_in_reverse(a in any::<i8>(), b in any::<i8>()) {
        let src = format!(
            "move {a} r1\nmove {b} r2\npush r1\npush r2\npop r3\npop r4\nhalt\n"
        );
        let mut ctx = TestContext::new(&src);
        let _ = ctx.run_ok();

        prop_assert_eq!(ctx.reg(3), i32::from(b));
        prop_assert_eq!(ctx.reg(4), i32::from(a));
        prop_assert_eq!(ctx.reg(15), 1000);
        prop_assert_eq!(ctx.cpu().mem.read_word(992).unwrap(), i32::from(b));
        prop_assert_eq!(ctx.cpu().mem.read_word(996).unwrap(), i32::from(a));
    }
}
