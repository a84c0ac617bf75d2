//! Simulation Driver Tests.

use pretty_assertions::assert_eq;
use siasim_core::common::SimError;
use siasim_core::config::Config;
use siasim_core::stats::STATS_SECTIONS;

use crate::common::TestContext;

#[test]
fn watchdog_stops_a_runaway_program() {
    let mut config = Config::default();
    config.general.max_cycles = Some(50);
    let mut ctx = TestContext::with_config("jump 0\n", &config);

    let err = ctx.run().unwrap_err();
    assert!(matches!(err, SimError::CycleLimitExceeded { limit: 50 }));
    assert_eq!(ctx.cpu().stats.cycles, 50);
}

#[test]
fn nothing_changes_after_halt() {
    let mut ctx = TestContext::new("move 1 r1\nhalt\nmove 2 r1\n");
    let first = ctx.run_ok();
    let regs = ctx.cpu().regs.clone();

    ctx.step(10).unwrap();
    ctx.sim.tick().unwrap();
    let again = ctx.run_ok();

    assert_eq!(again, first);
    assert_eq!(ctx.cpu().regs, regs);
    assert_eq!(ctx.reg(1), 1);
}

#[test]
fn step_reports_progress_before_halt() {
    let mut ctx = TestContext::new("move 5 r1\nadd r1 r1 r2\nhalt\n");
    ctx.step(3).unwrap();
    assert!(!ctx.sim.is_halted());
    assert_eq!(ctx.reg(1), 0);

    ctx.step(1).unwrap();
    assert_eq!(ctx.reg(1), 5);

    let summary = ctx.run_ok();
    assert_eq!(summary.cycles, 5);
}

#[test]
fn tracing_does_not_change_results() {
    let src = "move 2 r1\nmove 3 r2\nmultiply r1 r2 r3\npush r3\npop r4\nhalt\n";
    let mut plain = TestContext::new(src);
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let mut traced = TestContext::with_config(src, &config);

    assert_eq!(plain.run_ok(), traced.run_ok());
    assert_eq!(plain.cpu().regs, traced.cpu().regs);
    assert_eq!(traced.reg(4), 6);
}

#[test]
fn statistics_count_instruction_mix() {
    let src = "move 1 r1\n\
               move 2 r2\n\
               add r1 r2 r3\n\
               push r3\n\
               store r3 r15 -8\n\
               branchifless r1 r2 4\n\
               halt\n";
    let mut ctx = TestContext::new(src);
    let summary = ctx.run_ok();
    let stats = &ctx.cpu().stats;

    assert_eq!(summary.instructions_retired, 7);
    assert_eq!(stats.inst_move, 2);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_stack, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(ctx.cpu().mem.read_word(988).unwrap(), 3);
}

#[test]
fn report_renders_every_section() {
    let mut ctx = TestContext::new("move 1 r1\nbranchifequal r1 r1 4\nhalt\n");
    let _ = ctx.run_ok();
    let stats = &ctx.cpu().stats;
    let report = stats.render(&[]);

    assert!(report.contains("sim_cycles"));
    assert!(report.contains("INSTRUCTION MIX"));
    assert!(report.contains("PIPELINE"));
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(STATS_SECTIONS.len(), 3);
}

#[test]
fn pipeline_diagram_names_latched_instructions() {
    let mut ctx = TestContext::new("move 5 r1\nadd r1 r1 r2\nhalt\n");
    ctx.step(2).unwrap();
    let diagram = ctx.cpu().pipeline_diagram();
    assert!(diagram.contains("IF/ID [add r1 r1 r2]"));
    assert!(diagram.contains("ID/EX [move 5 r1]"));
    assert!(diagram.contains("EX/ST [-]"));
}

#[test]
fn pipeline_diagram_shows_a_latched_fetch_fault() {
    let mut config = Config::default();
    config.general.initial_sp = 8;
    let mut ctx = TestContext::with_config("move 1 r1\nmove 2 r2\nmove 3 r3\nhalt\n", &config);
    ctx.step(3).unwrap();
    let diagram = ctx.cpu().pipeline_diagram();
    assert!(diagram.contains("IF/ID [StackCollision { sp: 8 }]"));
    assert!(diagram.contains("ID/EX [move 2 r2]"));
}
