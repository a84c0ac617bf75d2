//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the SIA emulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by family (ALU, load, store, branch, stack, move, system).
//! 3. **Control flow:** Redirects taken, pipeline flushes, and instructions squashed.
//! 4. **Hazards:** Operands supplied by the forwarding unit instead of the register file.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::instruction::Instruction;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch, call and jump instructions retired.
    pub inst_branch: u64,
    /// Count of push, pop and return instructions retired.
    pub inst_stack: u64,
    /// Count of move instructions retired.
    pub inst_move: u64,
    /// Count of interrupt, halt and unknown instructions retired.
    pub inst_system: u64,

    /// Branches, calls, jumps and returns that redirected the program counter.
    pub branches_taken: u64,
    /// Number of pipeline flushes.
    pub flushes: u64,
    /// Instructions discarded from the pipeline by flushes.
    pub squashed: u64,
    /// Operands whose value came from the forwarding unit.
    pub forwarded_operands: u64,
    /// Unknown encodings executed as no-ops.
    pub unknown_opcodes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_stack: 0,
            inst_move: 0,
            inst_system: 0,
            branches_taken: 0,
            flushes: 0,
            squashed: 0,
            forwarded_operands: 0,
            unknown_opcodes: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"pipeline"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "pipeline"];

const RULE: &str = "----------------------------------------------------------";
const BANNER: &str = "==========================================================";

impl SimStats {
    /// Counts one retired instruction in its family.
    pub fn retire(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        let counter = match inst {
            Instruction::Alu { .. } => &mut self.inst_alu,
            Instruction::Load { .. } => &mut self.inst_load,
            Instruction::Store { .. } => &mut self.inst_store,
            Instruction::Branch { .. } | Instruction::Call { .. } | Instruction::Jump { .. } => {
                &mut self.inst_branch
            }
            Instruction::Push { .. } | Instruction::Pop { .. } | Instruction::Return => {
                &mut self.inst_stack
            }
            Instruction::Move { .. } => &mut self.inst_move,
            Instruction::Halt | Instruction::Interrupt { .. } | Instruction::Unknown { .. } => {
                &mut self.inst_system
            }
        };
        *counter += 1;
    }

    /// Instructions retired per cycle.
    pub fn ipc(&self) -> f64 {
        self.instructions_retired as f64 / self.cycles.max(1) as f64
    }

    /// Cycles per retired instruction.
    pub fn cpi(&self) -> f64 {
        self.cycles as f64 / self.instructions_retired.max(1) as f64
    }

    /// Renders the requested sections as text.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty slice
    /// renders all of them.
    pub fn render(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let mut out = String::new();

        if want("summary") {
            let _ = writeln!(out, "\n{BANNER}");
            let _ = writeln!(out, "SIA PIPELINE SIMULATION STATISTICS");
            let _ = writeln!(out, "{BANNER}");
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_ipc                  {:.4}", self.ipc());
            let _ = writeln!(out, "sim_cpi                  {:.4}", self.cpi());
            let _ = writeln!(out, "{RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, n) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.stack", self.inst_stack),
                ("op.move", self.inst_move),
                ("op.system", self.inst_system),
            ] {
                let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n));
            }
            let _ = writeln!(out, "{RULE}");
        }
        if want("pipeline") {
            let _ = writeln!(out, "PIPELINE");
            let _ = writeln!(out, "  redirects              {}", self.branches_taken);
            let _ = writeln!(out, "  flushes                {}", self.flushes);
            let _ = writeln!(out, "  squashed               {}", self.squashed);
            let _ = writeln!(out, "  forwarded_operands     {}", self.forwarded_operands);
            let _ = writeln!(out, "  unknown_opcodes        {}", self.unknown_opcodes);
            let _ = writeln!(out, "{BANNER}");
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render(sections));
    }

    /// Prints every statistics section to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
