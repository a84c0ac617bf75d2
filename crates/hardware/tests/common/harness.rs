use siasim_core::asm;
use siasim_core::common::error::SimResult;
use siasim_core::config::Config;
use siasim_core::core::Cpu;
use siasim_core::devices::Console;
use siasim_core::{RunSummary, Simulator};

/// A simulator loaded with an assembled program, writing interrupt output to memory.
pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Assembles `source` with the default configuration.
    ///
    /// Panics if any line fails to assemble, so a typo in a test program is loud.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, &Config::default())
    }

    pub fn with_config(source: &str, config: &Config) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let program = asm::assemble(source);
        assert!(
            program.is_clean(),
            "test program did not assemble: {:?}",
            program.diagnostics
        );
        Self::from_image(&program.bytes, config)
    }

    pub fn from_image(image: &[u8], config: &Config) -> Self {
        let mut sim = Simulator::new(config);
        sim.cpu.console = Console::capture();
        sim.load_program(image).unwrap();
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Read a register.
    pub fn reg(&self, reg: usize) -> i32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Run until halt or the first fatal condition.
    pub fn run(&mut self) -> SimResult<RunSummary> {
        self.sim.run()
    }

    /// Run until halt, failing the test on any fatal condition.
    pub fn run_ok(&mut self) -> RunSummary {
        match self.sim.run() {
            Ok(summary) => summary,
            Err(e) => panic!("program faulted: {e}"),
        }
    }

    /// Run a fixed number of cycles, stopping early on halt.
    pub fn step(&mut self, cycles: u64) -> SimResult<()> {
        for _ in 0..cycles {
            if self.sim.is_halted() {
                break;
            }
            self.sim.tick()?;
        }
        Ok(())
    }

    /// Interrupt output written so far.
    pub fn output(&self) -> String {
        self.sim.cpu.console.captured()
    }
}
