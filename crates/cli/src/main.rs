//! SIA emulator CLI.
//!
//! This binary provides a single entry point for the toolchain. It performs:
//! 1. **Run:** Load a binary image and drive the pipeline until `halt`.
//! 2. **Assemble:** Translate SIA assembly source into a binary image.
//! 3. **Disassemble:** List a binary image as offsets, raw bytes and assembler text.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use siasim_core::config::Config;
use siasim_core::devices::Console;
use siasim_core::isa::disassemble_image;
use siasim_core::sim::loader;
use siasim_core::{Simulator, asm};

#[derive(Parser, Debug)]
#[command(
    name = "sia",
    author,
    version,
    about = "SIA pipelined emulator and assembler",
    long_about = "Assemble, disassemble and run programs for the SIA instruction set.\n\nExamples:\n  sia asm prog.s -o prog.bin\n  sia run prog.bin --stats\n  sia run prog.bin --config sim.json -vv\n  sia disasm prog.bin"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a binary image until it halts.
    Run {
        /// Program image to execute.
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every instruction as it executes (implies -vvv).
        #[arg(long)]
        trace: bool,

        /// Print the statistics report after the run.
        #[arg(long)]
        stats: bool,

        /// Print the run summary as JSON on stdout; interrupt output moves to stderr.
        #[arg(long)]
        json: bool,
    },

    /// Assemble a source file into a binary image.
    Asm {
        /// Assembly source.
        input: PathBuf,

        /// Output image.
        #[arg(short, long)]
        output: PathBuf,

        /// Fail instead of skipping malformed lines.
        #[arg(long)]
        strict: bool,
    },

    /// Disassemble a binary image.
    Disasm {
        /// Program image to list.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            stats,
            json,
        } => {
            init_tracing(if trace { 3 } else { cli.verbose });
            cmd_run(&file, config.as_deref(), trace, stats, json);
        }
        Commands::Asm {
            input,
            output,
            strict,
        } => {
            init_tracing(cli.verbose);
            cmd_asm(&input, &output, strict);
        }
        Commands::Disasm { file } => {
            init_tracing(cli.verbose);
            cmd_disasm(&file);
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` overrides the level chosen by the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("[!] FATAL: {msg}");
    process::exit(1);
}

/// Loads the image, runs it to completion, and reports the outcome.
///
/// Interrupt output goes to stdout (stderr with `--json`); status lines go to stderr. Any
/// fatal condition is printed and the process exits with code 1.
fn cmd_run(file: &Path, config: Option<&Path>, trace: bool, stats: bool, json: bool) {
    let mut config = match config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| fatal(e)),
        None => Config::default(),
    };
    if trace {
        config.general.trace_instructions = true;
    }

    let image = loader::load_binary(file).unwrap_or_else(|e| fatal(e));
    eprintln!("[*] Running {} ({} bytes)", file.display(), image.len());

    let mut sim = Simulator::new(&config);
    if json {
        sim.cpu.console = Console::Stderr;
    }
    if let Err(e) = sim.load_program(&image) {
        fatal(e);
    }

    match sim.run() {
        Ok(summary) => {
            eprintln!(
                "[*] Halted at pc {} after {} cycles ({} instructions)",
                summary.pc, summary.cycles, summary.instructions_retired
            );
            if json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(text) => println!("{text}"),
                    Err(e) => fatal(e),
                }
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            eprintln!("    pc={} cycle={}", sim.cpu.pc, sim.cpu.stats.cycles);
            if stats {
                sim.cpu.stats.print();
            }
            process::exit(1);
        }
    }

    if stats {
        sim.cpu.stats.print();
    }
}

/// Assembles `input` into `output`, reporting every skipped line.
fn cmd_asm(input: &Path, output: &Path, strict: bool) {
    let source = fs::read_to_string(input)
        .unwrap_or_else(|e| fatal(format!("could not read '{}': {e}", input.display())));

    let assembly = asm::assemble(&source);
    for diag in &assembly.diagnostics {
        eprintln!("{}: {diag}", input.display());
    }
    if strict && !assembly.is_clean() {
        fatal(format!(
            "{} line(s) rejected, no output written",
            assembly.diagnostics.len()
        ));
    }

    if let Err(e) = fs::write(output, &assembly.bytes) {
        fatal(format!("could not write '{}': {e}", output.display()));
    }
    eprintln!(
        "[*] Wrote {} bytes to {}",
        assembly.bytes.len(),
        output.display()
    );
}

fn cmd_disasm(file: &Path) {
    let image = loader::load_binary(file).unwrap_or_else(|e| fatal(e));
    for line in disassemble_image(&image) {
        let bytes: Vec<String> = line.bytes.iter().map(|b| format!("{b:02X}")).collect();
        println!("{:4}: {:<12} {}", line.offset, bytes.join(" "), line.text);
    }
}
