//! RV32IM functional simulator CLI.
//!
//! This binary is the driver around the core: it performs:
//! 1. **Flag parsing:** Binary path, embedded mode, optional JSON config, optional instruction budget.
//! 2. **Binary loading:** Reads the flat image in full before the loop starts.
//! 3. **Run driving:** Steps the CPU to completion (or to the budget).
//! 4. **State dumping:** Prints the final register and memory contents as a hexadecimal dump.
//!
//! Exit codes: 0 for a normal halt, 1 for a fault (diagnostic on stderr),
//! 2 when the instruction budget ran out first.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32sim_core::sim::loader;
use rv32sim_core::{Config, Cpu, State};

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    author,
    version,
    about = "RISC-V RV32IM functional simulator",
    long_about = "Execute a flat binary of RV32IM machine code and print the final\n\
                  register and memory state.\n\n\
                  Examples:\n  \
                  rv32sim program.bin\n  \
                  rv32sim -E program.bin\n  \
                  rv32sim --config sim.json --max-steps 1000000 program.bin"
)]
struct Cli {
    /// Flat binary image of raw RV32 instruction words.
    binary: PathBuf,

    /// Run with RV32E: 16 registers and a 64 KiB memory ceiling.
    #[arg(short = 'E', long)]
    embedded: bool,

    /// JSON configuration file; flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort the run after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = cli.config.as_ref().map_or_else(Config::default, |path| {
        let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: could not read config '{}': {}", path.display(), e);
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: invalid config '{}': {}", path.display(), e);
            process::exit(1);
        })
    });
    if cli.embedded {
        config.embedded = true;
    }

    let program = loader::load_binary(&cli.binary).unwrap_or_else(|e| {
        eprintln!(
            "[!] FATAL: could not read file '{}': {}",
            cli.binary.display(),
            e
        );
        process::exit(1);
    });

    let mut cpu = Cpu::new(&config, program);
    let code = drive(&mut cpu, cli.max_steps);

    dump_registers(&cpu);
    dump_memory(&cpu);

    process::exit(code);
}

/// Steps the CPU to a terminal state or to the instruction budget and maps
/// the outcome to an exit code.
fn drive(cpu: &mut Cpu, max_steps: Option<u64>) -> i32 {
    if let Some(budget) = max_steps {
        let mut steps = 0;
        while *cpu.state() == State::Running && steps < budget {
            let _ = cpu.step();
            steps += 1;
        }
    } else {
        let _ = cpu.run();
    }

    match cpu.state() {
        State::Halted => 0,
        State::Faulted(fault) => {
            eprintln!("[!] FATAL: {fault}");
            1
        }
        State::Running => {
            eprintln!("[!] instruction budget exhausted at pc={:#010x}", cpu.pc);
            2
        }
    }
}

/// Prints every register as `x<NN>: 0x<value>`, four to a row.
fn dump_registers(cpu: &Cpu) {
    println!("REGISTERS");
    for (idx, val) in cpu.regs.iter().enumerate() {
        print!("x{idx:02}: {val:#10x} ");
        if (idx + 1) % 4 == 0 {
            println!();
        }
    }
}

/// Prints the written memory extent as `<address>: 0x<word>`, four to a
/// row, with words reconstructed little-endian.
fn dump_memory(cpu: &Cpu) {
    println!("\nMEMORY");
    let mut printed = 0;
    for (addr, word) in cpu.mem.words() {
        print!("{addr:#10x}: {word:#10x} ");
        printed += 1;
        if printed % 4 == 0 {
            println!();
        }
    }
    if printed % 4 != 0 {
        println!();
    }
}
