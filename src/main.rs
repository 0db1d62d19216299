use clap::{Args, Parser, Subcommand};
use qreg::compiler;
use qreg::config::{SimulationConfig, DEFAULT_CIRCUIT, DEFAULT_NUM_QUBITS};
use qreg::core::{basis_label, Register, ERR_THRESH};
use std::error::Error;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "qreg", version, about = "Dense state-vector qubit register simulator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a circuit file and print the final state
    Run(RunArgs),
    /// Run the built-in demonstration circuits
    Demo,
}

#[derive(Args)]
struct RunArgs {
    /// Circuit file, one instruction per line
    #[arg(default_value = DEFAULT_CIRCUIT)]
    circuit: PathBuf,

    /// Number of qubits in the register
    #[arg(short = 'n', long = "qubits", default_value_t = DEFAULT_NUM_QUBITS)]
    num_qubits: usize,

    /// Seed for reproducible measurements
    #[arg(long)]
    seed: Option<u64>,

    /// Also print every non-zero amplitude
    #[arg(long)]
    amplitudes: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            circuit: PathBuf::from(DEFAULT_CIRCUIT),
            num_qubits: DEFAULT_NUM_QUBITS,
            seed: None,
            amplitudes: false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None => cli_run(RunArgs::default()),
        Some(Commands::Run(args)) => cli_run(args),
        Some(Commands::Demo) => run_all_demos(),
    };
    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log level used when RUST_LOG is unset.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ── CLI ───────────────────────────────────────────────────────────────────

fn cli_run(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let mut config = SimulationConfig::new()
        .with_num_qubits(args.num_qubits)
        .with_circuit(args.circuit);
    config.seed = args.seed;

    let mut register = config.register()?;
    let program = compiler::load_program(&config.circuit, config.num_qubits)?;
    let result = compiler::execute(&program, &mut register)?;

    println!("{}", result.readout);

    if args.amplitudes {
        println!();
        for (i, a) in result.amplitudes.iter().enumerate() {
            if a.abs() > ERR_THRESH {
                println!("  |{}>  {a:+.6}", basis_label(i, result.num_qubits));
            }
        }
        if let Some(probs) = &result.pre_measurement_probs {
            println!("  before first measurement:");
            for (label, p) in result.significant_states(probs, ERR_THRESH) {
                println!("    |{label}>  {p:.6}");
            }
        }
        for m in &result.measurements {
            println!("  measure @{}  →  |{}>", m.step + 1, m.label);
        }
    }
    Ok(())
}

// ── Demos ─────────────────────────────────────────────────────────────────

fn run_all_demos() -> Result<(), Box<dyn Error>> {
    demo_single_qubit()?;
    demo_lecture_notes()?;
    demo_five_qubit_circuits()?;
    demo_measurement()?;
    Ok(())
}

fn demo_single_qubit() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 1: Single Qubit ━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut reg = Register::with_seed(1, 0)?;
    println!("  initial      {reg}");
    reg.not(1)?;
    println!("  not 1        {reg}");
    reg.reset();
    reg.hadamard(1)?;
    println!("  hadamard 1   {reg}");
    reg.z(1)?;
    println!("  z 1          {reg}");
    reg.hadamard(1)?;
    println!("  hadamard 1   {reg}");
    println!();
    Ok(())
}

fn demo_lecture_notes() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 2: Two-Qubit Interference ━━━━━━━━━━━━━━━");
    let source = "hadamard 1\ncnot 1 2\nnot 2\nhadamard 1";
    let mut reg = Register::with_seed(2, 0)?;
    let program = compiler::parse_source(source, 2)?;
    let result = compiler::execute(&program, &mut reg)?;
    for instr in &program.instructions {
        println!("  {instr}");
    }
    println!("  → {}", result.readout);
    println!();
    Ok(())
}

fn demo_five_qubit_circuits() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 3: Five-Qubit Gates ━━━━━━━━━━━━━━━━━━━━━");
    let circuits: &[(&str, &str)] = &[
        ("not", "not 1"),
        ("cnot", "not 1\ncnot 1 2"),
        ("swap", "not 1\nswap 1 2"),
        ("ccnot", "not 1\nnot 2\nccnot 1 2 3"),
        ("cswap", "not 1\nnot 3\ncswap 1 2 3"),
    ];
    for (name, source) in circuits {
        let mut reg = Register::with_seed(5, 0)?;
        let result = compiler::run(source, &mut reg)?;
        println!("  {name:<6} {}", result.readout);
    }
    println!();
    Ok(())
}

fn demo_measurement() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 4: Bell Pair Sampling ━━━━━━━━━━━━━━━━━━━");
    let mut counts = [0u32; 4];
    let mut reg = Register::with_seed(2, 2024)?;
    for _ in 0..1000 {
        reg.reset();
        reg.hadamard(1)?.cnot(1, 2)?;
        counts[reg.measure()?] += 1;
    }
    println!(
        "  1000 shots:  |00>={} |01>={} |10>={} |11>={}",
        counts[0], counts[1], counts[2], counts[3]
    );
    println!();
    Ok(())
}
