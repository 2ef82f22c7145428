//! QROM Command-Line Interface
//!
//! Synthesizes QROM circuits as OpenQASM 2.0, counts T resources of QASM
//! files, sweeps single- against dual-ended costs and checks every
//! synthesizer variant on the reference simulator.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{count, sweep, synth, verify, version};
use qrom_synth::{GadgetPolicy, QromConfig, Variant};

/// qrom - QROM synthesis and Clifford+T resource counting
#[derive(Parser)]
#[command(name = "qrom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a QROM circuit and print it as OpenQASM 2.0
    Synth {
        /// Address width in bits
        #[arg(short, long)]
        control: u32,

        /// Target register width
        #[arg(short, long, env = "QROM_TARGET", default_value = "1")]
        target: u32,

        /// Use start/end gadgets instead of plain Toffolis
        #[arg(long)]
        succinct: bool,

        /// Synthesizer variant: single, dual, layered or distributed
        #[arg(long, default_value = "single")]
        variant: Variant,

        /// Address bits the distributed variant splits into blocks
        #[arg(long, default_value = "0")]
        spread: u32,

        /// Address preloaded into the address register
        #[arg(short, long, default_value = "0")]
        address: u64,

        /// Per-address data bits, e.g. 0110
        #[arg(short, long)]
        data: Option<String>,

        /// Load uniformly random data instead of --data
        #[arg(long, conflicts_with = "data")]
        random: bool,

        /// Seed for --random (random if omitted)
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Decompose Toffolis into Clifford+T
        #[arg(long)]
        lower: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Count T gates and T-depth of a circuit
    Count {
        /// Input file (OpenQASM 2.0 or JSON program)
        #[arg(short, long)]
        input: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare single- and dual-ended T resources over a range of sizes
    Sweep {
        /// First address width
        #[arg(long, default_value = "1")]
        start: u32,

        /// Last address width (inclusive)
        #[arg(long, default_value = "6")]
        end: u32,

        /// Target register width
        #[arg(short, long, env = "QROM_TARGET", default_value = "1")]
        target: u32,

        /// Use plain Toffolis instead of start/end gadgets
        #[arg(long)]
        plain: bool,

        /// Decompose Toffolis before counting
        #[arg(long)]
        lower: bool,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every synthesizer variant on the simulator
    Verify {
        /// Address widths to check
        #[arg(long, value_delimiter = ',', default_value = "2,3")]
        sizes: Vec<u32>,

        /// Random data strings per size
        #[arg(long, default_value = "3")]
        trials: u32,

        /// Seed for the data generator (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Check start/end gadget circuits instead of plain ones
        #[arg(long)]
        succinct: bool,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Synth {
            control,
            target,
            succinct,
            variant,
            spread,
            address,
            data,
            random,
            seed,
            lower,
            output,
        } => {
            let mut config = QromConfig::new(control, target)
                .with_policy(GadgetPolicy::from_succinct(succinct))
                .with_variant(variant)
                .with_spread(spread)
                .with_address(address);
            if let Some(data) = data {
                config = config.with_data(data);
            }
            let seed = random.then(|| seed.unwrap_or_else(rand::random));
            synth::execute(config, seed, lower, output.as_deref())
        }

        Commands::Count { input, json } => count::execute(&input, json),

        Commands::Sweep {
            start,
            end,
            target,
            plain,
            lower,
            json,
        } => sweep::execute(
            start,
            end,
            target,
            GadgetPolicy::from_succinct(!plain),
            lower,
            json,
        ),

        Commands::Verify {
            sizes,
            trials,
            seed,
            succinct,
        } => verify::execute(&sizes, trials, seed, GadgetPolicy::from_succinct(succinct)),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
