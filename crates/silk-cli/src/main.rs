//! silk CLI: simulation, benchmarking, and debugging.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "silk")]
#[command(version, about = "silk: mass-spring cloth grid simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation headlessly.
    Simulate {
        /// Cloth config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        frames: u32,

        /// Fixed timestep in seconds. Uses a wall-clock frame clock when omitted.
        #[arg(long)]
        dt: Option<f32>,

        /// Write every frame to this JSON file.
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Write a bincode snapshot of the final state to this file.
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Forward step, toggle, energy and parameter events to the log.
        #[arg(long)]
        telemetry: bool,

        /// Live parameter edit, e.g. `--set wind_z=8` (repeatable).
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = commands::parse_override)]
        overrides: Vec<(silk_solver::Parameter, f32)>,

        /// Frame before which the `--set` edits are applied.
        #[arg(long, default_value_t = 0)]
        set_at: u32,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (hanging_cloth, gusty_cloth, heavy_cloth, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: PathBuf,
    },

    /// Validate a cloth config (.toml) or mesh (.json).
    Validate {
        /// Path to config or mesh file.
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames,
            dt,
            export,
            snapshot,
            telemetry,
            overrides,
            set_at,
        } => commands::simulate(commands::SimulateArgs {
            config,
            frames,
            dt,
            export,
            snapshot,
            telemetry,
            overrides,
            set_at,
        }),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
