mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::sweep::{FamilySelection, TableFormat};
use commands::SweepContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Electric-propulsion performance sweeps")]
struct Cli {
    /// Sweep configuration file (JSON). Falls back to THRUSTER_SWEEP_CONFIG, then
    /// built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gas property table (CSV with name, mass_amu and optional charge_state).
    #[arg(long = "gas-data", global = true)]
    gas_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the configured sweeps and write one table per thruster family.
    Sweep {
        /// Which family to sweep.
        #[arg(long, value_enum, default_value_t = FamilySelection::All)]
        family: FamilySelection,
        /// Directory receiving the result tables.
        #[arg(long = "output-dir", default_value = "output")]
        output_dir: PathBuf,
        /// Table format.
        #[arg(long, value_enum, default_value_t = TableFormat::Csv)]
        format: TableFormat,
    },
    /// Evaluate a single operating point.
    Evaluate {
        #[command(subcommand)]
        target: EvaluateTarget,
    },
    /// List the gases available to the sweep.
    Gases,
}

#[derive(Subcommand, Debug)]
enum EvaluateTarget {
    /// Gridded ion engine at acceleration voltage and beam current.
    Ion {
        #[arg(long)]
        gas: String,
        /// Acceleration voltage (V).
        #[arg(long, allow_negative_numbers = true)]
        va: f64,
        /// Beam current (A).
        #[arg(long, allow_negative_numbers = true)]
        ib: f64,
    },
    /// Hall thruster at discharge voltage and anode mass flow.
    Hall {
        #[arg(long)]
        gas: String,
        /// Discharge voltage (V).
        #[arg(long, allow_negative_numbers = true)]
        vd: f64,
        /// Anode mass flow (kg/s).
        #[arg(long, allow_negative_numbers = true)]
        mdot: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let context = SweepContext::load(cli.config.as_deref(), cli.gas_data.as_deref())?;

    match cli.command {
        Command::Sweep {
            family,
            output_dir,
            format,
        } => commands::sweep::handle_sweep(&context, family, &output_dir, format),
        Command::Evaluate { target } => match target {
            EvaluateTarget::Ion { gas, va, ib } => {
                commands::evaluate::handle_evaluate_ion(&context, &gas, va, ib)
            }
            EvaluateTarget::Hall { gas, vd, mdot } => {
                commands::evaluate::handle_evaluate_hall(&context, &gas, vd, mdot)
            }
        },
        Command::Gases => commands::gases::handle_list_gases(&context),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
