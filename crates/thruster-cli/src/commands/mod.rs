// Handlers for the CLI subcommands. main.rs parses arguments, builds a
// `SweepContext` and dispatches here.

pub mod evaluate;
pub mod gases;
pub mod sweep;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use thruster_lib::{GasTable, SweepConfig, ThrusterFamily};

/// Environment variable naming a sweep configuration file.
pub const CONFIG_ENV: &str = "THRUSTER_SWEEP_CONFIG";

/// Resolved configuration and gas table shared by every subcommand.
#[derive(Debug)]
pub struct SweepContext {
    pub config: SweepConfig,
    pub gases: GasTable,
}

impl SweepContext {
    /// Load the configuration and gas table.
    ///
    /// Configuration: `--config`, then `THRUSTER_SWEEP_CONFIG`, then built-in
    /// defaults. Gases: `--gas-data`, then the configuration's `gas_masses`,
    /// then the built-in table.
    pub fn load(config_path: Option<&Path>, gas_data: Option<&Path>) -> Result<Self> {
        let config = match resolve_config_path(config_path) {
            Some(path) => {
                info!(path = %path.display(), "loading sweep configuration");
                SweepConfig::from_path(&path).with_context(|| {
                    format!("failed to load sweep configuration from {}", path.display())
                })?
            }
            None => {
                info!("no configuration given; using built-in defaults");
                SweepConfig::default()
            }
        };

        let gases = match gas_data {
            Some(path) => GasTable::from_path(path)
                .with_context(|| format!("failed to load gas data from {}", path.display()))?,
            None => config
                .gas_table()
                .context("invalid gas_masses in sweep configuration")?,
        };

        Ok(Self { config, gases })
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Error for a family whose block is absent from the configuration.
fn missing_block(family: ThrusterFamily) -> anyhow::Error {
    anyhow!("sweep configuration has no {} block", family.config_key())
}
