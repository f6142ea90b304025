//! Sweep command handler.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use thruster_cli::output::render_summary;
use thruster_cli::terminal::ColorPalette;
use thruster_lib::{
    default_file_name, generate, summarize, write_csv_file, write_json_file, DeviceConfig,
    PerformanceTable, ThrusterFamily,
};

use super::{missing_block, SweepContext};

/// Families selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilySelection {
    Ion,
    Hall,
    /// Every family present in the configuration.
    All,
}

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Csv,
    Json,
}

impl TableFormat {
    fn file_name(self, family: ThrusterFamily) -> String {
        match self {
            TableFormat::Csv => default_file_name(family),
            TableFormat::Json => format!("{}_sweep.json", family.slug()),
        }
    }
}

/// Run the selected sweeps, write their tables and print per-gas summaries.
///
/// Every selected device block is validated before the first sweep starts.
pub fn handle_sweep(
    context: &SweepContext,
    selection: FamilySelection,
    output_dir: &Path,
    format: TableFormat,
) -> Result<()> {
    let devices = select_devices(context, selection)?;
    let palette = ColorPalette::detect();

    for device in devices {
        let family = device.family();
        let table = generate(&device, &context.config.gases, &context.gases)
            .with_context(|| format!("{family} sweep failed"))?;

        let path = output_dir.join(format.file_name(family));
        write_table(&table, &path, format)
            .with_context(|| format!("failed to write {}", path.display()))?;

        print!(
            "{}",
            render_summary(family, &summarize(&table), &palette)
        );
        println!("  wrote {} rows to {}", table.len(), path.display());
    }
    Ok(())
}

fn select_devices(
    context: &SweepContext,
    selection: FamilySelection,
) -> Result<Vec<DeviceConfig>> {
    let family = match selection {
        FamilySelection::Ion => ThrusterFamily::Ion,
        FamilySelection::Hall => ThrusterFamily::Hall,
        FamilySelection::All => {
            let devices = context
                .config
                .devices()
                .context("invalid sweep configuration")?;
            if devices.is_empty() {
                anyhow::bail!(
                    "sweep configuration has neither an ion_engine nor a hall_thruster block"
                );
            }
            info!(count = devices.len(), "selected device configurations");
            return Ok(devices);
        }
    };

    let device = context
        .config
        .device(family)
        .context("invalid sweep configuration")?
        .ok_or_else(|| missing_block(family))?;
    Ok(vec![device])
}

fn write_table(table: &PerformanceTable, path: &Path, format: TableFormat) -> Result<()> {
    match format {
        TableFormat::Csv => write_csv_file(table, path)?,
        TableFormat::Json => write_json_file(table, path)?,
    };
    Ok(())
}
