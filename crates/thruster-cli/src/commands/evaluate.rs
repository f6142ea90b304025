//! Single operating point evaluation.
//!
//! The configured device block supplies everything except the swept variables,
//! which come from the command line.

use anyhow::{Context, Result};

use thruster_cli::output::{render_hall_point, render_ion_point};
use thruster_cli::terminal::ColorPalette;
use thruster_lib::model::{hall, ion, space_charge};
use thruster_lib::ThrusterFamily;

use super::{missing_block, SweepContext};

/// Evaluate and print one ion engine operating point.
pub fn handle_evaluate_ion(
    context: &SweepContext,
    gas: &str,
    voltage: f64,
    beam_current: f64,
) -> Result<()> {
    let section = context
        .config
        .ion_engine
        .as_ref()
        .ok_or_else(|| missing_block(ThrusterFamily::Ion))?;
    let config = section.to_config()?;
    let gas = context.gases.get_or_suggest(gas)?;

    let record = ion::evaluate(&config, gas, voltage, beam_current)
        .context("failed to evaluate ion engine operating point")?;
    let limit = space_charge::limit(
        voltage,
        config.grid_area,
        config.grid_gap,
        gas,
        beam_current,
    )?;

    print!(
        "{}",
        render_ion_point(&record, &limit, &ColorPalette::detect())
    );
    Ok(())
}

/// Evaluate and print one Hall thruster operating point.
pub fn handle_evaluate_hall(
    context: &SweepContext,
    gas: &str,
    voltage: f64,
    mass_flow: f64,
) -> Result<()> {
    let section = context
        .config
        .hall_thruster
        .as_ref()
        .ok_or_else(|| missing_block(ThrusterFamily::Hall))?;
    let config = section.to_config()?;
    let gas = context.gases.get_or_suggest(gas)?;

    let record = hall::evaluate(&config, gas, voltage, mass_flow)
        .context("failed to evaluate Hall thruster operating point")?;

    print!("{}", render_hall_point(&record, &ColorPalette::detect()));
    Ok(())
}
