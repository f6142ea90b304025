//! Parametric sweep generation.
//!
//! A sweep validates its device configuration and gas list up front, then
//! evaluates every gas × grid point in a fixed order: gases as listed, then the
//! voltage axis, then the current/mass-flow axis. The first error aborts the
//! whole sweep, so a table is either complete or not produced at all.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::device::{DeviceConfig, HallThrusterConfig, IonEngineConfig, ThrusterFamily};
use crate::error::{Error, Result};
use crate::gas::{Gas, GasTable};
use crate::model::{hall, ion};
use crate::record::{HallRecord, IonRecord, PerformanceTable};

/// Run the sweep for either thruster family.
pub fn generate(
    device: &DeviceConfig,
    gases: &[String],
    table: &GasTable,
) -> Result<PerformanceTable> {
    match device {
        DeviceConfig::Ion(config) => generate_ion(config, gases, table).map(PerformanceTable::Ion),
        DeviceConfig::Hall(config) => {
            generate_hall(config, gases, table).map(PerformanceTable::Hall)
        }
    }
}

/// Sweep an ion engine over acceleration voltage × beam current for each gas.
pub fn generate_ion(
    config: &IonEngineConfig,
    gases: &[String],
    table: &GasTable,
) -> Result<Vec<IonRecord>> {
    let family = ThrusterFamily::Ion;
    config.validate()?;
    let resolved = resolve_gases(family, gases, table)?;

    let voltages = config.voltage.points();
    let currents = config.beam_current.points();
    let total = resolved.len() * voltages.len() * currents.len();
    info!(%family, gases = resolved.len(), points = total, "starting sweep");

    let mut records = Vec::with_capacity(total);
    for gas in resolved {
        debug!(%family, gas = %gas.name, "evaluating gas");
        for &voltage in &voltages {
            for &current in &currents {
                records.push(ion::evaluate(config, gas, voltage, current)?);
            }
        }
    }

    let limited = records
        .iter()
        .filter(|record| record.is_space_charge_limited())
        .count();
    if limited > 0 {
        warn!(
            %family,
            limited,
            points = records.len(),
            "operating points exceed the space-charge limit"
        );
    }

    info!(%family, rows = records.len(), "sweep complete");
    Ok(records)
}

/// Sweep a Hall thruster over discharge voltage × mass flow for each gas.
pub fn generate_hall(
    config: &HallThrusterConfig,
    gases: &[String],
    table: &GasTable,
) -> Result<Vec<HallRecord>> {
    let family = ThrusterFamily::Hall;
    config.validate()?;
    let resolved = resolve_gases(family, gases, table)?;

    let voltages = config.discharge_voltage.points();
    let flows = config.mass_flow.points();
    let total = resolved.len() * voltages.len() * flows.len();
    info!(%family, gases = resolved.len(), points = total, "starting sweep");

    let mut records = Vec::with_capacity(total);
    for gas in resolved {
        debug!(%family, gas = %gas.name, "evaluating gas");
        for &voltage in &voltages {
            for &flow in &flows {
                records.push(hall::evaluate(config, gas, voltage, flow)?);
            }
        }
    }

    info!(%family, rows = records.len(), "sweep complete");
    Ok(records)
}

/// Expected row count of a sweep: gas count × product of step counts.
pub fn planned_rows(device: &DeviceConfig, gas_count: usize) -> usize {
    gas_count * device.points_per_gas()
}

/// Resolve the configured gas names, preserving their order.
fn resolve_gases<'a>(
    family: ThrusterFamily,
    gases: &[String],
    table: &'a GasTable,
) -> Result<Vec<&'a Gas>> {
    if gases.is_empty() {
        return Err(Error::configuration(
            Some(family),
            "gases",
            "at least one gas must be listed",
        ));
    }

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(gases.len());
    for name in gases {
        if !seen.insert(name.trim().to_lowercase()) {
            return Err(Error::configuration(
                Some(family),
                "gases",
                format!("gas '{name}' is listed more than once"),
            ));
        }
        resolved.push(table.get_or_suggest(name)?);
    }
    Ok(resolved)
}
