//! Gridded ion engine performance model.

use crate::constants::STANDARD_GRAVITY;
use crate::device::{IonEngineConfig, ThrusterFamily};
use crate::error::Result;
use crate::gas::Gas;
use crate::record::IonRecord;

use super::{require_non_negative, space_charge, thrust_efficiency};

/// Evaluate an ion engine at acceleration voltage `voltage` (V) and beam current
/// `beam_current` (A).
///
/// - effective beam current `I_eff = I_b·τ_open·τ_trans`
/// - exhaust velocity `v_e0 = sqrt(2qV/m)`
/// - axial thrust `T = I_eff·sqrt(2mV/q)·η_div`, i.e. `mdot·v_e0·η_div` with `mdot = I_eff·m/q`
/// - axial Isp `v_e0·η_div/g₀`, electrical power `V·I_b`
///
/// Device fractions are assumed validated; negative voltage or current is a
/// [`crate::Error::PhysicsDomain`].
pub fn evaluate(
    config: &IonEngineConfig,
    gas: &Gas,
    voltage: f64,
    beam_current: f64,
) -> Result<IonRecord> {
    require_non_negative(ThrusterFamily::Ion, "Va", voltage)?;
    require_non_negative(ThrusterFamily::Ion, "Ib", beam_current)?;

    let charge = gas.charge_coulombs();
    let mass = gas.mass_kg;

    let effective_current = beam_current * config.grid_transparency * config.transmission;
    let exhaust_velocity = (2.0 * charge * voltage / mass).sqrt();
    let eta_div = config.divergence.efficiency(ThrusterFamily::Ion)?;

    let thrust = effective_current * (2.0 * mass * voltage / charge).sqrt() * eta_div;
    let isp = exhaust_velocity * eta_div / STANDARD_GRAVITY;
    let power = voltage * beam_current;
    let mass_flow = effective_current * mass / charge;

    let space_charge = space_charge::limit(
        voltage,
        config.grid_area,
        config.grid_gap,
        gas,
        beam_current,
    )?;

    Ok(IonRecord {
        gas: gas.name.clone(),
        acceleration_voltage: voltage,
        beam_current,
        thrust_n: thrust,
        isp_s: isp,
        power_w: power,
        thrust_efficiency: thrust_efficiency(thrust, mass_flow, power),
        perveance_margin: space_charge.margin,
    })
}
