//! Hall-effect thruster performance model.
//!
//! No space-charge limit applies: the quasi-neutral plume of a Hall thruster
//! is not bounded by a grid gap, so records carry no perveance margin.

use crate::constants::STANDARD_GRAVITY;
use crate::device::{HallPowerModel, HallThrusterConfig, ThrusterFamily};
use crate::error::Result;
use crate::gas::Gas;
use crate::record::HallRecord;

use super::{require_non_negative, thrust_efficiency};

/// Evaluate a Hall thruster at discharge voltage `voltage` (V) and anode mass
/// flow `mass_flow` (kg/s).
///
/// - exhaust velocity `v_e0 = sqrt(η_acc·2qV/m)`
/// - axial thrust `T = mdot·τ_prop·v_e0·η_div`
/// - axial Isp `τ_prop·v_e0·η_div/g₀`
/// - electrical power per [`HallPowerModel`]
pub fn evaluate(
    config: &HallThrusterConfig,
    gas: &Gas,
    voltage: f64,
    mass_flow: f64,
) -> Result<HallRecord> {
    require_non_negative(ThrusterFamily::Hall, "Vd", voltage)?;
    require_non_negative(ThrusterFamily::Hall, "mdot", mass_flow)?;

    let charge_to_mass = gas.charge_to_mass();
    let exhaust_velocity =
        (config.acceleration_efficiency * 2.0 * charge_to_mass * voltage).sqrt();
    let eta_div = config.divergence.efficiency(ThrusterFamily::Hall)?;

    let axial_velocity = config.propellant_utilization * exhaust_velocity * eta_div;
    let thrust = mass_flow * axial_velocity;
    let isp = axial_velocity / STANDARD_GRAVITY;
    let power = voltage * discharge_current(config, charge_to_mass, mass_flow);

    Ok(HallRecord {
        gas: gas.name.clone(),
        discharge_voltage: voltage,
        mass_flow,
        thrust_n: thrust,
        isp_s: isp,
        power_w: power,
        thrust_efficiency: thrust_efficiency(thrust, mass_flow, power),
    })
}

/// Equivalent discharge current (A) for a mass flow.
fn discharge_current(config: &HallThrusterConfig, charge_to_mass: f64, mass_flow: f64) -> f64 {
    let stoichiometric = mass_flow * charge_to_mass;
    match config.power_model {
        HallPowerModel::Stoichiometric => stoichiometric,
        HallPowerModel::AccelerationLoss => stoichiometric / config.acceleration_efficiency,
    }
}
