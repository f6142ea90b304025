// Test-only fixtures for `thruster-lib` unit tests.
#![allow(dead_code)]

use crate::device::{HallPowerModel, HallThrusterConfig, IonEngineConfig, SweepAxis};
use crate::gas::{Gas, GasTable};
use crate::model::Divergence;

/// Singly charged xenon (131.293 amu).
pub fn xenon() -> Gas {
    Gas::from_amu("Xenon", 131.293, 1)
}

/// Xenon/Krypton/Argon/Iodine, as shipped.
pub fn gas_table() -> GasTable {
    GasTable::builtin()
}

/// Ion engine reference fixture: τ_open 0.7, τ_trans 0.95, Gaussian 5°,
/// 0.01 m² grids 2 mm apart, swept 1000-3000 V × 1-3 A.
pub fn ion_config() -> IonEngineConfig {
    IonEngineConfig {
        voltage: SweepAxis::linear(1000.0, 3000.0, 3),
        beam_current: SweepAxis::linear(1.0, 3.0, 3),
        grid_transparency: 0.7,
        transmission: 0.95,
        divergence: Divergence::gaussian(5.0),
        grid_area: 0.01,
        grid_gap: 0.002,
    }
}

/// Hall thruster reference fixture: η_acc 0.6, τ_prop 0.85, 30° cosine cone,
/// swept 300-500 V × 3-7 mg/s.
pub fn hall_config() -> HallThrusterConfig {
    HallThrusterConfig {
        discharge_voltage: SweepAxis::linear(300.0, 500.0, 3),
        mass_flow: SweepAxis::linear(3e-6, 7e-6, 3),
        acceleration_efficiency: 0.6,
        propellant_utilization: 0.85,
        divergence: Divergence::cosine(30.0),
        power_model: HallPowerModel::Stoichiometric,
    }
}

/// Owned gas-name list for sweep calls.
pub fn gases(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
