//! Electric-propulsion performance library.
//!
//! This crate evaluates closed-form performance models of gridded ion engines
//! and Hall-effect thrusters and expands them over parametric sweep grids.
//! Higher-level consumers (the CLI, plotting front ends) should depend on the
//! functions exported here instead of reimplementing the physics.
//!

#![deny(warnings)]

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod gas;
pub mod model;
pub mod output;
pub mod record;
pub mod summary;
pub mod sweep;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::SweepConfig;
pub use device::{
    DeviceConfig, HallPowerModel, HallThrusterConfig, IonEngineConfig, Spacing, SweepAxis,
    ThrusterFamily,
};
pub use error::{Error, Result};
pub use gas::{Gas, GasTable};
pub use model::{Divergence, DivergenceModel, SpaceChargeLimit};
pub use output::{default_file_name, write_csv, write_csv_file, write_json, write_json_file};
pub use record::{HallRecord, IonRecord, PerformanceTable, HALL_COLUMNS, ION_COLUMNS};
pub use summary::{summarize, GasSummary};
pub use sweep::{generate, generate_hall, generate_ion, planned_rows};
