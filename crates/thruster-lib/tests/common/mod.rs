//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use thruster_lib::{GasTable, SweepConfig};

/// Path to fixtures directory shared by the workspace tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The checked-in sweep configuration fixture.
#[allow(dead_code)]
pub fn fixture_config() -> SweepConfig {
    SweepConfig::from_path(&fixtures_dir().join("sweep_config.json"))
        .expect("load fixture sweep_config.json")
}

/// The checked-in gas data fixture.
#[allow(dead_code)]
pub fn fixture_gases() -> GasTable {
    GasTable::from_path(&fixtures_dir().join("gas_data.csv")).expect("load fixture gas_data.csv")
}
