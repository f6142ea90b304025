//! Performance records produced by the models and collected by the sweep.
//!
//! Serialized field names are the tabular column contract consumed by the
//! plotting tools and must not change.

use serde::{Deserialize, Serialize};

use crate::device::ThrusterFamily;

/// Column order of ion engine tables.
pub const ION_COLUMNS: [&str; 8] = [
    "gas",
    "Va",
    "Ib",
    "T_axial",
    "Isp_ax",
    "P_elec",
    "eta_thrust",
    "perveance_margin",
];

/// Column order of Hall thruster tables.
pub const HALL_COLUMNS: [&str; 7] = [
    "gas", "Vd", "mdot", "T_axial", "Isp_ax", "P_elec", "eta_thrust",
];

/// Ion engine performance at one operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IonRecord {
    pub gas: String,
    /// Acceleration voltage (V).
    #[serde(rename = "Va")]
    pub acceleration_voltage: f64,
    /// Operating beam current (A).
    #[serde(rename = "Ib")]
    pub beam_current: f64,
    /// Axial thrust (N).
    #[serde(rename = "T_axial")]
    pub thrust_n: f64,
    /// Axial specific impulse (s).
    #[serde(rename = "Isp_ax")]
    pub isp_s: f64,
    /// Electrical power (W).
    #[serde(rename = "P_elec")]
    pub power_w: f64,
    #[serde(rename = "eta_thrust")]
    pub thrust_efficiency: f64,
    /// Space-charge current limit over beam current.
    pub perveance_margin: f64,
}

impl IonRecord {
    /// Whether the operating point exceeds the space-charge limit.
    pub fn is_space_charge_limited(&self) -> bool {
        self.beam_current > 0.0 && self.perveance_margin < 1.0
    }
}

/// Hall thruster performance at one operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallRecord {
    pub gas: String,
    /// Discharge voltage (V).
    #[serde(rename = "Vd")]
    pub discharge_voltage: f64,
    /// Anode mass flow (kg/s).
    #[serde(rename = "mdot")]
    pub mass_flow: f64,
    #[serde(rename = "T_axial")]
    pub thrust_n: f64,
    #[serde(rename = "Isp_ax")]
    pub isp_s: f64,
    #[serde(rename = "P_elec")]
    pub power_w: f64,
    #[serde(rename = "eta_thrust")]
    pub thrust_efficiency: f64,
}

/// Ordered records of one sweep, one table per thruster family.
#[derive(Debug, Clone, PartialEq)]
pub enum PerformanceTable {
    Ion(Vec<IonRecord>),
    Hall(Vec<HallRecord>),
}

impl PerformanceTable {
    pub fn family(&self) -> ThrusterFamily {
        match self {
            PerformanceTable::Ion(_) => ThrusterFamily::Ion,
            PerformanceTable::Hall(_) => ThrusterFamily::Hall,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PerformanceTable::Ion(rows) => rows.len(),
            PerformanceTable::Hall(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in output order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            PerformanceTable::Ion(_) => &ION_COLUMNS,
            PerformanceTable::Hall(_) => &HALL_COLUMNS,
        }
    }

    pub fn as_ion(&self) -> Option<&[IonRecord]> {
        match self {
            PerformanceTable::Ion(rows) => Some(rows),
            PerformanceTable::Hall(_) => None,
        }
    }

    pub fn as_hall(&self) -> Option<&[HallRecord]> {
        match self {
            PerformanceTable::Hall(rows) => Some(rows),
            PerformanceTable::Ion(_) => None,
        }
    }
}
