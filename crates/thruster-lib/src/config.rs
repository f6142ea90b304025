//! Sweep configuration documents.
//!
//! [`SweepConfig`] mirrors the JSON document on disk. It is deserialised for
//! shape only; [`SweepConfig::devices`] converts each block into a validated
//! [`DeviceConfig`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::device::{
    DeviceConfig, HallPowerModel, HallThrusterConfig, IonEngineConfig, Spacing, SweepAxis,
    ThrusterFamily,
};
use crate::error::{Error, Result};
use crate::gas::GasTable;
use crate::model::{Divergence, DivergenceModel};

/// Top-level sweep configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Gases to sweep, in output order.
    pub gases: Vec<String>,
    /// Optional gas masses in amu; replaces the built-in gas table when present.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub gas_masses: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ion_engine: Option<IonEngineSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hall_thruster: Option<HallThrusterSection>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            gases: vec![
                "Xenon".to_string(),
                "Krypton".to_string(),
                "Argon".to_string(),
            ],
            gas_masses: BTreeMap::new(),
            ion_engine: Some(IonEngineSection::default()),
            hall_thruster: Some(HallThrusterSection::default()),
        }
    }
}

impl SweepConfig {
    /// Load a configuration document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Gas table implied by the document: `gas_masses` when present, else built-in.
    pub fn gas_table(&self) -> Result<GasTable> {
        if self.gas_masses.is_empty() {
            Ok(GasTable::builtin())
        } else {
            GasTable::from_masses_amu(&self.gas_masses)
        }
    }

    /// Validated device configuration for one family, if its block is present.
    pub fn device(&self, family: ThrusterFamily) -> Result<Option<DeviceConfig>> {
        match family {
            ThrusterFamily::Ion => self
                .ion_engine
                .as_ref()
                .map(|section| section.to_config().map(DeviceConfig::Ion))
                .transpose(),
            ThrusterFamily::Hall => self
                .hall_thruster
                .as_ref()
                .map(|section| section.to_config().map(DeviceConfig::Hall))
                .transpose(),
        }
    }

    /// Validated device configurations for every present block, ion first.
    pub fn devices(&self) -> Result<Vec<DeviceConfig>> {
        let mut devices = Vec::new();
        for family in [ThrusterFamily::Ion, ThrusterFamily::Hall] {
            if let Some(device) = self.device(family)? {
                devices.push(device);
            }
        }
        Ok(devices)
    }
}

/// `divergence` block shared by both device sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceSection {
    /// Model selector: `gaussian`, `cos` or `cone`.
    pub model: String,
    #[serde(alias = "sigma_deg")]
    pub param_deg: f64,
}

impl DivergenceSection {
    fn to_divergence(&self, family: ThrusterFamily) -> Result<Divergence> {
        let model = self
            .model
            .parse::<DivergenceModel>()
            .map_err(|err| match err {
                Error::Configuration { message, .. } => Error::configuration(
                    Some(family),
                    format!("{}.divergence.model", family.config_key()),
                    message,
                ),
                other => other,
            })?;
        Ok(Divergence {
            model,
            param_deg: self.param_deg,
        })
    }
}

/// `ion_engine.geometry` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Grid area (m²).
    #[serde(rename = "A_grid")]
    pub area: f64,
    /// Grid gap (m).
    #[serde(rename = "d")]
    pub gap: f64,
    /// Grid optical transparency.
    #[serde(rename = "tau_open", alias = "tau_geom")]
    pub transparency: f64,
}

/// `ion_engine.losses` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLosses {
    pub tau_trans: f64,
}

/// `ion_engine` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IonEngineSection {
    #[serde(rename = "Va_range")]
    pub va_range: [f64; 2],
    #[serde(rename = "Va_steps")]
    pub va_steps: usize,
    #[serde(rename = "Va_spacing", default)]
    pub va_spacing: Spacing,
    #[serde(rename = "Ib_range")]
    pub ib_range: [f64; 2],
    #[serde(rename = "Ib_steps")]
    pub ib_steps: usize,
    #[serde(rename = "Ib_spacing", default)]
    pub ib_spacing: Spacing,
    pub geometry: GridGeometry,
    pub losses: GridLosses,
    pub divergence: DivergenceSection,
}

impl Default for IonEngineSection {
    fn default() -> Self {
        Self {
            va_range: [500.0, 4000.0],
            va_steps: 20,
            va_spacing: Spacing::Linear,
            ib_range: [0.1, 5.0],
            ib_steps: 15,
            ib_spacing: Spacing::Linear,
            geometry: GridGeometry {
                area: 0.01,
                gap: 0.002,
                transparency: 0.7,
            },
            losses: GridLosses { tau_trans: 0.95 },
            divergence: DivergenceSection {
                model: "gaussian".to_string(),
                param_deg: 5.0,
            },
        }
    }
}

impl IonEngineSection {
    /// Convert into a validated [`IonEngineConfig`].
    pub fn to_config(&self) -> Result<IonEngineConfig> {
        let config = IonEngineConfig {
            voltage: axis(self.va_range, self.va_steps, self.va_spacing),
            beam_current: axis(self.ib_range, self.ib_steps, self.ib_spacing),
            grid_transparency: self.geometry.transparency,
            transmission: self.losses.tau_trans,
            divergence: self.divergence.to_divergence(ThrusterFamily::Ion)?,
            grid_area: self.geometry.area,
            grid_gap: self.geometry.gap,
        };
        config.validate()?;
        Ok(config)
    }
}

/// `hall_thruster` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallThrusterSection {
    #[serde(rename = "Vd_range")]
    pub vd_range: [f64; 2],
    #[serde(rename = "Vd_steps")]
    pub vd_steps: usize,
    #[serde(rename = "Vd_spacing", default)]
    pub vd_spacing: Spacing,
    pub mdot_range: [f64; 2],
    pub mdot_steps: usize,
    #[serde(default)]
    pub mdot_spacing: Spacing,
    pub eta_acc: f64,
    pub tau_prop: f64,
    #[serde(default)]
    pub power_model: HallPowerModel,
    pub divergence: DivergenceSection,
}

impl Default for HallThrusterSection {
    fn default() -> Self {
        Self {
            vd_range: [200.0, 800.0],
            vd_steps: 20,
            vd_spacing: Spacing::Linear,
            mdot_range: [1e-6, 10e-6],
            mdot_steps: 15,
            mdot_spacing: Spacing::Linear,
            eta_acc: 0.6,
            tau_prop: 0.85,
            power_model: HallPowerModel::Stoichiometric,
            divergence: DivergenceSection {
                model: "cos".to_string(),
                param_deg: 30.0,
            },
        }
    }
}

impl HallThrusterSection {
    /// Convert into a validated [`HallThrusterConfig`].
    pub fn to_config(&self) -> Result<HallThrusterConfig> {
        let config = HallThrusterConfig {
            discharge_voltage: axis(self.vd_range, self.vd_steps, self.vd_spacing),
            mass_flow: axis(self.mdot_range, self.mdot_steps, self.mdot_spacing),
            acceleration_efficiency: self.eta_acc,
            propellant_utilization: self.tau_prop,
            divergence: self.divergence.to_divergence(ThrusterFamily::Hall)?,
            power_model: self.power_model,
        };
        config.validate()?;
        Ok(config)
    }
}

fn axis(range: [f64; 2], steps: usize, spacing: Spacing) -> SweepAxis {
    SweepAxis {
        min: range[0],
        max: range[1],
        steps,
        spacing,
    }
}
