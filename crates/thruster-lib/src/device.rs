//! Validated device configurations for the two thruster families.
//!
//! These are the typed counterparts of the `ion_engine` and `hall_thruster`
//! configuration blocks. They are validated once, before any model runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::divergence::Divergence;

/// Thruster family covered by the performance models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrusterFamily {
    Ion,
    Hall,
}

impl ThrusterFamily {
    /// Short identifier used in file names and command-line selectors.
    pub fn slug(self) -> &'static str {
        match self {
            ThrusterFamily::Ion => "ion",
            ThrusterFamily::Hall => "hall",
        }
    }

    /// Key of the family's block in the sweep configuration document.
    pub fn config_key(self) -> &'static str {
        match self {
            ThrusterFamily::Ion => "ion_engine",
            ThrusterFamily::Hall => "hall_thruster",
        }
    }
}

impl fmt::Display for ThrusterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ThrusterFamily::Ion => "ion engine",
            ThrusterFamily::Hall => "Hall thruster",
        };
        f.write_str(value)
    }
}

/// Point distribution along a swept axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// Evenly spaced values, both endpoints included.
    #[default]
    Linear,
    /// Geometrically spaced values, both endpoints included.
    Log,
}

/// One swept independent variable: an inclusive range and a point count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAxis {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
    pub spacing: Spacing,
}

impl SweepAxis {
    pub fn linear(min: f64, max: f64, steps: usize) -> Self {
        Self {
            min,
            max,
            steps,
            spacing: Spacing::Linear,
        }
    }

    pub fn log(min: f64, max: f64, steps: usize) -> Self {
        Self {
            min,
            max,
            steps,
            spacing: Spacing::Log,
        }
    }

    /// A single-point axis fixed at `value`.
    pub fn fixed(value: f64) -> Self {
        Self::linear(value, value, 1)
    }

    /// Validate the axis; `field` is the configuration key prefix, e.g. `Va`.
    pub fn validate(&self, family: ThrusterFamily, field: &str) -> Result<()> {
        let range_field = format!("{}.{field}_range", family.config_key());
        let steps_field = format!("{}.{field}_steps", family.config_key());

        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::configuration(
                Some(family),
                range_field,
                format!("bounds must be finite, got [{}, {}]", self.min, self.max),
            ));
        }

        if self.min < 0.0 {
            return Err(Error::configuration(
                Some(family),
                range_field,
                format!("bounds must not be negative, got [{}, {}]", self.min, self.max),
            ));
        }

        if self.min > self.max {
            return Err(Error::configuration(
                Some(family),
                range_field,
                format!(
                    "minimum must not exceed maximum, got [{}, {}]",
                    self.min, self.max
                ),
            ));
        }

        if self.steps < 1 {
            return Err(Error::configuration(
                Some(family),
                steps_field,
                format!("step count must be at least 1, got {}", self.steps),
            ));
        }

        if self.spacing == Spacing::Log && self.min <= 0.0 {
            return Err(Error::configuration(
                Some(family),
                range_field,
                format!(
                    "log spacing requires a positive minimum, got {}",
                    self.min
                ),
            ));
        }

        Ok(())
    }

    /// Grid values along the axis.
    ///
    /// `steps` points are produced with both endpoints included; a single step
    /// yields the range minimum only.
    pub fn points(&self) -> Vec<f64> {
        if self.steps <= 1 {
            return vec![self.min];
        }

        let last = (self.steps - 1) as f64;
        let mut points: Vec<f64> = match self.spacing {
            Spacing::Linear => {
                let span = self.max - self.min;
                (0..self.steps)
                    .map(|i| self.min + span * (i as f64 / last))
                    .collect()
            }
            Spacing::Log => {
                let (lo, hi) = (self.min.ln(), self.max.ln());
                (0..self.steps)
                    .map(|i| (lo + (hi - lo) * (i as f64 / last)).exp())
                    .collect()
            }
        };

        points[0] = self.min;
        points[self.steps - 1] = self.max;
        points
    }
}

/// How the Hall thruster's electrical power is estimated from mass flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HallPowerModel {
    /// `P = V_d · mdot·q/m_i`: discharge current equal to a fully ionized flow.
    #[default]
    Stoichiometric,
    /// `P = V_d · mdot·q/(m_i·η_acc)`: stoichiometric current inflated by acceleration losses.
    AccelerationLoss,
}

/// Gridded ion engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonEngineConfig {
    /// Acceleration voltage sweep (V).
    pub voltage: SweepAxis,
    /// Beam current sweep (A).
    pub beam_current: SweepAxis,
    /// Grid optical transparency τ_open.
    pub grid_transparency: f64,
    /// Transmission efficiency τ_trans.
    pub transmission: f64,
    pub divergence: Divergence,
    /// Grid area (m²).
    pub grid_area: f64,
    /// Grid gap (m).
    pub grid_gap: f64,
}

impl IonEngineConfig {
    pub fn validate(&self) -> Result<()> {
        let family = ThrusterFamily::Ion;
        self.voltage.validate(family, "Va")?;
        self.beam_current.validate(family, "Ib")?;
        check_fraction(family, "ion_engine.geometry.tau_open", self.grid_transparency)?;
        check_fraction(family, "ion_engine.losses.tau_trans", self.transmission)?;
        self.divergence.validate(family, "ion_engine.divergence")?;
        check_positive(family, "ion_engine.geometry.A_grid", self.grid_area)?;
        check_positive(family, "ion_engine.geometry.d", self.grid_gap)?;
        Ok(())
    }
}

/// Hall-effect thruster configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HallThrusterConfig {
    /// Discharge voltage sweep (V).
    pub discharge_voltage: SweepAxis,
    /// Anode mass flow sweep (kg/s).
    pub mass_flow: SweepAxis,
    /// Acceleration efficiency η_acc.
    pub acceleration_efficiency: f64,
    /// Propellant utilization τ_prop.
    pub propellant_utilization: f64,
    pub divergence: Divergence,
    pub power_model: HallPowerModel,
}

impl HallThrusterConfig {
    pub fn validate(&self) -> Result<()> {
        let family = ThrusterFamily::Hall;
        self.discharge_voltage.validate(family, "Vd")?;
        self.mass_flow.validate(family, "mdot")?;
        check_fraction(family, "hall_thruster.eta_acc", self.acceleration_efficiency)?;
        check_fraction(family, "hall_thruster.tau_prop", self.propellant_utilization)?;
        self.divergence.validate(family, "hall_thruster.divergence")?;
        Ok(())
    }
}

/// A device configuration of either family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceConfig {
    Ion(IonEngineConfig),
    Hall(HallThrusterConfig),
}

impl DeviceConfig {
    pub fn family(&self) -> ThrusterFamily {
        match self {
            DeviceConfig::Ion(_) => ThrusterFamily::Ion,
            DeviceConfig::Hall(_) => ThrusterFamily::Hall,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            DeviceConfig::Ion(config) => config.validate(),
            DeviceConfig::Hall(config) => config.validate(),
        }
    }

    /// Number of grid points per gas: the product of the swept step counts.
    pub fn points_per_gas(&self) -> usize {
        match self {
            DeviceConfig::Ion(config) => config.voltage.steps * config.beam_current.steps,
            DeviceConfig::Hall(config) => config.discharge_voltage.steps * config.mass_flow.steps,
        }
    }
}

impl From<IonEngineConfig> for DeviceConfig {
    fn from(config: IonEngineConfig) -> Self {
        DeviceConfig::Ion(config)
    }
}

impl From<HallThrusterConfig> for DeviceConfig {
    fn from(config: HallThrusterConfig) -> Self {
        DeviceConfig::Hall(config)
    }
}

fn check_fraction(family: ThrusterFamily, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(Error::configuration(
            Some(family),
            field,
            format!("must be within (0, 1], got {value}"),
        ));
    }
    Ok(())
}

fn check_positive(family: ThrusterFamily, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::configuration(
            Some(family),
            field,
            format!("must be a finite positive number, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{hall_config, ion_config};

    #[test]
    fn linear_axis_includes_both_endpoints() {
        let points = SweepAxis::linear(500.0, 4000.0, 8).points();
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], 500.0);
        assert_eq!(points[7], 4000.0);
        assert!((points[1] - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn single_step_axis_yields_minimum_only() {
        assert_eq!(SweepAxis::linear(1.0, 5.0, 1).points(), vec![1.0]);
        assert_eq!(SweepAxis::log(1.0, 5.0, 1).points(), vec![1.0]);
        assert_eq!(SweepAxis::fixed(3.0).points(), vec![3.0]);
    }

    #[test]
    fn log_axis_is_geometric() {
        let points = SweepAxis::log(0.1, 10.0, 3).points();
        assert_eq!(points, vec![0.1, points[1], 10.0]);
        assert!((points[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn axis_rejects_zero_steps_and_negative_bounds() {
        let err = SweepAxis::linear(0.0, 1.0, 0)
            .validate(ThrusterFamily::Ion, "Va")
            .expect_err("zero steps");
        assert!(err.to_string().contains("ion_engine.Va_steps"));

        let err = SweepAxis::linear(-5.0, 1.0, 3)
            .validate(ThrusterFamily::Hall, "Vd")
            .expect_err("negative bound");
        assert!(err.to_string().contains("hall_thruster.Vd_range"));

        let err = SweepAxis::linear(2.0, 1.0, 3)
            .validate(ThrusterFamily::Hall, "mdot")
            .expect_err("inverted range");
        assert!(err.to_string().contains("minimum must not exceed maximum"));
    }

    #[test]
    fn log_axis_requires_positive_minimum() {
        let err = SweepAxis::log(0.0, 1.0, 4)
            .validate(ThrusterFamily::Ion, "Ib")
            .expect_err("log from zero");
        assert!(err.to_string().contains("log spacing"));
    }

    #[test]
    fn ion_config_rejects_fraction_outside_unit_interval() {
        let mut config = ion_config();
        config.grid_transparency = 1.2;
        let err = config.validate().expect_err("transparency > 1");
        match err {
            Error::Configuration { family, field, .. } => {
                assert_eq!(family, Some(ThrusterFamily::Ion));
                assert_eq!(field, "ion_engine.geometry.tau_open");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let mut config = ion_config();
        config.transmission = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn ion_config_rejects_non_positive_geometry() {
        let mut config = ion_config();
        config.grid_gap = 0.0;
        let err = config.validate().expect_err("zero gap");
        assert!(err.to_string().contains("ion_engine.geometry.d"));
    }

    #[test]
    fn hall_config_rejects_bad_efficiencies_and_divergence() {
        let mut config = hall_config();
        config.acceleration_efficiency = 1.5;
        let err = config.validate().expect_err("eta_acc > 1");
        assert!(err.to_string().contains("hall_thruster.eta_acc"));

        let mut config = hall_config();
        config.divergence = Divergence::cosine(-3.0);
        let err = config.validate().expect_err("negative angle");
        assert!(err
            .to_string()
            .contains("hall_thruster.divergence.param_deg"));
    }

    #[test]
    fn points_per_gas_is_product_of_steps() {
        let mut config = ion_config();
        config.voltage = SweepAxis::linear(500.0, 4000.0, 4);
        config.beam_current = SweepAxis::linear(0.5, 3.0, 6);
        assert_eq!(DeviceConfig::from(config).points_per_gas(), 24);
    }
}
