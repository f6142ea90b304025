//! Space-charge (Child-Langmuir) current limit for a gridded accelerator gap.

use crate::constants::VACUUM_PERMITTIVITY;
use crate::device::ThrusterFamily;
use crate::error::{Error, Result};
use crate::gas::Gas;

use super::require_non_negative;

/// Space-charge limit of a grid geometry at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceChargeLimit {
    /// Child-Langmuir current density (A/m²).
    pub current_density: f64,
    /// Maximum extractable beam current over the grid area (A).
    pub current_limit: f64,
    /// Operating beam current the margin is taken against (A).
    pub beam_current: f64,
    /// `current_limit / beam_current`, or 0 without beam current.
    pub margin: f64,
}

impl SpaceChargeLimit {
    /// True when a non-zero beam current exceeds the extractable limit.
    pub fn is_limited(&self) -> bool {
        self.beam_current > 0.0 && self.margin < 1.0
    }
}

/// Compute the Child-Langmuir limit and the perveance margin at `beam_current`.
///
/// `J = (4/9)·ε₀·sqrt(2q/m)·V^(3/2)/d²`, `I_limit = J·A`. A zero voltage yields a
/// zero limit, and a zero beam current yields a zero margin.
pub fn limit(
    voltage: f64,
    grid_area: f64,
    grid_gap: f64,
    gas: &Gas,
    beam_current: f64,
) -> Result<SpaceChargeLimit> {
    if !grid_area.is_finite() || grid_area <= 0.0 {
        return Err(Error::configuration(
            Some(ThrusterFamily::Ion),
            "ion_engine.geometry.A_grid",
            format!("must be a finite positive number, got {grid_area}"),
        ));
    }
    if !grid_gap.is_finite() || grid_gap <= 0.0 {
        return Err(Error::configuration(
            Some(ThrusterFamily::Ion),
            "ion_engine.geometry.d",
            format!("must be a finite positive number, got {grid_gap}"),
        ));
    }
    require_non_negative(ThrusterFamily::Ion, "Va", voltage)?;
    require_non_negative(ThrusterFamily::Ion, "Ib", beam_current)?;

    let current_density = (4.0 / 9.0)
        * VACUUM_PERMITTIVITY
        * (2.0 * gas.charge_to_mass()).sqrt()
        * voltage.powf(1.5)
        / (grid_gap * grid_gap);
    let current_limit = current_density * grid_area;
    let margin = if beam_current > 0.0 {
        current_limit / beam_current
    } else {
        0.0
    };

    Ok(SpaceChargeLimit {
        current_density,
        current_limit,
        beam_current,
        margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::xenon;

    #[test]
    fn xenon_reference_limit() {
        let result = limit(2000.0, 0.01, 0.002, &xenon(), 2.0).unwrap();
        assert!((result.current_density - 106.678).abs() < 0.01);
        assert!((result.current_limit - 1.06678).abs() < 1e-4);
        assert!((result.margin - 0.53339).abs() < 1e-4);
        assert!(result.is_limited());
    }

    #[test]
    fn doubling_area_doubles_limit_and_margin() {
        let gas = xenon();
        let base = limit(1500.0, 0.01, 0.001, &gas, 1.0).unwrap();
        let doubled = limit(1500.0, 0.02, 0.001, &gas, 1.0).unwrap();
        assert!((doubled.current_limit / base.current_limit - 2.0).abs() < 1e-12);
        assert!((doubled.margin / base.margin - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_voltage_and_zero_current_give_zero_margin() {
        let gas = xenon();
        let at_zero_voltage = limit(0.0, 0.01, 0.002, &gas, 2.0).unwrap();
        assert_eq!(at_zero_voltage.current_limit, 0.0);
        assert_eq!(at_zero_voltage.margin, 0.0);

        let at_zero_current = limit(2000.0, 0.01, 0.002, &gas, 0.0).unwrap();
        assert!(at_zero_current.current_limit > 0.0);
        assert_eq!(at_zero_current.margin, 0.0);
    }

    #[test]
    fn only_points_drawing_current_can_be_limited() {
        let gas = xenon();
        assert!(!limit(2000.0, 0.01, 0.002, &gas, 0.0).unwrap().is_limited());
        assert!(limit(0.0, 0.01, 0.002, &gas, 2.0).unwrap().is_limited());
        assert!(!limit(2000.0, 0.01, 0.002, &gas, 0.5).unwrap().is_limited());
    }

    #[test]
    fn rejects_non_positive_geometry_and_negative_voltage() {
        let gas = xenon();
        assert!(limit(1000.0, 0.01, 0.0, &gas, 1.0)
            .expect_err("zero gap")
            .is_configuration());
        assert!(limit(1000.0, -0.01, 0.002, &gas, 1.0)
            .expect_err("negative area")
            .is_configuration());
        assert!(matches!(
            limit(-1.0, 0.01, 0.002, &gas, 1.0),
            Err(Error::PhysicsDomain { quantity: "Va", .. })
        ));
    }
}
