//! Closed-form performance models.
//!
//! - [`divergence`] - Beam/plume divergence efficiency
//! - [`space_charge`] - Child-Langmuir current limit for gridded ion optics
//! - [`ion`] - Gridded ion engine performance
//! - [`hall`] - Hall-effect thruster performance
//!
//! Every model is a pure function of its explicit inputs.

pub mod divergence;
pub mod hall;
pub mod ion;
pub mod space_charge;

pub use divergence::{Divergence, DivergenceModel};
pub use space_charge::SpaceChargeLimit;

use crate::device::ThrusterFamily;
use crate::error::{Error, Result};

/// Reject operating-point inputs that are negative or not finite.
pub(crate) fn require_non_negative(
    family: ThrusterFamily,
    quantity: &'static str,
    value: f64,
) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::PhysicsDomain {
            family,
            quantity,
            value,
        });
    }
    Ok(())
}

/// Thrust efficiency: jet kinetic power `T²/(2·mdot)` over electrical power.
///
/// Defined as 0 when either the mass flow or the electrical power is zero.
pub(crate) fn thrust_efficiency(thrust: f64, mass_flow: f64, power: f64) -> f64 {
    if mass_flow <= 0.0 || power <= 0.0 {
        return 0.0;
    }
    thrust * thrust / (2.0 * mass_flow) / power
}
