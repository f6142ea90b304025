//! Beam and plume divergence efficiency models.
//!
//! Both variants map an angular parameter in degrees to the fraction of
//! exhaust momentum retained along the thrust axis.

use std::fmt;
use std::str::FromStr;

use crate::device::ThrusterFamily;
use crate::error::{Error, Result};

/// Selectable divergence model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivergenceModel {
    /// Gaussian angular spread with standard deviation σ: η = exp(-σ²/2).
    Gaussian,
    /// Half-angle θ cosine-loss model: η = (1 − cos θ) / θ, with η = 1 at θ = 0.
    Cosine,
    /// Uniform cone of half-angle θ, averaged axial cosine: η = sin θ / θ.
    ConeAverage,
}

impl fmt::Display for DivergenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DivergenceModel::Gaussian => "gaussian",
            DivergenceModel::Cosine => "cos",
            DivergenceModel::ConeAverage => "cone",
        };
        f.write_str(value)
    }
}

impl FromStr for DivergenceModel {
    type Err = Error;

    fn from_str(selector: &str) -> Result<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "gaussian" | "gauss" => Ok(DivergenceModel::Gaussian),
            "cos" | "cosine" => Ok(DivergenceModel::Cosine),
            "cone" | "cone_average" => Ok(DivergenceModel::ConeAverage),
            _ => Err(Error::configuration(
                None,
                "divergence.model",
                format!(
                    "unknown divergence model '{selector}'; expected 'gaussian', 'cos' or 'cone'"
                ),
            )),
        }
    }
}

/// A divergence model together with its angular parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divergence {
    pub model: DivergenceModel,
    /// Spread (Gaussian σ) or half-angle (cosine and cone θ) in degrees.
    pub param_deg: f64,
}

impl Divergence {
    pub fn gaussian(sigma_deg: f64) -> Self {
        Self {
            model: DivergenceModel::Gaussian,
            param_deg: sigma_deg,
        }
    }

    pub fn cosine(half_angle_deg: f64) -> Self {
        Self {
            model: DivergenceModel::Cosine,
            param_deg: half_angle_deg,
        }
    }

    pub fn cone_average(half_angle_deg: f64) -> Self {
        Self {
            model: DivergenceModel::ConeAverage,
            param_deg: half_angle_deg,
        }
    }

    /// Check the angular parameter on behalf of a device block.
    pub fn validate(&self, family: ThrusterFamily, field: &str) -> Result<()> {
        check_param(self.param_deg).map_err(|message| {
            Error::configuration(Some(family), format!("{field}.param_deg"), message)
        })
    }

    /// Axial efficiency factor in `[0, 1]` for a device of `family`.
    ///
    /// A bad parameter is reported against the family's `divergence.param_deg` field.
    pub fn efficiency(&self, family: ThrusterFamily) -> Result<f64> {
        efficiency(self.model, self.param_deg).map_err(|err| match err {
            Error::Configuration { message, .. } => Error::configuration(
                Some(family),
                format!("{}.divergence.param_deg", family.config_key()),
                message,
            ),
            other => other,
        })
    }
}

/// Compute the divergence efficiency for a model and angular parameter in degrees.
///
/// The parameter must be finite and non-negative. A zero parameter yields exactly 1
/// for every model; θ = 0 is handled explicitly for the two angular models.
/// The cosine model stays finite at 180° (2/π). The cone average reaches zero
/// there and is clamped at zero beyond it.
pub fn efficiency(model: DivergenceModel, param_deg: f64) -> Result<f64> {
    check_param(param_deg)
        .map_err(|message| Error::configuration(None, "divergence.param_deg", message))?;

    let param_rad = param_deg.to_radians();
    let eta = match model {
        DivergenceModel::Gaussian => (-param_rad * param_rad / 2.0).exp(),
        DivergenceModel::Cosine => {
            if param_rad == 0.0 {
                1.0
            } else {
                (1.0 - param_rad.cos()) / param_rad
            }
        }
        DivergenceModel::ConeAverage => {
            if param_rad == 0.0 {
                1.0
            } else {
                (param_rad.sin() / param_rad).max(0.0)
            }
        }
    };

    Ok(eta)
}

fn check_param(param_deg: f64) -> std::result::Result<(), String> {
    if !param_deg.is_finite() || param_deg < 0.0 {
        return Err(format!(
            "divergence parameter must be finite and non-negative, got {param_deg}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_at_zero_is_exactly_one() {
        assert_eq!(efficiency(DivergenceModel::Gaussian, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn gaussian_is_strictly_decreasing() {
        let mut previous = efficiency(DivergenceModel::Gaussian, 0.0).unwrap();
        for step in 1..=36 {
            let eta = efficiency(DivergenceModel::Gaussian, step as f64 * 5.0).unwrap();
            assert!(eta < previous, "not decreasing at {} deg", step * 5);
            assert!(eta > 0.0);
            previous = eta;
        }
    }

    #[test]
    fn gaussian_matches_closed_form() {
        let sigma = 5.0_f64.to_radians();
        let eta = efficiency(DivergenceModel::Gaussian, 5.0).unwrap();
        assert!((eta - (-sigma * sigma / 2.0).exp()).abs() < 1e-15);
    }

    #[test]
    fn cosine_matches_closed_form() {
        assert_eq!(efficiency(DivergenceModel::Cosine, 0.0).unwrap(), 1.0);
        let theta = 30.0_f64.to_radians();
        let eta = efficiency(DivergenceModel::Cosine, 30.0).unwrap();
        assert!((eta - (1.0 - theta.cos()) / theta).abs() < 1e-15);
        assert!((eta - 0.255_873).abs() < 1e-6);
    }

    #[test]
    fn cosine_is_finite_across_half_angles() {
        let eta = efficiency(DivergenceModel::Cosine, 180.0).unwrap();
        assert!((eta - 2.0 / std::f64::consts::PI).abs() < 1e-12);

        for step in 1..=72 {
            let eta = efficiency(DivergenceModel::Cosine, step as f64 * 5.0).unwrap();
            assert!(eta.is_finite());
            assert!((0.0..=1.0).contains(&eta), "out of range at {} deg", step * 5);
        }
    }

    #[test]
    fn cone_average_converges_to_one_near_zero() {
        assert_eq!(efficiency(DivergenceModel::ConeAverage, 0.0).unwrap(), 1.0);
        let eta = efficiency(DivergenceModel::ConeAverage, 1e-9).unwrap();
        assert!((eta - 1.0).abs() < 1e-12);
        let eta = efficiency(DivergenceModel::ConeAverage, 0.01).unwrap();
        assert!((eta - 1.0).abs() < 1e-7);
    }

    #[test]
    fn cone_average_full_cone_is_finite_and_near_zero() {
        let eta = efficiency(DivergenceModel::ConeAverage, 180.0).unwrap();
        assert!(eta.is_finite());
        assert!((0.0..1e-6).contains(&eta));

        let eta = efficiency(DivergenceModel::ConeAverage, 270.0).unwrap();
        assert_eq!(eta, 0.0);
    }

    #[test]
    fn cone_average_is_decreasing_up_to_full_cone() {
        let mut previous = 1.0;
        for step in 1..=36 {
            let eta = efficiency(DivergenceModel::ConeAverage, step as f64 * 5.0).unwrap();
            assert!(eta < previous, "not decreasing at {} deg", step * 5);
            previous = eta;
        }
    }

    #[test]
    fn device_efficiency_names_family_and_field() {
        let err = Divergence::cosine(-5.0)
            .efficiency(ThrusterFamily::Hall)
            .expect_err("negative half-angle");
        match err {
            Error::Configuration { family, field, .. } => {
                assert_eq!(family, Some(ThrusterFamily::Hall));
                assert_eq!(field, "hall_thruster.divergence.param_deg");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(Divergence::gaussian(5.0)
            .efficiency(ThrusterFamily::Ion)
            .is_ok());
        assert_eq!(
            Divergence::cone_average(0.0)
                .efficiency(ThrusterFamily::Ion)
                .unwrap(),
            1.0
        );
    }

    #[test]
    fn rejects_negative_and_non_finite_parameters() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = efficiency(DivergenceModel::Gaussian, bad).expect_err("invalid parameter");
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn parses_selectors_and_rejects_unknown() {
        assert_eq!(
            "gaussian".parse::<DivergenceModel>().unwrap(),
            DivergenceModel::Gaussian
        );
        assert_eq!("COS".parse::<DivergenceModel>().unwrap(), DivergenceModel::Cosine);
        assert_eq!(
            "cosine".parse::<DivergenceModel>().unwrap(),
            DivergenceModel::Cosine
        );
        assert_eq!(
            "cone".parse::<DivergenceModel>().unwrap(),
            DivergenceModel::ConeAverage
        );

        let err = "lorentzian"
            .parse::<DivergenceModel>()
            .expect_err("unknown selector");
        assert!(err.to_string().contains("lorentzian"));
        assert!(err.is_configuration());
    }
}
