//! Design specification structures for deserialisation.
//!
//! These structures map directly to the JSON specification file format.
//! Every electromagnetic formula and every geometric element reads its
//! substrate and frequency parameters from here; the values are never
//! mutated after loading.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Polarisation of the radiating elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarisation {
    /// Linear polarisation, plain rectangular patches.
    Axial,
    /// Right-hand circular polarisation, corner-trimmed square patches.
    Rhcp,
    /// Left-hand circular polarisation, corner-trimmed square patches.
    Lhcp,
}

impl Polarisation {
    /// Returns the spin sign used to select the trimmed corner diagonal:
    /// +1 for right-hand, -1 for left-hand, 0 for linear.
    #[must_use]
    pub const fn spin(self) -> i8 {
        match self {
            Self::Axial => 0,
            Self::Rhcp => 1,
            Self::Lhcp => -1,
        }
    }
}

/// How each radiating patch is matched to its feed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedType {
    /// Inset feed: a notch cut into the patch edge moves the feed point
    /// inward to the target impedance.
    Inset,
    /// Quarter-wave transformer between the feed line and the patch edge.
    QuarterWave,
}

/// An antenna design specification.
///
/// This is the top-level structure that matches the JSON specification
/// file. All lengths are millimetres, `frequency` is hertz and impedances
/// derived from these parameters are ohms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Specification {
    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default, skip_serializing)]
    _comment: Option<String>,

    /// Operating frequency (Hz).
    pub frequency: f64,

    /// Radius of the circular board outline (mm).
    pub body_radius: f64,

    /// Substrate dielectric thickness (mm).
    pub dielectric_thickness: f64,

    /// Substrate relative dielectric constant.
    pub dielectric_constant: f64,

    /// Copper foil thickness (mm).
    pub copper_thickness: f64,

    /// Polarisation of the radiating elements.
    pub polarisation: Polarisation,

    /// Number of radiating patches (2 or 4).
    pub patch_count: u32,

    /// Patch matching scheme.
    pub feed_type: FeedType,

    /// Override for the computed patch resonant length (mm).
    ///
    /// Typically set after tuning a prototype; takes precedence over the
    /// closed-form patch length.
    #[serde(default)]
    pub patch_length: Option<f64>,

    /// Override for the computed inset feed depth (mm).
    #[serde(default)]
    pub inset_distance: Option<f64>,
}

impl Specification {
    /// Validates the physical parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is outside its physical range or
    /// the array configuration is unsupported.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.frequency <= 0.0 {
            return Err(SpecError::invalid_parameter(
                "frequency",
                "must be positive",
            ));
        }
        if self.body_radius <= 0.0 {
            return Err(SpecError::invalid_parameter(
                "body_radius",
                "must be positive",
            ));
        }
        if self.dielectric_thickness <= 0.0 {
            return Err(SpecError::invalid_parameter(
                "dielectric_thickness",
                "must be positive",
            ));
        }
        if self.dielectric_constant < 1.0 {
            return Err(SpecError::invalid_parameter(
                "dielectric_constant",
                "relative permittivity cannot be below 1",
            ));
        }
        if self.copper_thickness <= 0.0 {
            return Err(SpecError::invalid_parameter(
                "copper_thickness",
                "must be positive",
            ));
        }
        if self.patch_count != 2 && self.patch_count != 4 {
            return Err(SpecError::invalid_parameter(
                "patch_count",
                format!("only 2 or 4 patches are supported, got {}", self.patch_count),
            ));
        }
        if let Some(length) = self.patch_length {
            if length <= 0.0 {
                return Err(SpecError::invalid_parameter(
                    "patch_length",
                    "override must be positive",
                ));
            }
        }
        if let Some(dist) = self.inset_distance {
            if dist < 0.0 {
                return Err(SpecError::invalid_parameter(
                    "inset_distance",
                    "override cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> String {
        r#"{
            "frequency": 2.45e9,
            "body_radius": 50.0,
            "dielectric_thickness": 1.6,
            "dielectric_constant": 4.3,
            "copper_thickness": 0.035,
            "polarisation": "axial",
            "patch_count": 2,
            "feed_type": "quarter_wave"
        }"#
        .to_string()
    }

    #[test]
    fn parse_minimal_spec() {
        let spec: Specification = serde_json::from_str(&minimal_json()).unwrap();
        assert!(spec.validate().is_ok());
        assert!((spec.frequency - 2.45e9).abs() < 1.0);
        assert_eq!(spec.polarisation, Polarisation::Axial);
        assert_eq!(spec.feed_type, FeedType::QuarterWave);
        assert!(spec.patch_length.is_none());
        assert!(spec.inset_distance.is_none());
    }

    #[test]
    fn parse_full_spec() {
        let json = r#"{
            "_comment": "2.45 GHz CP array on FR-4",
            "frequency": 2.45e9,
            "body_radius": 50.0,
            "dielectric_thickness": 1.6,
            "dielectric_constant": 4.3,
            "copper_thickness": 0.035,
            "polarisation": "rhcp",
            "patch_count": 4,
            "feed_type": "inset",
            "patch_length": 28.5,
            "inset_distance": 9.2
        }"#;

        let spec: Specification = serde_json::from_str(json).unwrap();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.polarisation, Polarisation::Rhcp);
        assert_eq!(spec.feed_type, FeedType::Inset);
        assert_eq!(spec.patch_length, Some(28.5));
        assert_eq!(spec.inset_distance, Some(9.2));
    }

    #[test]
    fn missing_required_parameter_is_rejected() {
        let json = r#"{
            "frequency": 2.45e9,
            "dielectric_thickness": 1.6
        }"#;
        let result: Result<Specification, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = minimal_json().replace(
            "\"frequency\"",
            "\"freqency\": 1.0, \"frequency\"",
        );
        let result: Result<Specification, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn reject_negative_frequency() {
        let mut spec: Specification = serde_json::from_str(&minimal_json()).unwrap();
        spec.frequency = -1.0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn reject_sub_unity_permittivity() {
        let mut spec: Specification = serde_json::from_str(&minimal_json()).unwrap();
        spec.dielectric_constant = 0.9;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn reject_unsupported_patch_count() {
        let mut spec: Specification = serde_json::from_str(&minimal_json()).unwrap();
        spec.patch_count = 3;
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("patch_count"));
    }

    #[test]
    fn polarisation_spin_signs() {
        assert_eq!(Polarisation::Axial.spin(), 0);
        assert_eq!(Polarisation::Rhcp.spin(), 1);
        assert_eq!(Polarisation::Lhcp.spin(), -1);
    }
}
