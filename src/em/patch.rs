//! Rectangular patch radiator calculations.
//!
//! Formula sources: <https://www.everythingrf.com> (patch sizing, accessed
//! June 2022) and Balanis, C A 1982, "Antenna Theory: Analysis and Design"
//! (edge impedance and inset feed position).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::em::{wavelength, EmError, C};
use crate::spec::Specification;

/// Physical dimensions of a rectangular patch radiator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchDimensions {
    /// Radiating edge width (mm).
    pub width: f64,
    /// Resonant length (mm).
    pub length: f64,
}

/// Dimensions of a simple edge-fed linear polarised patch.
///
/// The resonant length carries the standard fringing-field length
/// correction. A `patch_length` override in the specification replaces the
/// computed length; the width is always computed.
#[must_use]
pub fn microstrip_patch(spec: &Specification) -> PatchDimensions {
    let h = spec.dielectric_thickness;
    let k = spec.dielectric_constant;
    let f = spec.frequency;

    let width = C / (2.0 * f * ((k + 1.0) / 2.0).sqrt());
    let keff = (k + 1.0) / 2.0 + (k - 1.0) / (2.0 * (1.0 + 12.0 * h / width).sqrt());
    let mut length = C / (2.0 * f * keff.sqrt())
        - 2.0 * 0.412 * h * (keff + 0.3) * (width / h + 0.264)
            / (k - 0.258)
            / (width / h + 0.8);

    if let Some(override_length) = spec.patch_length {
        length = override_length;
    }

    PatchDimensions { width, length }
}

/// Dimensions of a square patch, for circular polarisation.
///
/// A first-pass width sets the effective permittivity, the resonant length
/// follows from it, and the width is then forced equal to the length. The
/// `patch_length` override replaces both.
#[must_use]
pub fn square_patch(spec: &Specification) -> PatchDimensions {
    let h = spec.dielectric_thickness;
    let k = spec.dielectric_constant;
    let f = spec.frequency;

    // first pass width
    let width = C / (2.0 * f * k.sqrt());
    let keff = (k + 1.0) / 2.0 + (k - 1.0) / (2.0 * (1.0 + 12.0 * h / width).sqrt());
    let length = C / (2.0 * f * keff.sqrt())
        - 2.0 * 0.412 * h * (keff + 0.3) * (width / h + 0.264)
            / (k - 0.258)
            / (width / h + 0.8);

    let side = spec.patch_length.unwrap_or(length);

    PatchDimensions {
        width: side,
        length: side,
    }
}

/// Approximate maximum edge impedance of a patch at resonance (ohms).
///
/// Uses the Balanis slot conductance approximation; the absolute value
/// guards against the conductance term going negative on electrically
/// thick substrates.
#[must_use]
pub fn microstrip_patch_impedance(spec: &Specification, width: f64) -> f64 {
    let h = spec.dielectric_thickness;
    let k = spec.dielectric_constant;

    let y = wavelength(spec);

    let g = (width / (120.0 * y)) * (1.0 - (k * h).powi(2) / 24.0);

    (1.0 / 2.0 / g).abs()
}

/// Inset depth along the patch centreline that presents the target
/// impedance (mm).
///
/// An `inset_distance` override in the specification takes precedence and
/// skips the calculation entirely.
///
/// # Errors
///
/// Returns [`EmError::InsetOutOfRange`] when the target impedance exceeds
/// the patch edge impedance, which would put the arccos argument outside
/// its domain.
pub fn inset_distance(spec: &Specification, target: f64) -> Result<f64, EmError> {
    if let Some(override_distance) = spec.inset_distance {
        return Ok(override_distance);
    }

    let dims = microstrip_patch(spec);
    let edge = microstrip_patch_impedance(spec, dims.width);

    if target > edge {
        return Err(EmError::InsetOutOfRange { target, edge });
    }

    Ok(dims.length / PI * (target / edge).sqrt().acos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fr4_spec() -> Specification {
        serde_json::from_value(serde_json::json!({
            "frequency": 2.45e9,
            "body_radius": 50.0,
            "dielectric_thickness": 1.6,
            "dielectric_constant": 4.3,
            "copper_thickness": 0.035,
            "polarisation": "axial",
            "patch_count": 2,
            "feed_type": "quarter_wave"
        }))
        .unwrap()
    }

    #[test]
    fn patch_dimensions_in_expected_range() {
        let spec = fr4_spec();
        let dims = microstrip_patch(&spec);
        // Known-good values for 2.45 GHz on 1.6 mm FR-4
        assert!((dims.width - 37.6).abs() < 0.5, "width was {}", dims.width);
        assert!(
            (dims.length - 29.3).abs() < 0.5,
            "length was {}",
            dims.length
        );
        assert!(dims.length < dims.width);
    }

    #[test]
    fn patch_length_override_wins() {
        let mut spec = fr4_spec();
        spec.patch_length = Some(28.0);
        let dims = microstrip_patch(&spec);
        assert!((dims.length - 28.0).abs() < f64::EPSILON);
        // width is still computed
        assert!((dims.width - 37.6).abs() < 0.5);
    }

    #[test]
    fn square_patch_is_square() {
        let spec = fr4_spec();
        let dims = square_patch(&spec);
        assert!((dims.width - dims.length).abs() < f64::EPSILON);
        // smaller than the linear patch width
        assert!(dims.width < microstrip_patch(&spec).width);
    }

    #[test]
    fn square_patch_override_sets_both_sides() {
        let mut spec = fr4_spec();
        spec.patch_length = Some(27.0);
        let dims = square_patch(&spec);
        assert!((dims.width - 27.0).abs() < f64::EPSILON);
        assert!((dims.length - 27.0).abs() < f64::EPSILON);
    }

    #[test]
    fn edge_impedance_positive() {
        let spec = fr4_spec();
        let dims = microstrip_patch(&spec);
        let z = microstrip_patch_impedance(&spec, dims.width);
        assert!(z > 0.0);
        assert!(z < 1000.0);
    }

    #[test]
    fn inset_distance_within_patch() {
        let spec = fr4_spec();
        let dims = microstrip_patch(&spec);
        let dist = inset_distance(&spec, 50.0).unwrap();
        assert!(dist > 0.0);
        assert!(dist < dims.length);
    }

    #[test]
    fn inset_target_above_edge_impedance_is_domain_error() {
        let spec = fr4_spec();
        let edge = microstrip_patch_impedance(&spec, microstrip_patch(&spec).width);
        let result = inset_distance(&spec, edge * 2.0);
        assert!(matches!(result, Err(EmError::InsetOutOfRange { .. })));
    }

    #[test]
    fn inset_override_bypasses_domain_check() {
        let mut spec = fr4_spec();
        spec.inset_distance = Some(9.0);
        let dist = inset_distance(&spec, 1e6).unwrap();
        assert!((dist - 9.0).abs() < f64::EPSILON);
    }
}
