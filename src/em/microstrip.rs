//! Microstrip transmission line calculations.
//!
//! The impedance and effective permittivity formulas branch on the
//! trace aspect ratio `width / height`: narrow traces (`w/h < 1`) and wide
//! traces use distinct quasi-static approximations. The width synthesis
//! inverts the impedance formula by bisection, which is valid because the
//! impedance is monotonically decreasing in width.

use std::f64::consts::PI;

use crate::em::C;
use crate::spec::Specification;

/// Lower bound of the width bisection bracket (mm).
pub const WIDTH_SEARCH_LOW: f64 = 0.1;

/// Upper bound of the width bisection bracket (mm).
pub const WIDTH_SEARCH_HIGH: f64 = 5.0;

/// Maximum bisection iterations before giving up.
pub const WIDTH_SEARCH_RUNS: usize = 100;

/// Accepted impedance error for the width search (ohms).
pub const WIDTH_TOLERANCE: f64 = 0.5;

/// Free-space wavelength scaled by the square root of the substrate
/// dielectric constant (mm).
#[must_use]
pub fn wavelength(spec: &Specification) -> f64 {
    C / spec.frequency / spec.dielectric_constant.sqrt()
}

/// Effective relative permittivity under a microstrip trace of the given
/// width (mm).
///
/// Models the mixed air/substrate field region; the narrow-trace regime
/// adds a fringing correction term.
fn effective_permittivity(width: f64, spec: &Specification) -> f64 {
    let k = spec.dielectric_constant;
    let h = spec.dielectric_thickness;

    if width / h < 1.0 {
        (k + 1.0) / 2.0
            + (k - 1.0) / 2.0
                * (1.0 / (1.0 + 12.0 * h / width).sqrt() + 0.04 * (1.0 - width / h).powi(2))
    } else {
        (k + 1.0) / 2.0 + (k - 1.0) / (2.0 * (1.0 + 12.0 * h / width).sqrt())
    }
}

/// Guided wavelength in a microstrip line of the given width (mm).
#[must_use]
pub fn effective_wavelength(width: f64, spec: &Specification) -> f64 {
    C / spec.frequency / effective_permittivity(width, spec).sqrt()
}

/// Characteristic impedance of a microstrip line of the given width (ohms).
///
/// Formula source: <https://www.pasternack.com/t-calculator-microstrip.aspx>,
/// accessed June 2022; corroborates simulation.
#[must_use]
pub fn microstrip_impedance(width: f64, spec: &Specification) -> f64 {
    let h = spec.dielectric_thickness;
    let keff = effective_permittivity(width, spec);

    if width / h < 1.0 {
        60.0 / keff.sqrt() * (8.0 * h / width + 0.25 * width / h).ln()
    } else {
        120.0 * PI / keff.sqrt() / (width / h + 1.393 + 2.0 / 3.0 * (width / h + 1.444).ln())
    }
}

/// Width of a microstrip line with the given characteristic impedance (mm),
/// or `0.0` if no width in the search bracket meets the target.
///
/// Bisection search over [`WIDTH_SEARCH_LOW`, `WIDTH_SEARCH_HIGH`], capped
/// at [`WIDTH_SEARCH_RUNS`] iterations, accepting the midpoint once the
/// impedance error drops below [`WIDTH_TOLERANCE`]. Impedance decreases
/// monotonically with width, so a computed impedance above the target
/// raises the lower bound.
///
/// Callers must check for the `0.0` sentinel before using the result as a
/// physical dimension.
#[must_use]
pub fn microstrip_width(target: f64, spec: &Specification) -> f64 {
    let mut low = WIDTH_SEARCH_LOW;
    let mut high = WIDTH_SEARCH_HIGH;

    for _ in 0..WIDTH_SEARCH_RUNS {
        let mid = (low + high) / 2.0;
        let z = microstrip_impedance(mid, spec);

        if (z - target).abs() < WIDTH_TOLERANCE {
            return mid;
        } else if z > target {
            low = mid;
        } else {
            high = mid;
        }
    }

    0.0 // not found
}

/// Corner trim length for an ideal 90 degree mitred bend (mm).
///
/// ```text
///         ->| |<- a
/// __________. .
///            *.
///             .*
///             .  *
/// ____________.    *
///             |      *
///             |        |
///             |        |
/// ```
///
/// Formula source: <https://www.everythingrf.com>, accessed 2022.
#[must_use]
pub fn mitred_corner(width: f64, spec: &Specification) -> f64 {
    let h = spec.dielectric_thickness;
    let x = width * 2.0_f64.sqrt() * (0.52 + 0.65 * (-1.35 * width / h).exp());

    x * 2.0_f64.sqrt() - width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{FeedType, Polarisation};

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
    fn wavelength_scales_with_permittivity() {
        let spec = fr4_spec();
        let lambda = wavelength(&spec);
        let free_space = C / spec.frequency;
        assert!((lambda - free_space / spec.dielectric_constant.sqrt()).abs() < 1e-9);
        assert!(lambda < free_space);
    }

    #[test]
    fn spec_sanity() {
        let spec = fr4_spec();
        assert_eq!(spec.polarisation, Polarisation::Axial);
        assert_eq!(spec.feed_type, FeedType::QuarterWave);
    }

    #[test]
    fn impedance_monotonically_decreasing_in_width() {
        let spec = fr4_spec();
        let mut previous = microstrip_impedance(WIDTH_SEARCH_LOW, &spec);
        let mut width = WIDTH_SEARCH_LOW;
        while width < WIDTH_SEARCH_HIGH {
            width += 0.01;
            let z = microstrip_impedance(width, &spec);
            assert!(
                z <= previous,
                "impedance increased from {previous} to {z} at width {width}"
            );
            previous = z;
        }
    }

    #[test]
    fn width_impedance_round_trip() {
        let spec = fr4_spec();
        for target in [50.0, 70.7, 100.0, 120.0] {
            let width = microstrip_width(target, &spec);
            assert!(width > 0.0, "no width found for {target} ohm");
            let z = microstrip_impedance(width, &spec);
            assert!(
                (z - target).abs() < WIDTH_TOLERANCE,
                "round trip of {target} ohm gave {z} ohm"
            );
        }
    }

    #[test]
    fn unreachable_impedance_returns_sentinel() {
        let spec = fr4_spec();
        // FR-4 at 1.6 mm covers roughly 37..173 ohm over the bracket
        assert!((microstrip_width(5.0, &spec) - 0.0).abs() < f64::EPSILON);
        assert!((microstrip_width(500.0, &spec) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn effective_wavelength_continuous_at_regime_boundary() {
        let spec = fr4_spec();
        let h = spec.dielectric_thickness;
        let below = effective_wavelength(h * (1.0 - 1e-9), &spec);
        let above = effective_wavelength(h * (1.0 + 1e-9), &spec);
        assert!((below - above).abs() / above < 1e-6);
    }

    #[test]
    fn impedance_nearly_continuous_at_regime_boundary() {
        let spec = fr4_spec();
        let h = spec.dielectric_thickness;
        let below = microstrip_impedance(h * (1.0 - 1e-9), &spec);
        let above = microstrip_impedance(h * (1.0 + 1e-9), &spec);
        // The two published approximations meet within half a percent
        assert!((below - above).abs() / above < 5e-3);
    }

    #[test]
    fn effective_wavelength_shorter_than_free_space() {
        let spec = fr4_spec();
        let guided = effective_wavelength(3.0, &spec);
        assert!(guided < C / spec.frequency);
        // but longer than the fully-in-dielectric wavelength
        assert!(guided > wavelength(&spec));
    }

    #[test]
    fn mitre_shrinks_for_wide_traces() {
        let spec = fr4_spec();
        let narrow = mitred_corner(1.0, &spec) / 1.0;
        let wide = mitred_corner(4.0, &spec) / 4.0;
        // relative trim decreases as w/h grows
        assert!(narrow > wide);
        assert!(mitred_corner(3.0, &spec) > 0.0);
    }
}
