//! Electromagnetic design calculations.
//!
//! This module converts impedance and frequency targets into physical
//! microstrip and patch dimensions using closed-form approximations and a
//! bounded bisection search. Every function is pure: it reads the design
//! [`Specification`](crate::spec::Specification) and numeric arguments and
//! returns a physical quantity, with no state between calls.
//!
//! # Units
//!
//! Lengths are millimetres, frequency is hertz, impedance is ohms. The
//! speed of light is therefore carried in mm/s.
//!
//! # Accuracy
//!
//! These are textbook approximations (Balanis slot conductance, the
//! standard quasi-static microstrip formulas), not a field solver. They
//! corroborate simulation to a few percent on common substrates; final
//! dimensions should be confirmed against a fabricated board.

pub mod microstrip;
pub mod patch;

pub use microstrip::{
    effective_wavelength, microstrip_impedance, microstrip_width, mitred_corner, wavelength,
};
pub use patch::{inset_distance, microstrip_patch, microstrip_patch_impedance, square_patch,
    PatchDimensions};

use thiserror::Error;

/// Speed of light in mm/s.
pub const C: f64 = 3e11;

/// Errors from electromagnetic calculations whose formulas have a
/// restricted mathematical domain.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EmError {
    /// The inset feed target impedance exceeds the patch edge impedance,
    /// which puts the arccos argument outside [-1, 1].
    #[error(
        "inset target impedance {target:.1} ohm exceeds patch edge impedance {edge:.1} ohm"
    )]
    InsetOutOfRange {
        /// Requested feed-point impedance (ohms).
        target: f64,
        /// Patch edge impedance at resonance (ohms).
        edge: f64,
    },
}
