//! Error types for feed network geometry.

use thiserror::Error;

use crate::em::EmError;

/// Result type for element construction and placement.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur while building or placing feed network elements.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// The width bisection search exhausted its iteration budget without
    /// reaching the target impedance. Propagating the search's sentinel
    /// would silently produce zero-width traces, so constructors surface
    /// it as a distinct failure instead.
    #[error("no microstrip width found for {target:.1} ohm within the search bracket")]
    WidthNotFound {
        /// The impedance that could not be realised (ohms).
        target: f64,
    },

    /// An electromagnetic formula was evaluated outside its domain.
    #[error(transparent)]
    Em(#[from] EmError),

    /// A mitred bend was anchored exactly at its target x coordinate,
    /// leaving the sign of its run undefined.
    #[error("mitred bend anchored at its own target x = {x:.3} mm; run direction is undefined")]
    DegenerateBend {
        /// The coinciding x coordinate (mm).
        x: f64,
    },
}
