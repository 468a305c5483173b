//! Feed network assembly for the supported array configurations.
//!
//! The assembler turns a validated specification into one rooted element
//! tree, built bottom-up: radiators first, then their matching sections,
//! then the splitters that combine them. The supported configurations are
//! 2-way and 4-way arrays with either quarter-wave or inset matching.
//!
//! # Layout conventions
//!
//! The array is probe-fed: the root is always a pin-feed splitter centred
//! on the feed pin at the placement origin, with its trunk along x. A
//! 2-way array hangs one matched radiator off each branch, facing
//! outward. A 4-way array extends each branch horizontally, rises
//! vertically, and splits a second time, producing a row of four
//! radiators above the trunk; the left half reuses the same structure
//! mirrored through fixed-endpoint lines and mirrored chain directions.

use thiserror::Error;

use crate::em::{self, PatchDimensions, C};
use crate::error::SpecError;
use crate::layout::elements::trace_width;
use crate::layout::{
    Direction, Element, InsetFeed, Line, LineFeedSplitter, LineToX, Outline, Patch,
    PinFeedSplitter, Point, SquarePatch,
};
use crate::layout::error::{LayoutError, LayoutResult};
use crate::spec::{FeedType, Polarisation, Specification};

/// Feed pin impedance presented at the root splitter (ohms).
pub const FEED_IMPEDANCE: f64 = 50.0;

/// Half-diagonal of the feed pin clearance diamond (mm).
///
/// Sized for a 1.2 mm probe pin hole; confirm against the connector
/// drawing before fabrication.
const PIN_HOLE_HALF_DIAGONAL: f64 = 0.6;

/// Horizontal clearance between the inner radiators of a 4-way array (mm).
const ARRAY_CLEARANCE: f64 = 10.0;

/// Errors that can occur while assembling a feed network.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The specification requests a configuration with no known layout.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// An element of the network could not be built or placed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Patch dimensions for the specification's polarisation.
fn radiator_dimensions(spec: &Specification) -> PatchDimensions {
    match spec.polarisation {
        Polarisation::Axial => em::microstrip_patch(spec),
        Polarisation::Rhcp | Polarisation::Lhcp => em::square_patch(spec),
    }
}

/// Builds one radiating element facing `direction`.
fn radiator(spec: &Specification, direction: Direction) -> Box<dyn Element> {
    match spec.polarisation {
        Polarisation::Axial => Box::new(Patch::new(spec, direction)),
        Polarisation::Rhcp | Polarisation::Lhcp => Box::new(SquarePatch::new(spec, direction)),
    }
}

/// Patch edge impedance at resonance for the chosen radiator shape.
fn edge_impedance(spec: &Specification) -> f64 {
    em::microstrip_patch_impedance(spec, radiator_dimensions(spec).width)
}

/// Length of the 50 ohm stand-off line ahead of an inset feed (mm).
///
/// An eighth of the guided wavelength keeps the notch clear of the
/// junction fringing fields.
fn inset_standoff(spec: &Specification) -> LayoutResult<f64> {
    let width = trace_width(FEED_IMPEDANCE, spec)?;
    Ok(em::effective_wavelength(width, spec) / 8.0)
}

/// Builds one matched radiator chain extending along `direction` from a
/// splitter branch tip. The chain presents [`FEED_IMPEDANCE`] at its
/// attachment point.
fn branch_chain(spec: &Specification, direction: Direction) -> LayoutResult<Box<dyn Element>> {
    let patch = radiator(spec, direction);
    match spec.feed_type {
        FeedType::QuarterWave => Ok(Box::new(Line::quarter_wave(
            spec,
            FEED_IMPEDANCE,
            edge_impedance(spec),
            direction,
            Some(patch),
        )?)),
        FeedType::Inset => {
            let feed = InsetFeed::new(spec, FEED_IMPEDANCE, direction, patch)?;
            Ok(Box::new(Line::new(
                spec,
                FEED_IMPEDANCE,
                inset_standoff(spec)?,
                direction,
                Some(Box::new(feed)),
            )?))
        }
    }
}

/// Horizontal extent of one branch chain including its radiator (mm).
fn chain_span(spec: &Specification) -> LayoutResult<f64> {
    let patch_length = radiator_dimensions(spec).length;
    match spec.feed_type {
        FeedType::QuarterWave => {
            let z = (FEED_IMPEDANCE * edge_impedance(spec)).sqrt();
            let width = trace_width(z, spec)?;
            Ok(em::effective_wavelength(width, spec) / 4.0 + patch_length)
        }
        FeedType::Inset => Ok(inset_standoff(spec)? + patch_length),
    }
}

/// Assembles a 2-way array: pin-fed splitter with one outward-facing
/// chain per branch.
fn two_way(spec: &Specification) -> LayoutResult<Box<dyn Element>> {
    Ok(Box::new(PinFeedSplitter::new(
        spec,
        FEED_IMPEDANCE,
        FEED_IMPEDANCE,
        PIN_HOLE_HALF_DIAGONAL,
        Direction::Left,
        Some(branch_chain(spec, Direction::Left)?),
        Some(branch_chain(spec, Direction::Right)?),
    )?))
}

/// Assembles one half of a 4-way array: a vertical riser carrying a
/// line-fed splitter with an outward and an inward chain.
fn four_way_half(spec: &Specification, riser_height: f64) -> LayoutResult<Box<dyn Element>> {
    let second_split = LineFeedSplitter::new(
        spec,
        FEED_IMPEDANCE,
        FEED_IMPEDANCE,
        Direction::Left,
        Some(branch_chain(spec, Direction::Left)?),
        Some(branch_chain(spec, Direction::Right)?),
    )?;
    Ok(Box::new(Line::new(
        spec,
        FEED_IMPEDANCE,
        riser_height,
        Direction::Down,
        Some(Box::new(second_split)),
    )?))
}

/// Assembles a 4-way array: the root splitter's branches run out
/// horizontally, rise by a quarter of the free-space wavelength, and
/// split again into a row of four radiators.
fn four_way(spec: &Specification) -> LayoutResult<Box<dyn Element>> {
    let root_width = trace_width((2.0 * FEED_IMPEDANCE * FEED_IMPEDANCE).sqrt(), spec)?;
    let branch_tip = em::effective_wavelength(root_width, spec) / 4.0;
    let extension = chain_span(spec)? + ARRAY_CLEARANCE;
    let riser_height = C / spec.frequency / 4.0;
    let riser_x = branch_tip + extension;

    let right = Line::new(
        spec,
        FEED_IMPEDANCE,
        extension,
        Direction::Left,
        Some(four_way_half(spec, riser_height)?),
    )?;
    // the mirrored run resolves its (negative) length from the fixed
    // riser position at placement time
    let left = LineToX::new(
        spec,
        FEED_IMPEDANCE,
        -riser_x,
        Direction::Left,
        Some(four_way_half(spec, riser_height)?),
    )?;

    Ok(Box::new(PinFeedSplitter::new(
        spec,
        FEED_IMPEDANCE,
        FEED_IMPEDANCE,
        PIN_HOLE_HALF_DIAGONAL,
        Direction::Left,
        Some(Box::new(right)),
        Some(Box::new(left)),
    )?))
}

/// Builds the feed network tree for the specification's array
/// configuration.
///
/// # Errors
///
/// Returns an error for configurations with no known layout, or when an
/// element cannot realise its target impedance on this substrate.
pub fn build_array(spec: &Specification) -> Result<Box<dyn Element>, TopologyError> {
    match spec.patch_count {
        2 => Ok(two_way(spec)?),
        4 => Ok(four_way(spec)?),
        n => Err(TopologyError::Spec(SpecError::unsupported_topology(
            format!("only 2 or 4 patches are supported, got {n}"),
        ))),
    }
}

/// Synthesises the full conductor outline for a specification: builds
/// the feed network and places it with the feed pin at the origin.
///
/// This is the crate's one core operation; everything downstream of the
/// returned outline (board files, plots) consumes it as an opaque point
/// sequence.
///
/// # Errors
///
/// Returns an error if the network cannot be assembled or placed.
pub fn synthesise(spec: &Specification) -> Result<Outline, TopologyError> {
    let root = build_array(spec)?;
    let outline = root.place(Point::new(0.0, 0.0))?;
    Ok(outline)
}
