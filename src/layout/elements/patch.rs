//! Patch radiator elements.
//!
//! Radiators are leaves of the feed tree. Their contour is open at the
//! front (fed) edge: it starts at the front-top corner and ends at the
//! front-bottom corner, so the feeding parent splices it across the
//! attachment point and the combined boundary stays continuous.

use crate::em::{self, PatchDimensions};
use crate::layout::error::LayoutResult;
use crate::layout::{Direction, Element, Frame, Outline, Point};
use crate::spec::Specification;

/// A rectangular edge-fed linear polarised patch.
///
/// The resonant length runs along local +x (away from the feed), the
/// radiating edge width across local y.
#[derive(Debug)]
pub struct Patch {
    dims: PatchDimensions,
    direction: Direction,
}

impl Patch {
    /// Creates a patch sized for the specification's frequency and
    /// substrate.
    #[must_use]
    pub fn new(spec: &Specification, direction: Direction) -> Self {
        Self {
            dims: em::microstrip_patch(spec),
            direction,
        }
    }

    /// Patch dimensions (mm).
    #[must_use]
    pub const fn dimensions(&self) -> PatchDimensions {
        self.dims
    }
}

impl Element for Patch {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let half = self.dims.width / 2.0;
        let length = self.dims.length;
        let mut outline = Outline::new();

        outline.push(frame.project(0.0, half));
        outline.push(frame.project(length, half));
        outline.push(frame.project(length, -half));
        outline.push(frame.project(0.0, -half));

        Ok(outline)
    }
}

/// A square patch with trimmed corners for circular polarisation.
///
/// The polarisation spin selects which diagonal pair of corners is
/// trimmed: +1 (right-hand) trims the far-top and near-bottom corners,
/// -1 (left-hand) the near-top and far-bottom, 0 leaves the square
/// untrimmed. The trim length is a tenth of the side, a starting value
/// meant to be tuned against a measured axial ratio.
#[derive(Debug)]
pub struct SquarePatch {
    side: f64,
    trim: f64,
    spin: i8,
    direction: Direction,
}

impl SquarePatch {
    /// Creates a square patch sized for the specification, with the trim
    /// diagonal chosen from the specification's polarisation.
    #[must_use]
    pub fn new(spec: &Specification, direction: Direction) -> Self {
        let dims = em::square_patch(spec);
        let spin = spec.polarisation.spin();
        Self {
            side: dims.length,
            trim: if spin == 0 { 0.0 } else { dims.length / 10.0 },
            spin,
            direction,
        }
    }

    /// Side length of the square (mm).
    #[must_use]
    pub const fn side(&self) -> f64 {
        self.side
    }
}

impl Element for SquarePatch {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let half = self.side / 2.0;
        let side = self.side;
        let trim = self.trim;
        let mut outline = Outline::new();

        match self.spin {
            1 => {
                // far-top and near-bottom corners cut
                outline.push(frame.project(0.0, half));
                outline.push(frame.project(side - trim, half));
                outline.push(frame.project(side, half - trim));
                outline.push(frame.project(side, -half));
                outline.push(frame.project(trim, -half));
                outline.push(frame.project(0.0, -half + trim));
            }
            -1 => {
                // near-top and far-bottom corners cut
                outline.push(frame.project(0.0, half - trim));
                outline.push(frame.project(trim, half));
                outline.push(frame.project(side, half));
                outline.push(frame.project(side, -half + trim));
                outline.push(frame.project(side - trim, -half));
                outline.push(frame.project(0.0, -half));
            }
            _ => {
                outline.push(frame.project(0.0, half));
                outline.push(frame.project(side, half));
                outline.push(frame.project(side, -half));
                outline.push(frame.project(0.0, -half));
            }
        }

        Ok(outline)
    }
}
