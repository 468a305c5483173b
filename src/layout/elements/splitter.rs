//! Two-way power splitter elements.
//!
//! Both variants centre a trunk trace on the local origin with a
//! quarter-wave transformer branch to each side, so that each branch
//! presents `2 * zin` at the junction and the two in parallel restore
//! `zin`. They differ in how the input power arrives: through a feed pin
//! (via) at the centre, or through a feed line entering the near edge.

use crate::em;
use crate::layout::elements::trace_width;
use crate::layout::error::LayoutResult;
use crate::layout::{Direction, Element, Frame, Outline, Point};
use crate::spec::Specification;

/// Shared branch sizing for both splitter variants.
///
/// The branch impedance is the geometric mean of the doubled input
/// impedance and the per-branch load impedance.
fn branch_geometry(spec: &Specification, zin: f64, zout: f64) -> LayoutResult<(f64, f64)> {
    let width = trace_width((2.0 * zin * zout).sqrt(), spec)?;
    let branch_length = em::effective_wavelength(width, spec) / 4.0;
    Ok((width, branch_length))
}

/// A two-way splitter fed by a coaxial probe pin through the board.
///
/// Emits a diamond-shaped cutout centred on the local origin for the feed
/// pin clearance hole, as a disjoint sub-region of the outline.
#[derive(Debug)]
pub struct PinFeedSplitter {
    width: f64,
    branch_length: f64,
    hole: f64,
    direction: Direction,
    first: Option<Box<dyn Element>>,
    second: Option<Box<dyn Element>>,
}

impl PinFeedSplitter {
    /// Creates a pin-fed splitter.
    ///
    /// `zin` is the probe impedance, `zout` the load impedance each branch
    /// must present, and `hole` the half-diagonal of the pin clearance
    /// diamond (mm).
    ///
    /// # Errors
    ///
    /// Fails if no trace width realises the branch impedance.
    pub fn new(
        spec: &Specification,
        zin: f64,
        zout: f64,
        hole: f64,
        direction: Direction,
        first: Option<Box<dyn Element>>,
        second: Option<Box<dyn Element>>,
    ) -> LayoutResult<Self> {
        let (width, branch_length) = branch_geometry(spec, zin, zout)?;
        Ok(Self {
            width,
            branch_length,
            hole,
            direction,
            first,
            second,
        })
    }

    /// Quarter-wave branch length (mm).
    #[must_use]
    pub const fn branch_length(&self) -> f64 {
        self.branch_length
    }
}

impl Element for PinFeedSplitter {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let bl = self.branch_length;
        let half = self.width / 2.0;
        let mut outline = Outline::new();

        outline.push(frame.project(-bl, half));
        outline.push(frame.project(bl, half));
        if let Some(child) = &self.first {
            outline.splice(child.place(frame.project(bl, 0.0))?);
        }
        outline.push(frame.project(bl, -half));
        outline.push(frame.project(-bl, -half));
        if let Some(child) = &self.second {
            outline.splice(child.place(frame.project(-bl, 0.0))?);
        }

        if self.hole > 0.0 {
            outline.push_cutout(vec![
                frame.project(self.hole, 0.0),
                frame.project(0.0, self.hole),
                frame.project(-self.hole, 0.0),
                frame.project(0.0, -self.hole),
            ]);
        }

        Ok(outline)
    }
}

/// A two-way splitter fed by a microstrip line entering the near edge.
///
/// The trunk contour leaves a gap of the feed line's width on its near
/// edge, centred on the local origin, where the parent line's conductor
/// joins.
#[derive(Debug)]
pub struct LineFeedSplitter {
    width: f64,
    feed_width: f64,
    branch_length: f64,
    direction: Direction,
    first: Option<Box<dyn Element>>,
    second: Option<Box<dyn Element>>,
}

impl LineFeedSplitter {
    /// Creates a line-fed splitter.
    ///
    /// # Errors
    ///
    /// Fails if no trace width realises the branch or feed impedance.
    pub fn new(
        spec: &Specification,
        zin: f64,
        zout: f64,
        direction: Direction,
        first: Option<Box<dyn Element>>,
        second: Option<Box<dyn Element>>,
    ) -> LayoutResult<Self> {
        let (width, branch_length) = branch_geometry(spec, zin, zout)?;
        Ok(Self {
            width,
            feed_width: trace_width(zin, spec)?,
            branch_length,
            direction,
            first,
            second,
        })
    }

    /// Quarter-wave branch length (mm).
    #[must_use]
    pub const fn branch_length(&self) -> f64 {
        self.branch_length
    }
}

impl Element for LineFeedSplitter {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let bl = self.branch_length;
        let half = self.width / 2.0;
        let feed_half = self.feed_width / 2.0;
        let mut outline = Outline::new();

        outline.push(frame.project(feed_half, 0.0));
        outline.push(frame.project(feed_half, half));

        outline.push(frame.project(bl, half));
        if let Some(child) = &self.first {
            outline.splice(child.place(frame.project(bl, 0.0))?);
        }
        outline.push(frame.project(bl, -half));
        outline.push(frame.project(-bl, -half));
        if let Some(child) = &self.second {
            outline.splice(child.place(frame.project(-bl, 0.0))?);
        }
        outline.push(frame.project(-bl, half));

        outline.push(frame.project(-feed_half, half));
        outline.push(frame.project(-feed_half, 0.0));

        Ok(outline)
    }
}
