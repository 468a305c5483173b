//! Inset feed element.

use crate::em;
use crate::layout::elements::trace_width;
use crate::layout::error::LayoutResult;
use crate::layout::{Direction, Element, Frame, Outline, Point};
use crate::spec::Specification;

/// Ratio of the full notch width to the feed line width.
///
/// The gap on each side of the line equals the line width, so the notch
/// spans three line widths in total.
const NOTCH_WIDTH_RATIO: f64 = 3.0;

/// An inset feed: a notch cut into a patch's fed edge that carries the
/// feed line inward to the point where the patch presents the target
/// impedance.
///
/// The element is anchored on the patch edge at the centreline, where the
/// parent feed line ends. It extends the line conductor into the notch to
/// the inset depth and splices the fed patch across the notch mouth.
#[derive(Debug)]
pub struct InsetFeed {
    feed_width: f64,
    depth: f64,
    direction: Direction,
    patch: Box<dyn Element>,
}

impl InsetFeed {
    /// Creates an inset feed for the given feed line impedance.
    ///
    /// The fed patch is required: an inset feed without a patch has no
    /// edge to cut the notch into.
    ///
    /// # Errors
    ///
    /// Fails if no trace width realises the impedance, or if the target
    /// impedance exceeds the patch edge impedance.
    pub fn new(
        spec: &Specification,
        impedance: f64,
        direction: Direction,
        patch: Box<dyn Element>,
    ) -> LayoutResult<Self> {
        Ok(Self {
            feed_width: trace_width(impedance, spec)?,
            depth: em::inset_distance(spec, impedance)?,
            direction,
            patch,
        })
    }

    /// Notch depth along the patch centreline (mm).
    #[must_use]
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    /// Feed line width (mm).
    #[must_use]
    pub const fn feed_width(&self) -> f64 {
        self.feed_width
    }
}

impl Element for InsetFeed {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let half = self.feed_width / 2.0;
        let notch_half = NOTCH_WIDTH_RATIO * half;
        let depth = self.depth;
        let mut outline = Outline::new();

        // line conductor continuing into the notch
        outline.push(frame.project(0.0, half));
        outline.push(frame.project(depth, half));
        // up the notch end wall and back out along its top edge
        outline.push(frame.project(depth, notch_half));
        outline.push(frame.project(0.0, notch_half));
        // the patch contour runs from front-top around to front-bottom
        outline.splice(self.patch.place(frame.project(0.0, 0.0))?);
        // bottom half of the notch, mirrored
        outline.push(frame.project(0.0, -notch_half));
        outline.push(frame.project(depth, -notch_half));
        outline.push(frame.project(depth, -half));
        outline.push(frame.project(0.0, -half));

        Ok(outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::test_support::fr4_spec;
    use crate::layout::Patch;

    #[test]
    fn notch_is_three_line_widths_wide() {
        let spec = fr4_spec();
        let patch = Box::new(Patch::new(&spec, Direction::Left));
        let feed = InsetFeed::new(&spec, 50.0, Direction::Left, patch).unwrap();
        let outline = feed.place(Point::new(0.0, 0.0)).unwrap();

        let w = feed.feed_width();
        // 8 notch points + 4 patch points
        assert_eq!(outline.points.len(), 12);
        assert_eq!(outline.points[2], Point::new(feed.depth(), 1.5 * w));
        assert_eq!(outline.points[9], Point::new(feed.depth(), -1.5 * w));
    }

    #[test]
    fn patch_is_spliced_across_the_notch_mouth() {
        let spec = fr4_spec();
        let patch = Patch::new(&spec, Direction::Left);
        let dims = patch.dimensions();
        let feed = InsetFeed::new(&spec, 50.0, Direction::Left, Box::new(patch)).unwrap();
        let outline = feed.place(Point::new(0.0, 0.0)).unwrap();

        // Patch front-top corner follows the notch top edge point
        assert_eq!(outline.points[4], Point::new(0.0, dims.width / 2.0));
        assert_eq!(outline.points[7], Point::new(0.0, -dims.width / 2.0));
    }

    #[test]
    fn depth_matches_em_inset_distance() {
        let spec = fr4_spec();
        let patch = Box::new(Patch::new(&spec, Direction::Left));
        let feed = InsetFeed::new(&spec, 50.0, Direction::Left, patch).unwrap();
        let expected = em::inset_distance(&spec, 50.0).unwrap();
        assert!((feed.depth() - expected).abs() < 1e-12);
    }

    #[test]
    fn unreachable_inset_impedance_fails_construction() {
        let spec = fr4_spec();
        let edge = em::microstrip_patch_impedance(&spec, em::microstrip_patch(&spec).width);
        let patch = Box::new(Patch::new(&spec, Direction::Left));
        let result = InsetFeed::new(&spec, edge * 1.5, Direction::Left, patch);
        assert!(result.is_err());
    }
}
