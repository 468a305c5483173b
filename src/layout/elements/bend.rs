//! Mitred right-angle bend element.

use crate::em;
use crate::layout::elements::trace_width;
use crate::layout::error::{LayoutError, LayoutResult};
use crate::layout::{Direction, Element, Frame, Outline, Point};
use crate::spec::Specification;

/// A 90 degree trace bend whose corner sits at a fixed global x
/// coordinate, with the outer corner cut back by the ideal mitre length.
///
/// The trace runs horizontally from the anchor to the target x, then
/// drops by `height`; the child attaches below the corner. The run
/// direction follows the sign of `target_x - anchor.x`, so the same
/// element works on either side of its anchor.
#[derive(Debug)]
pub struct MitredBend {
    width: f64,
    mitre: f64,
    height: f64,
    target_x: f64,
    direction: Direction,
    child: Option<Box<dyn Element>>,
}

impl MitredBend {
    /// Creates a mitred bend cornering at global x = `target_x` and
    /// descending by `height` (mm).
    ///
    /// # Errors
    ///
    /// Fails if no trace width realises the impedance on this substrate.
    pub fn new(
        spec: &Specification,
        impedance: f64,
        target_x: f64,
        height: f64,
        direction: Direction,
        child: Option<Box<dyn Element>>,
    ) -> LayoutResult<Self> {
        let width = trace_width(impedance, spec)?;
        Ok(Self {
            width,
            mitre: em::mitred_corner(width, spec),
            height,
            target_x,
            direction,
            child,
        })
    }
}

impl Element for MitredBend {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let length = self.target_x - anchor.x;
        if length.abs() < f64::EPSILON {
            return Err(LayoutError::DegenerateBend { x: self.target_x });
        }
        let sign = length / length.abs();
        let half = self.width / 2.0;
        let mut outline = Outline::new();

        outline.push(frame.project(0.0, -half));
        outline.push(frame.project(length - sign * half, -half));

        outline.push(frame.project(length - sign * half, -self.height));
        if let Some(child) = &self.child {
            outline.splice(child.place(frame.project(length, -self.height))?);
        }
        outline.push(frame.project(length + sign * half, -self.height));

        outline.push(frame.project(length + sign * half, -half - self.mitre));
        outline.push(frame.project(length - sign * half - self.mitre, half));

        outline.push(frame.project(0.0, half));
        Ok(outline)
    }
}
