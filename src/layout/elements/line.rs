//! Straight microstrip trace elements.

use crate::em;
use crate::layout::elements::trace_width;
use crate::layout::error::LayoutResult;
use crate::layout::{Direction, Element, Frame, Outline, Point};
use crate::spec::Specification;

/// A straight microstrip trace of fixed length.
///
/// The trace runs along local +x from the anchor; an optional child is
/// attached at the far end, on the centreline.
#[derive(Debug)]
pub struct Line {
    width: f64,
    length: f64,
    direction: Direction,
    child: Option<Box<dyn Element>>,
}

impl Line {
    /// Creates a trace with the given characteristic impedance and length.
    ///
    /// # Errors
    ///
    /// Fails if no trace width realises the impedance on this substrate.
    pub fn new(
        spec: &Specification,
        impedance: f64,
        length: f64,
        direction: Direction,
        child: Option<Box<dyn Element>>,
    ) -> LayoutResult<Self> {
        Ok(Self {
            width: trace_width(impedance, spec)?,
            length,
            direction,
            child,
        })
    }

    /// Creates a quarter-wave impedance transformer between `z1` and `z2`.
    ///
    /// The trace impedance is the geometric mean of the two and its length
    /// is one quarter of the guided wavelength at that width.
    ///
    /// # Errors
    ///
    /// Fails if no trace width realises the transformer impedance.
    pub fn quarter_wave(
        spec: &Specification,
        z1: f64,
        z2: f64,
        direction: Direction,
        child: Option<Box<dyn Element>>,
    ) -> LayoutResult<Self> {
        let impedance = (z1 * z2).sqrt();
        let width = trace_width(impedance, spec)?;
        let length = em::effective_wavelength(width, spec) / 4.0;
        Ok(Self {
            width,
            length,
            direction,
            child,
        })
    }

    /// Trace width (mm).
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Trace length (mm).
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }
}

impl Element for Line {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let mut outline = Outline::new();

        outline.push(frame.project(0.0, self.width / 2.0));
        outline.push(frame.project(self.length, self.width / 2.0));
        if let Some(child) = &self.child {
            outline.splice(child.place(frame.project(self.length, 0.0))?);
        }
        outline.push(frame.project(self.length, -self.width / 2.0));
        outline.push(frame.project(0.0, -self.width / 2.0));

        Ok(outline)
    }
}

/// A straight microstrip trace that terminates at a fixed global x
/// coordinate, regardless of where it starts.
///
/// Its length is resolved at placement time as `end_x - anchor.x`, which
/// lets a feed line absorb whatever run remains between a splitter branch
/// and a fixed element position.
#[derive(Debug)]
pub struct LineToX {
    width: f64,
    end_x: f64,
    direction: Direction,
    child: Option<Box<dyn Element>>,
}

impl LineToX {
    /// Creates a trace ending at global x = `end_x`.
    ///
    /// # Errors
    ///
    /// Fails if no trace width realises the impedance on this substrate.
    pub fn new(
        spec: &Specification,
        impedance: f64,
        end_x: f64,
        direction: Direction,
        child: Option<Box<dyn Element>>,
    ) -> LayoutResult<Self> {
        Ok(Self {
            width: trace_width(impedance, spec)?,
            end_x,
            direction,
            child,
        })
    }
}

impl Element for LineToX {
    fn place(&self, anchor: Point) -> LayoutResult<Outline> {
        let frame = Frame::new(self.direction, anchor);
        let length = self.end_x - anchor.x;
        let mut outline = Outline::new();

        outline.push(frame.project(0.0, self.width / 2.0));
        outline.push(frame.project(length, self.width / 2.0));
        if let Some(child) = &self.child {
            outline.splice(child.place(frame.project(length, 0.0))?);
        }
        outline.push(frame.project(length, -self.width / 2.0));
        outline.push(frame.project(0.0, -self.width / 2.0));

        Ok(outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::test_support::fr4_spec;

    #[test]
    fn line_emits_four_corner_points() {
        let spec = fr4_spec();
        let line = Line::new(&spec, 50.0, 10.0, Direction::Left, None).unwrap();
        let outline = line.place(Point::new(0.0, 0.0)).unwrap();

        assert_eq!(outline.points.len(), 4);
        let w = line.width();
        assert_eq!(outline.points[0], Point::new(0.0, w / 2.0));
        assert_eq!(outline.points[1], Point::new(10.0, w / 2.0));
        assert_eq!(outline.points[2], Point::new(10.0, -w / 2.0));
        assert_eq!(outline.points[3], Point::new(0.0, -w / 2.0));
    }

    #[test]
    fn placement_is_idempotent() {
        let spec = fr4_spec();
        let line = Line::new(&spec, 50.0, 8.0, Direction::Up, None).unwrap();
        let anchor = Point::new(3.0, -4.0);
        let first = line.place(anchor).unwrap();
        let second = line.place(anchor).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mirrored_line_extends_negative_x() {
        let spec = fr4_spec();
        let line = Line::new(&spec, 50.0, 10.0, Direction::Right, None).unwrap();
        let outline = line.place(Point::new(0.0, 0.0)).unwrap();
        assert!(outline.points[1].x < 0.0);
    }

    #[test]
    fn quarter_wave_length_matches_effective_wavelength() {
        let spec = fr4_spec();
        let line = Line::quarter_wave(&spec, 50.0, 100.0, Direction::Left, None).unwrap();
        let expected = em::effective_wavelength(line.width(), &spec) / 4.0;
        assert!((line.length() - expected).abs() < 1e-12);
        let z = em::microstrip_impedance(line.width(), &spec);
        assert!((z - (50.0_f64 * 100.0).sqrt()).abs() < 1.0);
    }

    #[test]
    fn child_is_spliced_at_far_end() {
        let spec = fr4_spec();
        let tip = Line::new(&spec, 50.0, 2.0, Direction::Left, None).unwrap();
        let line = Line::new(&spec, 50.0, 10.0, Direction::Left, Some(Box::new(tip))).unwrap();
        let outline = line.place(Point::new(0.0, 0.0)).unwrap();

        assert_eq!(outline.points.len(), 8);
        // Child points sit between the parent's far-end corners
        assert!((outline.points[2].x - 10.0).abs() < 1e-12);
        assert!((outline.points[3].x - 12.0).abs() < 1e-12);
    }

    #[test]
    fn line_to_x_resolves_length_from_anchor() {
        let spec = fr4_spec();
        let line = LineToX::new(&spec, 50.0, 25.0, Direction::Left, None).unwrap();

        let from_origin = line.place(Point::new(0.0, 0.0)).unwrap();
        assert!((from_origin.points[1].x - 25.0).abs() < 1e-12);

        let from_offset = line.place(Point::new(10.0, 0.0)).unwrap();
        assert!((from_offset.points[1].x - 25.0).abs() < 1e-12);
    }
}
