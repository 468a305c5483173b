//! Geometric composition of the feed network.
//!
//! A feed network is a rooted tree of typed elements (patches, line
//! segments, splitters, bends, inset feeds). Each element derives its
//! physical dimensions once at construction from the [`em`](crate::em)
//! formulas, and on placement emits its boundary contour in global
//! coordinates, splicing in the contours of its children at their
//! attachment points. One placement call on the root therefore yields a
//! single continuous, correctly ordered conductor boundary.
//!
//! # Coordinate convention
//!
//! Every element describes its shape in a local frame whose origin is the
//! point where the parent attaches it, with the element extending along
//! +x. The element's fixed [`Direction`] maps local coordinates into the
//! global frame, and its anchor (passed by the parent at placement time)
//! translates them. This lets one subtree definition face any of the four
//! cardinal directions.

pub mod elements;
pub mod error;

pub use elements::{
    InsetFeed, Line, LineFeedSplitter, LineToX, MitredBend, Patch, PinFeedSplitter, SquarePatch,
};
pub use error::LayoutError;

use serde::{Deserialize, Serialize};

/// A 2D point in board coordinates (mm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cardinal orientation of an element, fixed at construction.
///
/// `Left` is the canonical frame: the element extends along global +x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Canonical orientation; local coordinates pass through unchanged.
    #[default]
    Left,
    /// Local (x, y) maps to (y, -x).
    Up,
    /// Local (x, y) maps to (-x, y).
    Right,
    /// Local (x, y) maps to (y, x).
    Down,
}

impl Direction {
    /// Maps a local point into the unrotated global frame.
    #[must_use]
    pub const fn apply(self, p: Point) -> Point {
        match self {
            Self::Left => p,
            Self::Up => Point::new(p.y, -p.x),
            Self::Right => Point::new(-p.x, p.y),
            Self::Down => Point::new(p.y, p.x),
        }
    }

    /// Inverse of [`apply`](Self::apply): recovers the local point from
    /// its mapped image.
    #[must_use]
    pub const fn unapply(self, p: Point) -> Point {
        match self {
            Self::Left => p,
            Self::Up => Point::new(-p.y, p.x),
            Self::Right => Point::new(-p.x, p.y),
            Self::Down => Point::new(p.y, p.x),
        }
    }
}

/// A local coordinate frame: an element's direction plus its anchor.
///
/// Elements build one of these at the top of their placement call and
/// project every local point through it.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    direction: Direction,
    anchor: Point,
}

impl Frame {
    /// Creates a frame for the given orientation anchored at `anchor`.
    #[must_use]
    pub const fn new(direction: Direction, anchor: Point) -> Self {
        Self { direction, anchor }
    }

    /// Projects a local coordinate pair into the global frame.
    #[must_use]
    pub fn project(&self, x: f64, y: f64) -> Point {
        let p = self.direction.apply(Point::new(x, y));
        Point::new(p.x + self.anchor.x, p.y + self.anchor.y)
    }
}

/// The ordered point sequence produced by placing an element tree.
///
/// `points` is the conductor boundary; ordering defines the polygon
/// winding for fabrication and is preserved exactly as emitted. `cutouts`
/// holds disjoint sub-regions (via holes) that must be subtracted from
/// the board rather than traced into the boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outline {
    /// Boundary points, in emission order.
    pub points: Vec<Point>,
    /// Disjoint cutout contours (e.g. feed pin holes).
    pub cutouts: Vec<Vec<Point>>,
}

impl Outline {
    /// Creates an empty outline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            cutouts: Vec::new(),
        }
    }

    /// Appends one boundary point.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Adds a disjoint cutout contour.
    pub fn push_cutout(&mut self, contour: Vec<Point>) {
        self.cutouts.push(contour);
    }

    /// Splices a child outline in at the current boundary position.
    ///
    /// The child's boundary points continue the parent's sequence; its
    /// cutouts are carried alongside.
    pub fn splice(&mut self, child: Self) {
        self.points.extend(child.points);
        self.cutouts.extend(child.cutouts);
    }

    /// Returns true if the boundary has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A placeable feed network element.
///
/// Placement is a pure function of the element's stored geometry, its
/// children and the anchor: calling it twice with the same anchor yields
/// identical outlines.
pub trait Element: std::fmt::Debug {
    /// Emits the global boundary points for this element and all of its
    /// descendants, anchored at `anchor`.
    ///
    /// # Errors
    ///
    /// Fails if any element in the subtree resolves to degenerate
    /// geometry; no partial outline is returned.
    fn place(&self, anchor: Point) -> Result<Outline, LayoutError>;
}
