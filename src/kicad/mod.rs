//! KiCad board file generation.
//!
//! Serialises a placed conductor outline into a minimal `.kicad_pcb`
//! s-expression document: the conductor boundary as a filled polygon on
//! the front copper layer, cutout contours and the circular board edge on
//! `Edge.Cuts`, and the dielectric thickness in the board's general
//! section. The file opens directly in the KiCad PCB editor for review
//! and manufacturing export.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::layout::{Outline, Point};
use crate::spec::Specification;

/// File format version written to the board header.
///
/// Matches the KiCad 7 stable format.
const FORMAT_VERSION: u32 = 20221018;

/// Line width used for edge-cut strokes (mm).
const EDGE_STROKE: f64 = 0.1;

/// Errors from board file generation.
#[derive(Debug, Error)]
pub enum KicadError {
    /// The board file could not be written.
    #[error("failed to write board file: {path}")]
    FileWrite {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl KicadError {
    /// Creates a [`KicadError::FileWrite`] error.
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}

/// A renderable board: the placed outline plus the board-level facts
/// taken from the specification.
pub struct Board<'a> {
    spec: &'a Specification,
    outline: &'a Outline,
}

impl<'a> Board<'a> {
    /// Creates a board from a specification and its placed outline.
    #[must_use]
    pub const fn new(spec: &'a Specification, outline: &'a Outline) -> Self {
        Self { spec, outline }
    }

    /// Renders the board as a `.kicad_pcb` document.
    ///
    /// Coordinates are emitted to four decimal places (0.1 um), with the
    /// y axis negated to map the layout's y-up convention onto KiCad's
    /// y-down board frame.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "(kicad_pcb (version {FORMAT_VERSION}) (generator aperture)\n"
        ));
        let _ = writeln!(
            out,
            "  (general (thickness {:.4}))",
            self.spec.dielectric_thickness
        );
        out.push_str("  (paper \"A4\")\n");
        out.push_str("  (layers\n");
        out.push_str("    (0 \"F.Cu\" signal)\n");
        out.push_str("    (31 \"B.Cu\" signal)\n");
        out.push_str("    (44 \"Edge.Cuts\" user)\n");
        out.push_str("  )\n");

        render_polygon(&mut out, &self.outline.points, "F.Cu", true);
        for cutout in &self.outline.cutouts {
            render_polygon(&mut out, cutout, "Edge.Cuts", false);
        }

        let _ = writeln!(
            out,
            "  (gr_circle (center 0 0) (end {:.4} 0) (layer \"Edge.Cuts\") \
             (stroke (width {EDGE_STROKE}) (type solid)) (fill none))",
            self.spec.body_radius
        );

        out.push_str(")\n");
        out
    }

    /// Writes the rendered board to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), KicadError> {
        let path = path.as_ref();
        std::fs::write(path, self.render()).map_err(|e| KicadError::file_write(path, e))?;

        tracing::info!(
            path = %path.display(),
            points = self.outline.points.len(),
            cutouts = self.outline.cutouts.len(),
            "Wrote board file"
        );
        Ok(())
    }
}

/// Renders one polygon as a `gr_poly` node on the given layer.
fn render_polygon(out: &mut String, points: &[Point], layer: &str, filled: bool) {
    if points.is_empty() {
        return;
    }
    out.push_str("  (gr_poly\n    (pts\n");
    for p in points {
        let _ = writeln!(out, "      (xy {:.4} {:.4})", p.x, -p.y);
    }
    let fill = if filled { "solid" } else { "none" };
    let _ = writeln!(
        out,
        "    )\n    (layer \"{layer}\") (stroke (width 0) (type solid)) (fill {fill}))"
    );
}
