//! Feed network element implementations.
//!
//! Each element family has its own module implementing the construction
//! (dimension derivation) and placement (point emission) halves of the
//! [`Element`](crate::layout::Element) contract.

pub mod bend;
pub mod inset;
pub mod line;
pub mod patch;
pub mod splitter;

pub use bend::MitredBend;
pub use inset::InsetFeed;
pub use line::{Line, LineToX};
pub use patch::{Patch, SquarePatch};
pub use splitter::{LineFeedSplitter, PinFeedSplitter};

use crate::em;
use crate::layout::error::{LayoutError, LayoutResult};
use crate::spec::Specification;

/// Resolves a target impedance to a trace width, turning the width
/// search's "not found" sentinel into a proper error so that no element
/// is ever constructed with zero-width geometry.
pub(crate) fn trace_width(target: f64, spec: &Specification) -> LayoutResult<f64> {
    let width = em::microstrip_width(target, spec);
    if width <= 0.0 {
        Err(LayoutError::WidthNotFound { target })
    } else {
        Ok(width)
    }
}
