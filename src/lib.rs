//! aperture: microstrip patch antenna feed network synthesiser
//!
//! This library turns a small JSON design specification (frequency,
//! substrate, polarisation, array configuration) into a fabricable
//! conductor outline for a probe-fed microstrip patch antenna array,
//! written out as a KiCad board file.
//!
//! # Architecture
//!
//! Synthesis runs as a straight pipeline:
//!
//! - **Specification**: load and validate the JSON design file
//! - **EM calculations**: closed-form microstrip and patch formulas turn
//!   impedance and frequency targets into physical dimensions
//! - **Layout**: a tree of geometric elements (patches, lines, splitters,
//!   bends, inset feeds) that each emit their boundary contour, spliced
//!   into one continuous conductor outline
//! - **Topology**: assembles the element tree for the requested array
//!   configuration
//! - **Board output**: serialises the placed outline as a `.kicad_pcb`
//!   document
//!
//! # Modules
//!
//! - [`spec`] — Specification loading and validation
//! - [`em`] — Electromagnetic design calculations
//! - [`layout`] — Geometric element tree and placement
//! - [`topology`] — Feed network assembly
//! - [`kicad`] — Board file generation
//! - [`error`] — Specification error types

pub mod em;
pub mod error;
pub mod kicad;
pub mod layout;
pub mod spec;
pub mod topology;
