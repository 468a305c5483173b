//! aperture: microstrip patch antenna feed network synthesiser
//!
//! Reads a JSON design specification, synthesises the feed network and
//! radiator geometry for the requested array, and writes the result as a
//! KiCad board file next to the specification.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use aperture::em;
use aperture::kicad::Board;
use aperture::spec::{self, Specification};
use aperture::topology;

/// Microstrip patch antenna feed network synthesiser.
///
/// Turns a JSON design specification into a fabricable conductor outline
/// for a probe-fed patch antenna array, written as a `.kicad_pcb` file.
#[derive(Parser, Debug)]
#[command(name = "aperture")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the design specification file
    #[arg(value_name = "SPEC_FILE")]
    spec: PathBuf,

    /// Output board file path (defaults to the specification path with a
    /// .kicad_pcb extension)
    #[arg(short, long, value_name = "BOARD_FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Logs the intermediate design quantities, mirroring what an engineer
/// would check by hand before trusting the geometry.
fn log_derived_parameters(spec: &Specification) {
    if let Some(length) = spec.patch_length {
        info!(patch_length = length, "Overridden parameter");
    }
    if let Some(distance) = spec.inset_distance {
        info!(inset_distance = distance, "Overridden parameter");
    }

    let patch = em::microstrip_patch(spec);
    let edge = em::microstrip_patch_impedance(spec, patch.width);
    info!(
        wavelength_mm = em::wavelength(spec),
        width_50_ohm_mm = em::microstrip_width(50.0, spec),
        width_100_ohm_mm = em::microstrip_width(100.0, spec),
        "Transmission line parameters"
    );
    info!(
        width_mm = patch.width,
        length_mm = patch.length,
        edge_impedance_ohm = edge,
        "Patch parameters"
    );

    let match_width = em::microstrip_width((edge * 50.0_f64).sqrt(), spec);
    info!(
        match_width_mm = match_width,
        match_length_mm = em::effective_wavelength(match_width, spec) / 4.0,
        "Quarter wave match to 50 ohm"
    );
    match em::inset_distance(spec, 50.0) {
        Ok(distance) => info!(inset_distance_mm = distance, "Inset feed to 50 ohm"),
        Err(e) => info!(error = %e, "Inset feed to 50 ohm not realisable"),
    }

    let splitter_width = em::microstrip_width((100.0_f64 * 50.0).sqrt(), spec);
    info!(
        branch_width_mm = splitter_width,
        branch_length_mm = em::effective_wavelength(splitter_width, spec) / 4.0,
        "Power splitter branch"
    );
}

/// Entry point for the aperture synthesiser.
fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(get_log_level(args.verbose, args.quiet));

    // Display GPL license notice (required by GPLv3 Section 5d)
    eprintln!(
        "aperture {}  Copyright (C) 2026  The Embedded Society",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("This program comes with ABSOLUTELY NO WARRANTY.");
    eprintln!("This is free software, licensed under GPL-3.0-or-later.");
    eprintln!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
    eprintln!();

    let specification = match spec::load_spec(&args.spec) {
        Ok(specification) => specification,
        Err(e) => {
            error!(error = %e, "Specification error");
            return ExitCode::FAILURE;
        }
    };

    log_derived_parameters(&specification);

    let outline = match topology::synthesise(&specification) {
        Ok(outline) => outline,
        Err(e) => {
            error!(error = %e, "Synthesis failed");
            return ExitCode::FAILURE;
        }
    };
    info!(
        points = outline.points.len(),
        cutouts = outline.cutouts.len(),
        "Feed network synthesised"
    );

    let output = args
        .output
        .unwrap_or_else(|| args.spec.with_extension("kicad_pcb"));
    match Board::new(&specification, &outline).write(&output) {
        Ok(()) => {
            println!("Output file generated at {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Board file error");
            ExitCode::FAILURE
        }
    }
}
