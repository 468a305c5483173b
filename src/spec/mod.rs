//! Specification file loading and parsing.
//!
//! This module handles loading the antenna design specification from disk
//! and parsing it into a validated, type-safe structure. The specification
//! is the single read-only input to every electromagnetic formula and
//! every geometric element constructor.
//!
//! # Example Specification
//!
//! ```json
//! {
//!     "frequency": 2.45e9,
//!     "body_radius": 50.0,
//!     "dielectric_thickness": 1.6,
//!     "dielectric_constant": 4.3,
//!     "copper_thickness": 0.035,
//!     "polarisation": "axial",
//!     "patch_count": 2,
//!     "feed_type": "quarter_wave"
//! }
//! ```

mod params;

pub use params::{FeedType, Polarisation, Specification};

use std::path::Path;

use crate::error::SpecError;

/// Loads and parses a specification file.
///
/// # Errors
///
/// Returns an error if:
/// - The specification file cannot be found
/// - The file cannot be read
/// - The JSON is malformed or missing required parameters
/// - A parameter value is outside its physical range
pub fn load_spec(path: &Path) -> Result<Specification, SpecError> {
    if !path.exists() {
        return Err(SpecError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| SpecError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let spec: Specification = serde_json::from_str(&contents).map_err(|e| SpecError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Validate before anything downstream consumes the values
    spec.validate()?;

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_reported() {
        let result = load_spec(Path::new("/no/such/antenna.json"));
        assert!(matches!(result, Err(SpecError::NotFound { .. })));
    }

    #[test]
    fn load_valid_spec_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("antenna.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "frequency": 2.45e9,
                "body_radius": 50.0,
                "dielectric_thickness": 1.6,
                "dielectric_constant": 4.3,
                "copper_thickness": 0.035,
                "polarisation": "axial",
                "patch_count": 2,
                "feed_type": "quarter_wave"
            }}"#
        )
        .unwrap();

        let spec = load_spec(&path).unwrap();
        assert_eq!(spec.patch_count, 2);
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_spec(&path);
        assert!(matches!(result, Err(SpecError::ParseError { .. })));
    }
}
