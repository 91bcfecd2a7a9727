//! Validated design-token data for the documentation site.
//!
//! Parses the gray palette from a declarative YAML data file
//! (`grays.yml`) and validates its content at load time. The palette is
//! loaded once during site initialization and treated as immutable
//! afterwards; components that need default colors receive a reference
//! to it instead of reaching for ambient global state.
//!
//! # Data Format
//!
//! The data file is a YAML list of named shades:
//!
//! ```yaml
//! - name: 100
//!   hex: "#f8f9fa"
//! - name: 200
//!   hex: "#e9ecef"
//! ```
//!
//! A valid palette defines exactly the nine shades `100` through `900`
//! in ascending order, each with a `#rgb` or `#rrggbb` hex color.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Shade names a palette must define, in file order.
const SHADE_NAMES: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// A single named shade from the palette data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrayShade {
    /// Shade name (100, 200, ... 900).
    pub name: u16,
    /// Hex color value, including the leading `#`.
    pub hex: String,
}

/// The validated gray palette.
///
/// Construction goes through [`Grays::load`] or [`Grays::from_yaml`],
/// both of which validate the data, so a `Grays` value always holds the
/// full set of shades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grays {
    shades: Vec<GrayShade>,
}

/// Error type for palette data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// I/O error reading the data file.
    #[error("Failed to read palette data from {}: {source}", .path.display())]
    Io {
        /// Path of the data file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// YAML parsing error.
    #[error("Invalid palette data: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Invalid palette data: {0}")]
    Validation(String),
}

impl Grays {
    /// Load and validate the palette from a YAML data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML,
    /// or fails palette validation.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate the palette from YAML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid YAML or fails
    /// palette validation.
    pub fn from_yaml(content: &str) -> Result<Self, DataError> {
        let shades: Vec<GrayShade> = serde_yaml::from_str(content)?;
        validate_shades(&shades)?;
        Ok(Self { shades })
    }

    /// Look up the hex color of a shade by name.
    #[must_use]
    pub fn shade(&self, name: u16) -> Option<&str> {
        self.shades
            .iter()
            .find(|shade| shade.name == name)
            .map(|shade| shade.hex.as_str())
    }

    /// All shades in file order.
    #[must_use]
    pub fn shades(&self) -> &[GrayShade] {
        &self.shades
    }
}

/// Validate that the parsed shades form a complete palette.
fn validate_shades(shades: &[GrayShade]) -> Result<(), DataError> {
    if shades.len() != SHADE_NAMES.len() {
        return Err(DataError::Validation(format!(
            "expected {} gray shades, found {}",
            SHADE_NAMES.len(),
            shades.len()
        )));
    }

    for (shade, expected) in shades.iter().zip(SHADE_NAMES) {
        if shade.name != expected {
            return Err(DataError::Validation(format!(
                "expected shade {expected}, found {}",
                shade.name
            )));
        }
        if !HEX_COLOR_PATTERN.is_match(&shade.hex) {
            return Err(DataError::Validation(format!(
                "shade {} has invalid hex color '{}'",
                shade.name, shade.hex
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    const VALID_YAML: &str = r##"
- name: 100
  hex: "#f8f9fa"
- name: 200
  hex: "#e9ecef"
- name: 300
  hex: "#dee2e6"
- name: 400
  hex: "#ced4da"
- name: 500
  hex: "#adb5bd"
- name: 600
  hex: "#868e96"
- name: 700
  hex: "#495057"
- name: 800
  hex: "#343a40"
- name: 900
  hex: "#212529"
"##;

    #[test]
    fn test_from_yaml_valid() {
        let grays = Grays::from_yaml(VALID_YAML).unwrap();
        assert_eq!(grays.shades().len(), 9);
        assert_eq!(grays.shades()[0].name, 100);
        assert_eq!(grays.shades()[0].hex, "#f8f9fa");
    }

    #[test]
    fn test_shade_lookup() {
        let grays = Grays::from_yaml(VALID_YAML).unwrap();
        assert_eq!(grays.shade(300), Some("#dee2e6"));
        assert_eq!(grays.shade(600), Some("#868e96"));
        assert_eq!(grays.shade(650), None);
    }

    #[test]
    fn test_from_yaml_short_hex_accepted() {
        let yaml = VALID_YAML.replace("#f8f9fa", "#fff");
        let grays = Grays::from_yaml(&yaml).unwrap();
        assert_eq!(grays.shade(100), Some("#fff"));
    }

    #[test]
    fn test_from_yaml_missing_shade() {
        let yaml = r##"
- name: 100
  hex: "#f8f9fa"
"##;
        let err = Grays::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
        assert!(err.to_string().contains("expected 9 gray shades"));
    }

    #[test]
    fn test_from_yaml_out_of_order() {
        let yaml = VALID_YAML.replace("name: 200", "name: 250");
        let err = Grays::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
        assert!(err.to_string().contains("expected shade 200"));
    }

    #[test]
    fn test_from_yaml_invalid_hex() {
        let yaml = VALID_YAML.replace("#adb5bd", "adb5bd");
        let err = Grays::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
        assert!(err.to_string().contains("shade 500"));
        assert!(err.to_string().contains("adb5bd"));
    }

    #[test]
    fn test_from_yaml_not_a_list() {
        let err = Grays::from_yaml("just a string").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID_YAML.as_bytes()).unwrap();

        let grays = Grays::load(file.path()).unwrap();
        assert_eq!(grays.shade(900), Some("#212529"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Grays::load(Path::new("/nonexistent/grays.yml")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/grays.yml"));
    }
}
