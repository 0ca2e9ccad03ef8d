//! Loading birthsign data from JSON files.

use std::path::Path;

use crate::data::Birthsign;
use crate::error::{LoadError, Result};
use crate::validate::{validate_birthsigns, ValidationReport};

/// Default data file name.
pub const DEFAULT_DATA_FILE: &str = "birthsigns.json";

/// Parse a JSON document containing an array of birthsigns.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON, the top level is not an
/// array, or an element is not an object.
pub fn parse_birthsigns(json: &str) -> serde_json::Result<Vec<Birthsign>> {
    serde_json::from_str(json)
}

/// Load birthsigns from a JSON file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if its contents are not a birthsign array.
pub fn load_birthsigns(path: &Path) -> Result<Vec<Birthsign>> {
    let path_str = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path_str.clone(),
        source: e,
    })?;

    let birthsigns = parse_birthsigns(&contents).map_err(|e| LoadError::Parse {
        path: path_str.clone(),
        source: e,
    })?;

    tracing::debug!("Loaded {} birthsigns from '{path_str}'", birthsigns.len());
    Ok(birthsigns)
}

/// Load a file and validate every birthsign in it.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded. Structural problems in the
/// records are reported in the returned [`ValidationReport`], not as errors.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let birthsigns = load_birthsigns(path)?;
    let report = validate_birthsigns(&birthsigns);

    if report.is_valid() {
        tracing::info!(
            "Validated {} birthsigns in '{}'",
            report.checked(),
            path.display()
        );
    } else {
        tracing::warn!(
            "Found {} issue(s) across {} birthsigns in '{}'",
            report.issues().len(),
            report.checked(),
            path.display()
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_birthsigns("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_birthsigns(r#"{"name": "The Lady"}"#).is_err());
        assert!(parse_birthsigns("[1, 2]").is_err());
        assert!(parse_birthsigns("[[]]").is_err());
        assert!(parse_birthsigns(r#"[["The Lady", 5]]"#).is_err());
        assert!(parse_birthsigns("[").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_birthsigns(Path::new("does/not/exist/birthsigns.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist/birthsigns.json"));
    }
}
