//! Data validation command.

use std::io::Write;
use std::path::Path;

use birthsign_core::loader::validate_file;

use crate::ToolResult;

/// Validate a birthsign data file and print the report to `out`.
///
/// Returns `true` if the file has no issues.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the report cannot be
/// written. Nothing is written to `out` when loading fails.
pub fn validate_data_file(path: &Path, out: &mut impl Write) -> ToolResult<bool> {
    let report = validate_file(path)?;
    write!(out, "{report}")?;
    Ok(report.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolError;

    #[test]
    fn test_missing_file_writes_nothing() {
        let mut out = Vec::new();
        let result = validate_data_file(Path::new("missing/birthsigns.json"), &mut out);
        assert!(matches!(result, Err(ToolError::Load(_))));
        assert!(out.is_empty());
    }
}
