//! Bonus viewer command.

use std::io::Write;
use std::path::Path;

use birthsign_core::describe::{describe_birthsign, find_birthsign};
use birthsign_core::loader::load_birthsigns;

use crate::{ToolError, ToolResult};

/// Print the bonus summary of the birthsign called `name` (any case).
///
/// # Errors
///
/// Returns [`ToolError::NotFound`] if no record has that name, or an error
/// if the file cannot be loaded.
pub fn show_birthsign(path: &Path, name: &str, out: &mut impl Write) -> ToolResult<()> {
    let birthsigns = load_birthsigns(path)?;
    let birthsign =
        find_birthsign(&birthsigns, name).ok_or_else(|| ToolError::NotFound(name.to_string()))?;

    write!(out, "{}", describe_birthsign(birthsign))?;
    Ok(())
}
