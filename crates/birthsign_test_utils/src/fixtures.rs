//! Test fixtures and helpers.
//!
//! JSON builders for birthsign records and helpers for writing them to
//! temporary data files.

use std::io::Write;

use birthsign_core::data::Birthsign;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// A `{ "value": ..., "type": "flat" }` detail.
#[must_use]
pub fn flat(value: i64) -> Value {
    json!({ "value": value, "type": "flat" })
}

/// A `{ "value": ..., "type": "percent" }` detail.
#[must_use]
pub fn percent(value: i64) -> Value {
    json!({ "value": value, "type": "percent" })
}

/// A record with a name and a base bonus object built from `(stat, detail)` pairs.
#[must_use]
pub fn birthsign_with_bonus(name: &str, stats: &[(&str, Value)]) -> Value {
    let bonus: serde_json::Map<String, Value> = stats
        .iter()
        .map(|(stat, detail)| ((*stat).to_string(), detail.clone()))
        .collect();
    json!({ "name": name, "bonus": bonus })
}

/// A small, fully valid data set modelled on the classic signs.
#[must_use]
pub fn valid_birthsigns() -> Value {
    json!([
        {
            "name": "The Warrior",
            "bonus": { "health": flat(10), "attack_damage": percent(5) },
            "enhanced_bonus": {
                "trigger_skills": ["Blade", "Block"],
                "effects": { "health": flat(5) }
            }
        },
        {
            "name": "The Mage",
            "bonus": { "magicka": flat(50) },
            "enhanced_bonus": {
                "trigger_skills": ["Destruction"],
                "effects": { "magicka": percent(10) }
            }
        },
        {
            "name": "The Thief",
            "bonus": { "stamina": flat(20), "sneak": percent(10) }
        },
        { "name": "The Tower", "bonus": "" }
    ])
}

/// Deserialize a JSON array fixture into birthsigns.
///
/// # Panics
///
/// Panics if the fixture is not a valid birthsign array.
#[must_use]
pub fn parse_fixture(value: Value) -> Vec<Birthsign> {
    serde_json::from_value(value).expect("fixture should be a birthsign array")
}

/// Write raw text to a temporary `.json` file kept alive by the returned handle.
///
/// # Panics
///
/// Panics if the temporary file cannot be created or written.
#[must_use]
pub fn write_data_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp data file");
    file.write_all(contents.as_bytes())
        .expect("write temp data file");
    file.flush().expect("flush temp data file");
    file
}

/// Write a JSON value to a temporary data file.
#[must_use]
pub fn write_json_file(value: &Value) -> NamedTempFile {
    write_data_file(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fixture_parses() {
        let signs = parse_fixture(valid_birthsigns());
        assert_eq!(signs.len(), 4);
        assert!(signs[0].has_base_stat("health"));
    }

    #[test]
    fn test_write_json_file_roundtrip() {
        let file = write_json_file(&valid_birthsigns());
        let contents = std::fs::read_to_string(file.path()).unwrap();
        let value: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value, valid_birthsigns());
    }
}
