//! Birthsign record as found in `birthsigns.json`.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::bonus_data::{BonusField, EnhancedBonus};

/// One birthsign entry.
///
/// Only the fields the validator cares about are modelled; any other keys in
/// the record are ignored.
///
/// # Example JSON
///
/// ```json
/// {
///     "name": "The Warrior",
///     "bonus": { "Strength": { "value": 10, "type": "flat" } },
///     "enhanced_bonus": {
///         "trigger_skills": ["Blade", "Block"],
///         "effects": { "Strength": { "value": 5, "type": "percent" } }
///     }
/// }
/// ```
///
/// Records must be JSON objects; an array in record position is rejected
/// rather than being filled by position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Birthsign {
    /// Display name used to prefix validation messages.
    pub name: String,

    /// Base bonus. `None` only when the key is absent; `null` is kept as
    /// [`BonusField::Invalid`].
    pub bonus: Option<BonusField>,

    /// Raw `enhanced_bonus` value. `None` only when the key is absent.
    pub enhanced_bonus: Option<Value>,
}

/// Name shown for records without a `name` key.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Field layout of a record object.
#[derive(Deserialize)]
struct BirthsignRecord {
    #[serde(default = "default_name", deserialize_with = "name_text")]
    name: String,
    #[serde(default, deserialize_with = "present")]
    bonus: Option<BonusField>,
    #[serde(default, deserialize_with = "present")]
    enhanced_bonus: Option<Value>,
}

impl TryFrom<Map<String, Value>> for Birthsign {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let record: BirthsignRecord = serde_json::from_value(Value::Object(fields))?;
        Ok(Self {
            name: record.name,
            bonus: record.bonus,
            enhanced_bonus: record.enhanced_bonus,
        })
    }
}

fn default_name() -> String {
    UNKNOWN_NAME.to_string()
}

/// Accept any JSON value as a name; non-strings are shown via [`value_text`].
fn name_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|name| value_text(&name))
}

/// Wraps a present value in `Some`, so an explicit `null` is not mistaken
/// for an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Text of a value inside a message.
///
/// Strings are verbatim, `null` is `None`, booleans are `True`/`False`,
/// numbers, arrays and objects are compact JSON.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

impl Birthsign {
    /// Create a birthsign with no bonuses.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bonus: None,
            enhanced_bonus: None,
        }
    }

    /// Check if the base bonus has an entry for `stat`.
    ///
    /// A missing or non-mapping bonus has no stats.
    #[must_use]
    pub fn has_base_stat(&self, stat: &str) -> bool {
        self.bonus
            .as_ref()
            .is_some_and(|bonus| bonus.contains_stat(stat))
    }

    /// View of the enhanced bonus, if present and an object.
    #[must_use]
    pub fn enhanced(&self) -> Option<EnhancedBonus<'_>> {
        self.enhanced_bonus.as_ref().and_then(EnhancedBonus::new)
    }
}
