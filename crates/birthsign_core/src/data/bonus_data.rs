//! Bonus data structures shared by base and enhanced bonuses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// How a bonus value is applied to its stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusType {
    /// Added to the stat as-is.
    Flat,
    /// Applied as a percentage of the stat.
    Percent,
}

impl BonusType {
    /// Every accepted bonus type.
    pub const ALL: [Self; 2] = [Self::Flat, Self::Percent];

    /// Name as written in data files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Percent => "percent",
        }
    }
}

impl fmt::Display for BonusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `type` string that is not one of [`BonusType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bonus type '{0}'")]
pub struct UnknownBonusType(pub String);

impl FromStr for BonusType {
    type Err = UnknownBonusType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "percent" => Ok(Self::Percent),
            other => Err(UnknownBonusType(other.to_string())),
        }
    }
}

/// The `bonus` field of a birthsign.
///
/// Data files use either an object keyed by stat name or the empty string
/// for "no bonus". Anything else is kept as [`BonusField::Invalid`] so the
/// validator can report it instead of failing the whole load.
#[derive(Debug, Clone, PartialEq)]
pub enum BonusField {
    /// `""`: the birthsign grants no base bonus.
    Empty,
    /// Stat name to raw bonus detail, in document order.
    Mapping(Map<String, Value>),
    /// Any other JSON value.
    Invalid(Value),
}

impl BonusField {
    /// Stat entries when this is a mapping.
    #[must_use]
    pub fn stats(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Mapping(stats) => Some(stats),
            Self::Empty | Self::Invalid(_) => None,
        }
    }

    /// Check if the mapping has an entry for `stat`.
    #[must_use]
    pub fn contains_stat(&self, stat: &str) -> bool {
        self.stats().is_some_and(|stats| stats.contains_key(stat))
    }
}

impl From<Value> for BonusField {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(stats) => Self::Mapping(stats),
            Value::String(s) if s.is_empty() => Self::Empty,
            other => Self::Invalid(other),
        }
    }
}

impl<'de> Deserialize<'de> for BonusField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// A well-formed `{ "value": ..., "type": ... }` stat modification.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusDetail {
    /// Magnitude of the modification. Not required to be numeric.
    pub value: Value,
    /// How `value` applies to the stat.
    pub kind: BonusType,
}

/// Outcome of inspecting one raw bonus detail.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailCheck<'a> {
    /// Not an object, or `value`/`type` is missing.
    Malformed,
    /// Both keys present but `type` is not an accepted [`BonusType`].
    UnknownType(&'a Value),
    /// Usable detail.
    Valid(BonusDetail),
}

impl BonusDetail {
    /// Inspect a raw detail value.
    ///
    /// Shape is checked before type, so a detail missing `type` is
    /// [`DetailCheck::Malformed`] rather than an unknown type.
    #[must_use]
    pub fn classify(raw: &Value) -> DetailCheck<'_> {
        let Some(fields) = raw.as_object() else {
            return DetailCheck::Malformed;
        };
        let (Some(value), Some(kind)) = (fields.get("value"), fields.get("type")) else {
            return DetailCheck::Malformed;
        };

        match kind.as_str().map(BonusType::from_str) {
            Some(Ok(kind)) => DetailCheck::Valid(Self {
                value: value.clone(),
                kind,
            }),
            _ => DetailCheck::UnknownType(kind),
        }
    }
}

/// `trigger_skills` of an enhanced bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerSkills<'a> {
    /// A JSON array (missing is treated as empty).
    List(&'a [Value]),
    /// Any non-array value.
    Invalid(&'a Value),
}

impl<'a> TriggerSkills<'a> {
    /// String entries of the list, skipping anything else.
    #[must_use]
    pub fn names(&self) -> Vec<&'a str> {
        match self {
            Self::List(skills) => skills.iter().filter_map(Value::as_str).collect(),
            Self::Invalid(_) => Vec::new(),
        }
    }
}

/// Read-only view over an `enhanced_bonus` object.
#[derive(Debug, Clone, Copy)]
pub struct EnhancedBonus<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> EnhancedBonus<'a> {
    /// Wrap a raw value. Returns `None` if it is not a JSON object.
    #[must_use]
    pub fn new(raw: &'a Value) -> Option<Self> {
        raw.as_object().map(|fields| Self { fields })
    }

    /// Skills gating the enhanced effects.
    #[must_use]
    pub fn trigger_skills(&self) -> TriggerSkills<'a> {
        match self.fields.get("trigger_skills") {
            None => TriggerSkills::List(&[]),
            Some(Value::Array(skills)) => TriggerSkills::List(skills),
            Some(other) => TriggerSkills::Invalid(other),
        }
    }

    /// Stat entries of `effects`, in document order.
    ///
    /// A missing `effects` key yields no entries.
    ///
    /// # Errors
    ///
    /// Returns the raw value if `effects` is present but not an object.
    pub fn effects(&self) -> Result<Vec<(&'a str, &'a Value)>, &'a Value> {
        match self.fields.get("effects") {
            None => Ok(Vec::new()),
            Some(Value::Object(effects)) => Ok(effects
                .iter()
                .map(|(stat, detail)| (stat.as_str(), detail))
                .collect()),
            Some(other) => Err(other),
        }
    }
}
