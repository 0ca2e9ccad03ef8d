//! Proptest strategies for birthsign documents.
//!
//! The generators mix well-formed and malformed shapes so properties are
//! exercised against every branch of the validator.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Generate a stat name from a small pool, so base and enhanced keys collide.
pub fn arb_stat() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("health".to_string()),
        Just("magicka".to_string()),
        Just("stamina".to_string()),
        Just("Strength".to_string()),
        Just("Luck".to_string()),
        "[a-z_]{1,12}",
    ]
}

/// Generate a `type` value, usually valid.
pub fn arb_bonus_type() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => Just(json!("flat")),
        3 => Just(json!("percent")),
        1 => "[a-z]{1,10}".prop_map(Value::from),
        1 => Just(Value::Null),
        1 => any::<i32>().prop_map(Value::from),
    ]
}

/// Generate a bonus detail, sometimes missing keys or not an object.
pub fn arb_detail() -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => (any::<i16>(), arb_bonus_type())
            .prop_map(|(value, kind)| json!({ "value": value, "type": kind })),
        1 => any::<i16>().prop_map(|value| json!({ "value": value })),
        1 => arb_bonus_type().prop_map(|kind| json!({ "type": kind })),
        1 => any::<i16>().prop_map(Value::from),
    ]
}

/// Generate a stat-to-detail object.
pub fn arb_stat_map() -> impl Strategy<Value = Value> {
    proptest::collection::vec((arb_stat(), arb_detail()), 0..5).prop_map(|entries| {
        Value::Object(entries.into_iter().collect::<Map<String, Value>>())
    })
}

/// Generate a `bonus` value: object, empty string, or something invalid.
pub fn arb_bonus() -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => arb_stat_map(),
        2 => Just(json!("")),
        1 => any::<i32>().prop_map(Value::from),
        1 => Just(Value::Null),
    ]
}

/// Generate `trigger_skills`: usually a list, sometimes a bare string.
pub fn arb_trigger_skills() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => proptest::collection::vec("[A-Z][a-z]{2,10}", 0..3)
            .prop_map(|skills| json!(skills)),
        1 => "[a-z]{3,10}".prop_map(Value::from),
    ]
}

/// Generate an `enhanced_bonus` value.
pub fn arb_enhanced_bonus() -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => (
            proptest::option::of(arb_trigger_skills()),
            proptest::option::of(arb_stat_map()),
        )
            .prop_map(|(skills, effects)| {
                let mut fields = Map::new();
                if let Some(skills) = skills {
                    fields.insert("trigger_skills".to_string(), skills);
                }
                if let Some(effects) = effects {
                    fields.insert("effects".to_string(), effects);
                }
                Value::Object(fields)
            }),
        1 => Just(json!([])),
    ]
}

/// Generate one birthsign record with each field independently present or absent.
pub fn arb_birthsign() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("The [A-Z][a-z]{2,8}"),
        proptest::option::of(arb_bonus()),
        proptest::option::of(arb_enhanced_bonus()),
    )
        .prop_map(|(name, bonus, enhanced)| {
            let mut fields = Map::new();
            if let Some(name) = name {
                fields.insert("name".to_string(), Value::from(name));
            }
            if let Some(bonus) = bonus {
                fields.insert("bonus".to_string(), bonus);
            }
            if let Some(enhanced) = enhanced {
                fields.insert("enhanced_bonus".to_string(), enhanced);
            }
            Value::Object(fields)
        })
}

/// Generate a whole data file: a JSON array of birthsigns.
pub fn arb_document(max_len: usize) -> impl Strategy<Value = Value> {
    proptest::collection::vec(arb_birthsign(), 0..max_len).prop_map(Value::Array)
}
