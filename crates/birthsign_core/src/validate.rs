//! Structural validation of birthsign records.
//!
//! Validation never stops at the first problem: every issue across every
//! record is collected, in document order, into a [`ValidationReport`].

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::data::{value_text, Birthsign, BonusDetail, BonusField, DetailCheck, TriggerSkills};

/// Header printed above the issue list.
pub const ERROR_HEADER: &str = "Validation Errors:";

/// Line printed when no issues were found.
pub const SUCCESS_MESSAGE: &str = "All birthsigns are correctly formatted!";

/// Which bonus block a stat entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusSection {
    /// The base `bonus` mapping.
    Bonus,
    /// `enhanced_bonus.effects`.
    EnhancedBonus,
}

impl fmt::Display for BonusSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bonus => "bonus",
            Self::EnhancedBonus => "enhanced_bonus",
        })
    }
}

/// A single structural problem in a birthsign record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Detail is not an object or lacks `value`/`type`.
    #[error("{name}: Invalid format in {section} for '{stat}'")]
    InvalidFormat {
        /// Birthsign name.
        name: String,
        /// Block containing the stat.
        section: BonusSection,
        /// Stat key.
        stat: String,
    },

    /// Detail `type` is not `flat` or `percent`.
    #[error("{name}: Invalid type '{kind}' in {section} for '{stat}'")]
    InvalidType {
        /// Birthsign name.
        name: String,
        /// Block containing the stat.
        section: BonusSection,
        /// Stat key.
        stat: String,
        /// The offending type, as written.
        kind: String,
    },

    /// `bonus` is neither an object nor `""`.
    #[error("{name}: Bonus must be an object or empty string")]
    BonusShape {
        /// Birthsign name.
        name: String,
    },

    /// `enhanced_bonus` is not an object.
    #[error("{name}: enhanced_bonus must be an object")]
    EnhancedBonusShape {
        /// Birthsign name.
        name: String,
    },

    /// `trigger_skills` is not an array.
    #[error("{name}: trigger_skills should be a list")]
    TriggerSkillsShape {
        /// Birthsign name.
        name: String,
    },

    /// `effects` is not an object.
    #[error("{name}: effects should be an object")]
    EffectsShape {
        /// Birthsign name.
        name: String,
    },

    /// An enhanced effect targets a stat missing from the base bonus.
    #[error("{name}: Enhanced bonus modifies '{stat}', but it's not in the base bonus")]
    MissingBaseStat {
        /// Birthsign name.
        name: String,
        /// Stat key.
        stat: String,
    },
}

/// Result of validating a set of birthsigns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    checked: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether no issues were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issues, in the order they were found.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Number of records inspected.
    #[must_use]
    pub fn checked(&self) -> usize {
        self.checked
    }
}

/// Renders exactly what the validator prints to stdout.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "{SUCCESS_MESSAGE}");
        }

        writeln!(f, "{ERROR_HEADER}")?;
        for issue in &self.issues {
            writeln!(f, " - {issue}")?;
        }
        Ok(())
    }
}

/// Validate every birthsign and collect all issues.
pub fn validate_birthsigns(birthsigns: &[Birthsign]) -> ValidationReport {
    let mut issues = Vec::new();

    for birthsign in birthsigns {
        let before = issues.len();
        validate_birthsign(birthsign, &mut issues);
        tracing::debug!(
            "Checked birthsign '{}': {} issue(s)",
            birthsign.name,
            issues.len() - before
        );
    }

    ValidationReport {
        checked: birthsigns.len(),
        issues,
    }
}

/// Validate a single birthsign, appending any issues to `issues`.
pub fn validate_birthsign(birthsign: &Birthsign, issues: &mut Vec<ValidationIssue>) {
    let name = birthsign.name.as_str();

    match &birthsign.bonus {
        Some(BonusField::Mapping(stats)) => {
            for (stat, detail) in stats {
                check_detail(name, BonusSection::Bonus, stat, detail, issues);
            }
        }
        Some(BonusField::Invalid(_)) => issues.push(ValidationIssue::BonusShape {
            name: name.to_string(),
        }),
        Some(BonusField::Empty) | None => {}
    }

    if birthsign.enhanced_bonus.is_none() {
        return;
    }
    let Some(enhanced) = birthsign.enhanced() else {
        issues.push(ValidationIssue::EnhancedBonusShape {
            name: name.to_string(),
        });
        return;
    };

    if let TriggerSkills::Invalid(_) = enhanced.trigger_skills() {
        issues.push(ValidationIssue::TriggerSkillsShape {
            name: name.to_string(),
        });
    }

    let effects = match enhanced.effects() {
        Ok(effects) => effects,
        Err(_) => {
            issues.push(ValidationIssue::EffectsShape {
                name: name.to_string(),
            });
            return;
        }
    };

    for (stat, detail) in effects {
        check_detail(name, BonusSection::EnhancedBonus, stat, detail, issues);

        if !birthsign.has_base_stat(stat) {
            issues.push(ValidationIssue::MissingBaseStat {
                name: name.to_string(),
                stat: stat.to_string(),
            });
        }
    }
}

fn check_detail(
    name: &str,
    section: BonusSection,
    stat: &str,
    detail: &Value,
    issues: &mut Vec<ValidationIssue>,
) {
    match BonusDetail::classify(detail) {
        DetailCheck::Valid(_) => {}
        DetailCheck::Malformed => issues.push(ValidationIssue::InvalidFormat {
            name: name.to_string(),
            section,
            stat: stat.to_string(),
        }),
        DetailCheck::UnknownType(kind) => issues.push(ValidationIssue::InvalidType {
            name: name.to_string(),
            section,
            stat: stat.to_string(),
            kind: value_text(kind),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sign(value: Value) -> Birthsign {
        serde_json::from_value(value).unwrap()
    }

    fn messages(value: Value) -> Vec<String> {
        let report = validate_birthsigns(&[sign(value)]);
        report.issues().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_input_is_valid() {
        let report = validate_birthsigns(&[]);
        assert!(report.is_valid());
        assert_eq!(report.checked(), 0);
        assert_eq!(report.to_string(), format!("{SUCCESS_MESSAGE}\n"));
    }

    #[test]
    fn test_record_without_bonuses_is_valid() {
        assert!(messages(json!({"name": "The Tower"})).is_empty());
    }

    #[test]
    fn test_valid_bonus() {
        assert!(messages(json!({
            "name": "The Warrior",
            "bonus": {"Strength": {"value": 5, "type": "flat"}}
        }))
        .is_empty());
    }

    #[test]
    fn test_bonus_missing_type() {
        assert_eq!(
            messages(json!({
                "name": "The Warrior",
                "bonus": {"Strength": {"value": 5}}
            })),
            vec!["The Warrior: Invalid format in bonus for 'Strength'"]
        );
    }

    #[test]
    fn test_bonus_detail_not_an_object() {
        assert_eq!(
            messages(json!({"name": "The Mage", "bonus": {"Magicka": 50}})),
            vec!["The Mage: Invalid format in bonus for 'Magicka'"]
        );
    }

    #[test]
    fn test_bonus_unknown_type() {
        assert_eq!(
            messages(json!({
                "name": "The Warrior",
                "bonus": {"Strength": {"value": 5, "type": "multiplier"}}
            })),
            vec!["The Warrior: Invalid type 'multiplier' in bonus for 'Strength'"]
        );
    }

    #[test]
    fn test_non_string_type_rendering() {
        assert_eq!(
            messages(json!({
                "name": "The Thief",
                "bonus": {
                    "Agility": {"value": 5, "type": null},
                    "Speed": {"value": 5, "type": true},
                    "Luck": {"value": 5, "type": 3},
                    "Sneak": {"value": 5, "type": ["flat"]}
                }
            })),
            vec![
                "The Thief: Invalid type 'None' in bonus for 'Agility'",
                "The Thief: Invalid type 'True' in bonus for 'Speed'",
                "The Thief: Invalid type '3' in bonus for 'Luck'",
                r#"The Thief: Invalid type '["flat"]' in bonus for 'Sneak'"#,
            ]
        );
    }

    #[test]
    fn test_null_name_prefix() {
        assert_eq!(
            messages(json!({"name": null, "bonus": 5})),
            vec!["None: Bonus must be an object or empty string"]
        );
    }

    #[test]
    fn test_bonus_shapes() {
        assert!(messages(json!({"name": "The Lover", "bonus": ""})).is_empty());
        assert_eq!(
            messages(json!({"name": "The Lover", "bonus": 5})),
            vec!["The Lover: Bonus must be an object or empty string"]
        );
        assert_eq!(
            messages(json!({"name": "The Lover", "bonus": "none"})),
            vec!["The Lover: Bonus must be an object or empty string"]
        );
        assert_eq!(
            messages(json!({"name": "The Lover", "bonus": null})),
            vec!["The Lover: Bonus must be an object or empty string"]
        );
    }

    #[test]
    fn test_unknown_name_prefix() {
        assert_eq!(
            messages(json!({"bonus": 5})),
            vec!["Unknown: Bonus must be an object or empty string"]
        );
    }

    #[test]
    fn test_enhanced_effect_must_exist_in_base() {
        assert_eq!(
            messages(json!({
                "name": "The Lord",
                "bonus": {"Strength": {"value": 5, "type": "flat"}},
                "enhanced_bonus": {
                    "trigger_skills": ["Blade"],
                    "effects": {"Luck": {"value": 5, "type": "flat"}}
                }
            })),
            vec!["The Lord: Enhanced bonus modifies 'Luck', but it's not in the base bonus"]
        );
    }

    #[test]
    fn test_enhanced_effect_with_empty_base() {
        assert_eq!(
            messages(json!({
                "name": "The Ritual",
                "bonus": "",
                "enhanced_bonus": {"effects": {"Health": {"value": 5, "type": "flat"}}}
            })),
            vec!["The Ritual: Enhanced bonus modifies 'Health', but it's not in the base bonus"]
        );
    }

    #[test]
    fn test_trigger_skills_must_be_list() {
        assert_eq!(
            messages(json!({
                "name": "The Warrior",
                "enhanced_bonus": {"trigger_skills": "swordplay"}
            })),
            vec!["The Warrior: trigger_skills should be a list"]
        );
    }

    #[test]
    fn test_enhanced_detail_issues_precede_base_check() {
        assert_eq!(
            messages(json!({
                "name": "The Shadow",
                "bonus": {"Sneak": {"value": 10, "type": "flat"}},
                "enhanced_bonus": {
                    "trigger_skills": ["Sneak"],
                    "effects": {
                        "Sneak": {"value": 5},
                        "Luck": {"value": 5, "type": "bogus"}
                    }
                }
            })),
            vec![
                "The Shadow: Invalid format in enhanced_bonus for 'Sneak'",
                "The Shadow: Invalid type 'bogus' in enhanced_bonus for 'Luck'",
                "The Shadow: Enhanced bonus modifies 'Luck', but it's not in the base bonus",
            ]
        );
    }

    #[test]
    fn test_enhanced_bonus_not_an_object() {
        assert_eq!(
            messages(json!({"name": "The Apprentice", "enhanced_bonus": ["Destruction"]})),
            vec!["The Apprentice: enhanced_bonus must be an object"]
        );
    }

    #[test]
    fn test_effects_not_an_object() {
        assert_eq!(
            messages(json!({
                "name": "The Apprentice",
                "enhanced_bonus": {"trigger_skills": 1, "effects": "Magicka"}
            })),
            vec![
                "The Apprentice: trigger_skills should be a list",
                "The Apprentice: effects should be an object",
            ]
        );
    }

    #[test]
    fn test_issues_accumulate_across_records() {
        let signs = [
            sign(json!({"name": "A", "bonus": 1})),
            sign(json!({"name": "B"})),
            sign(json!({"name": "C", "bonus": {"Luck": {"type": "flat"}}})),
        ];
        let report = validate_birthsigns(&signs);
        assert_eq!(report.checked(), 3);
        assert_eq!(
            report.to_string(),
            "Validation Errors:\n \
             - A: Bonus must be an object or empty string\n \
             - C: Invalid format in bonus for 'Luck'\n"
        );
    }

    #[test]
    fn test_bonus_issues_keep_document_order() {
        let issues = messages(json!({
            "name": "The Atronach",
            "bonus": {
                "Magicka": {"value": 150},
                "Agility": {"value": 1},
                "Blocking": {"value": 1}
            }
        }));
        assert_eq!(
            issues,
            vec![
                "The Atronach: Invalid format in bonus for 'Magicka'",
                "The Atronach: Invalid format in bonus for 'Agility'",
                "The Atronach: Invalid format in bonus for 'Blocking'",
            ]
        );
    }
}
