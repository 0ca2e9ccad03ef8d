//! Plain-text summaries of birthsign bonuses.

use serde_json::Value;

use crate::data::{Birthsign, BonusDetail, BonusField, BonusType, DetailCheck};

/// Stats shown with a `Fortify` prefix.
const FORTIFIED_STATS: [&str; 3] = ["health", "magicka", "stamina"];

/// Find a birthsign by name, ignoring case.
#[must_use]
pub fn find_birthsign<'a>(birthsigns: &'a [Birthsign], name: &str) -> Option<&'a Birthsign> {
    let wanted = name.to_lowercase();
    birthsigns.iter().find(|b| b.name.to_lowercase() == wanted)
}

/// Human-readable stat label: `attack_speed` becomes `Attack Speed`,
/// `health` becomes `Fortify Health`.
#[must_use]
pub fn stat_label(stat: &str) -> String {
    let mut label = String::with_capacity(stat.len());
    let mut word_start = true;

    for c in stat.chars() {
        let c = if c == '_' { ' ' } else { c };
        if word_start && c.is_alphanumeric() {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        word_start = !c.is_alphanumeric();
    }

    if FORTIFIED_STATS.contains(&stat) {
        format!("Fortify {label}")
    } else {
        label
    }
}

/// One effect line, e.g. `Fortify Health: +10` or `Speed: +5%`.
#[must_use]
pub fn effect_line(stat: &str, detail: &BonusDetail) -> String {
    let value = match &detail.value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let suffix = match detail.kind {
        BonusType::Percent => "%",
        BonusType::Flat => "",
    };
    format!("{}: +{value}{suffix}", stat_label(stat))
}

/// Summary of a birthsign's base and enhanced effects.
///
/// Malformed entries are skipped; use the validator to find them.
#[must_use]
pub fn describe_birthsign(birthsign: &Birthsign) -> String {
    let mut out = format!("{}\nBase Effects:\n", birthsign.name);

    let base: Vec<String> = match &birthsign.bonus {
        Some(BonusField::Mapping(stats)) => stats
            .iter()
            .filter_map(|(stat, raw)| valid_line(stat, raw))
            .collect(),
        _ => Vec::new(),
    };
    push_lines(&mut out, &base);

    if let Some(enhanced) = birthsign.enhanced() {
        let skills = enhanced.trigger_skills().names();
        if skills.is_empty() {
            out.push_str("Enhanced Effects:\n");
        } else {
            out.push_str(&format!(
                "Enhanced Effects (requires {}):\n",
                skills.join(", ")
            ));
        }

        let lines: Vec<String> = enhanced
            .effects()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(stat, raw)| valid_line(stat, raw))
            .collect();
        push_lines(&mut out, &lines);
    }

    out
}

fn valid_line(stat: &str, raw: &Value) -> Option<String> {
    match BonusDetail::classify(raw) {
        DetailCheck::Valid(detail) => Some(effect_line(stat, &detail)),
        DetailCheck::Malformed | DetailCheck::UnknownType(_) => None,
    }
}

fn push_lines(out: &mut String, lines: &[String]) {
    if lines.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in lines {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}
