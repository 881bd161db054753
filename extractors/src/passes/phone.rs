//! Phone pass: French numbers first, then a `+CC` international fallback for
//! numbers whose normalized digit string was not already captured as French.
//! The seen-set is threaded explicitly between the two sub-passes so the
//! ordering dependency stays visible.

use std::collections::HashSet;

use shared_types::{Entity, EntityKind};

use crate::patterns::PatternRegistry;
use crate::{REGEX_CONFIDENCE, SECONDARY_REGEX_SCALE};

pub fn extract(patterns: &PatternRegistry, text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut french_digits: HashSet<String> = HashSet::new();

    for m in patterns.phone_fr.find_iter(text) {
        let digits = normalize_digits(m.as_str());
        french_digits.insert(digits.clone());
        if let Ok(entity) = Entity::new(EntityKind::Phone, m.as_str(), REGEX_CONFIDENCE) {
            entities.push(
                entity
                    .with_normalized(digits.clone())
                    .with_metadata("country", "FR")
                    .with_metadata("formatted", format_french(&digits)),
            );
        }
    }

    for caps in patterns.phone_intl.captures_iter(text) {
        let m = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let digits = normalize_digits(m.as_str());
        if french_digits.contains(&digits) {
            continue;
        }
        let country = caps.get(1).map(|cc| format!("+{}", cc.as_str()));
        if let Ok(entity) = Entity::new(
            EntityKind::Phone,
            m.as_str(),
            REGEX_CONFIDENCE * SECONDARY_REGEX_SCALE,
        ) {
            let mut entity = entity
                .with_normalized(digits)
                .with_metadata("formatted", m.as_str().trim());
            if let Some(country) = country {
                entity = entity.with_metadata("country", country);
            }
            entities.push(entity);
        }
    }

    entities
}

/// Digits-only form used for display, dedup and the FR/international
/// comparison: `+33` becomes a leading `0`.
fn normalize_digits(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.starts_with("33") {
        format!("0{}", &digits[2..])
    } else {
        digits
    }
}

/// `0X XX XX XX XX` display form for French numbers.
fn format_french(digits: &str) -> String {
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}
