//! Date pass: French sub-patterns first, then English ones, skipping any
//! exact text a French pattern already claimed. Absolute dates get an ISO
//! `normalized` form when they parse to a real calendar date.

use std::collections::HashSet;

use chrono::NaiveDate;
use regex::Captures;
use shared_types::{Entity, EntityKind};

use crate::patterns::{DatePattern, PatternRegistry};
use crate::{HEURISTIC_CONFIDENCE, REGEX_CONFIDENCE};

pub fn extract(patterns: &PatternRegistry, text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut french_texts: HashSet<String> = HashSet::new();

    for pattern in &patterns.dates_fr {
        for caps in pattern.regex.captures_iter(text) {
            if let Some(m) = caps.get(0) {
                french_texts.insert(m.as_str().to_string());
                push_date(&mut entities, pattern, &caps, "fr");
            }
        }
    }

    for pattern in &patterns.dates_en {
        for caps in pattern.regex.captures_iter(text) {
            if let Some(m) = caps.get(0) {
                if french_texts.contains(m.as_str()) {
                    continue;
                }
                push_date(&mut entities, pattern, &caps, "en");
            }
        }
    }

    entities
}

fn push_date(entities: &mut Vec<Entity>, pattern: &DatePattern, caps: &Captures, language: &str) {
    let value = match caps.get(0) {
        Some(m) => m.as_str(),
        None => return,
    };
    let confidence = if pattern.heuristic {
        HEURISTIC_CONFIDENCE
    } else {
        REGEX_CONFIDENCE
    };
    if let Ok(mut entity) = Entity::new(EntityKind::Date, value, confidence) {
        if let Some(date) = normalize_date(pattern, caps, language) {
            entity = entity.with_normalized(date.format("%Y-%m-%d").to_string());
        }
        entities.push(
            entity
                .with_metadata("type", pattern.name.as_str())
                .with_metadata("language", language),
        );
    }
}

/// ISO form for absolute dates; relative and deadline phrasings have no
/// year and stay unnormalized.
fn normalize_date(pattern: &DatePattern, caps: &Captures, language: &str) -> Option<NaiveDate> {
    let group = |i: usize| caps.get(i).map(|m| m.as_str());
    match (language, pattern.name.as_str()) {
        ("fr", "full_date") => NaiveDate::from_ymd_opt(
            group(3)?.parse().ok()?,
            french_month(group(2)?)?,
            group(1)?.parse().ok()?,
        ),
        // day-first: the French pass claims shared numeric forms
        ("fr", "numeric_date") => NaiveDate::from_ymd_opt(
            group(3)?.parse().ok()?,
            group(2)?.parse().ok()?,
            group(1)?.parse().ok()?,
        ),
        ("en", "full_date") => NaiveDate::from_ymd_opt(
            group(3)?.parse().ok()?,
            english_month(group(1)?)?,
            group(2)?.parse().ok()?,
        ),
        ("en", "iso_date") => NaiveDate::from_ymd_opt(
            group(1)?.parse().ok()?,
            group(2)?.parse().ok()?,
            group(3)?.parse().ok()?,
        ),
        ("en", "us_numeric_date") => NaiveDate::from_ymd_opt(
            group(3)?.parse().ok()?,
            group(1)?.parse().ok()?,
            group(2)?.parse().ok()?,
        ),
        _ => None,
    }
}

fn french_month(name: &str) -> Option<u32> {
    let name = name
        .trim_end_matches('.')
        .to_lowercase()
        .replace('é', "e")
        .replace('è', "e")
        .replace('û', "u")
        .replace('à', "a");
    match name.as_str() {
        n if n.starts_with("janv") => Some(1),
        n if n.starts_with("fevr") => Some(2),
        "mars" => Some(3),
        n if n.starts_with("avr") => Some(4),
        "mai" => Some(5),
        "juin" => Some(6),
        n if n.starts_with("juil") => Some(7),
        "aout" => Some(8),
        n if n.starts_with("sept") => Some(9),
        n if n.starts_with("oct") => Some(10),
        n if n.starts_with("nov") => Some(11),
        n if n.starts_with("dec") => Some(12),
        _ => None,
    }
}

fn english_month(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_full_date_normalizes_to_iso() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "réunion le 15 janvier 2026 au bureau");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "15 janvier 2026");
        assert_eq!(entities[0].normalized.as_deref(), Some("2026-01-15"));
        assert_eq!(entities[0].metadata["type"], "full_date");
        assert_eq!(entities[0].metadata["language"], "fr");
        assert_eq!(entities[0].confidence, 0.95);
    }

    #[test]
    fn test_french_numeric_is_day_first() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "livraison le 15/01/2026");

        let numeric: Vec<_> = entities
            .iter()
            .filter(|e| e.metadata["type"] == "numeric_date")
            .collect();
        assert_eq!(numeric.len(), 1);
        assert_eq!(numeric[0].metadata["language"], "fr");
        assert_eq!(numeric[0].normalized.as_deref(), Some("2026-01-15"));
    }

    #[test]
    fn test_english_does_not_duplicate_french_match() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "due 15/01/2026");

        // the us_numeric_date pattern matches the same text and must be skipped
        assert_eq!(
            entities
                .iter()
                .filter(|e| e.value == "15/01/2026")
                .count(),
            1
        );
    }

    #[test]
    fn test_iso_date() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "deployed on 2026-01-15");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].metadata["type"], "iso_date");
        assert_eq!(entities[0].metadata["language"], "en");
        assert_eq!(entities[0].normalized.as_deref(), Some("2026-01-15"));
    }

    #[test]
    fn test_relative_dates_use_heuristic_confidence() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "on se voit demain");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].confidence, 0.80);
        assert_eq!(entities[0].metadata["type"], "relative_date");
        assert!(entities[0].normalized.is_none());
    }

    #[test]
    fn test_deadline_phrasings() {
        let patterns = PatternRegistry::new();
        let fr = extract(&patterns, "à rendre avant le 15 janvier");
        assert!(fr.iter().any(|e| e.metadata["type"] == "deadline" && e.confidence == 0.80));

        let en = extract(&patterns, "submit by the 15th of January");
        assert!(en.iter().any(|e| e.metadata["type"] == "deadline"));
    }

    #[test]
    fn test_invalid_calendar_date_stays_unnormalized() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "le 32/13/2026 n'existe pas");

        // still matched by the numeric pattern, but not a real date
        assert!(entities.iter().all(|e| e.normalized.is_none()));
    }
}
