//! Person heuristics: names following a greeting token, and signature
//! names on the line after a closing phrase.

use shared_types::{Entity, EntityKind};

use crate::patterns::PatternRegistry;
use crate::HEURISTIC_CONFIDENCE;

pub fn extract(patterns: &PatternRegistry, text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    for regex in [&patterns.greeting, &patterns.signature] {
        for caps in regex.captures_iter(text) {
            let name = match caps.get(1) {
                Some(name) => name.as_str().trim(),
                None => continue,
            };
            if name.chars().count() <= 1 {
                continue;
            }
            if let Ok(entity) = Entity::new(EntityKind::Person, name, HEURISTIC_CONFIDENCE) {
                entities.push(entity);
            }
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_name() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "Bonjour Jean-Pierre, comment allez-vous?");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "Jean-Pierre");
        assert_eq!(entities[0].confidence, 0.80);
    }

    #[test]
    fn test_signature_name() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "On valide ça lundi.\n\nBien cordialement,\nMarie Dupont");

        assert!(entities.iter().any(|e| e.value == "Marie Dupont"));
    }

    #[test]
    fn test_english_greeting() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "Hi Sarah, quick question about the launch.");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "Sarah");
    }
}
