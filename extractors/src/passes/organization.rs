//! Organization heuristics: legal-entity suffixes and "chez"/"at"/"@"
//! affiliations.

use shared_types::{Entity, EntityKind};

use crate::patterns::PatternRegistry;
use crate::HEURISTIC_CONFIDENCE;

pub fn extract(patterns: &PatternRegistry, text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    for regex in [&patterns.org_legal, &patterns.org_affiliation] {
        for caps in regex.captures_iter(text) {
            let name = match caps.get(1).or_else(|| caps.get(0)) {
                Some(m) => m.as_str().trim(),
                None => continue,
            };
            if name.chars().count() <= 2 {
                continue;
            }
            if let Ok(entity) = Entity::new(EntityKind::Organization, name, HEURISTIC_CONFIDENCE) {
                entities.push(entity);
            }
        }
    }

    entities
}
