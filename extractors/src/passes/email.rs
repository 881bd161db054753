//! Email pass: an email address in the body strongly implies a person, so
//! each match becomes a PERSON entity carrying the address and its domain.

use shared_types::{Entity, EntityKind};

use crate::patterns::PatternRegistry;
use crate::REGEX_CONFIDENCE;

pub fn extract(patterns: &PatternRegistry, text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    for m in patterns.email.find_iter(text) {
        let address = m.as_str();
        let domain = address.split('@').nth(1).unwrap_or_default();
        if let Ok(entity) = Entity::new(EntityKind::Person, address, REGEX_CONFIDENCE) {
            entities.push(
                entity
                    .with_metadata("email", address)
                    .with_metadata("domain", domain)
                    .with_metadata("role", "mentioned"),
            );
        }
    }

    entities
}
