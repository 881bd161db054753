//! Metadata pass: turns sender/recipient/cc address records from the email
//! ingestion layer into PERSON entities. These carry the highest confidence,
//! since the mail headers already name the people involved.

use serde_json::Value;
use shared_types::{Entity, EntityKind};

use crate::{CC_ROLE_SCALE, METADATA_CONFIDENCE};

pub fn extract(metadata: &Value) -> Vec<Entity> {
    let mut entities = Vec::new();

    if let Some(sender) = metadata.get("sender") {
        if sender.is_object() {
            entities.extend(person_from_address(sender, "sender", METADATA_CONFIDENCE));
        } else {
            tracing::warn!("sender metadata is not an address record, skipping");
        }
    }

    for (field, role, confidence) in [
        ("recipients", "recipient", METADATA_CONFIDENCE),
        ("cc", "cc", METADATA_CONFIDENCE * CC_ROLE_SCALE),
    ] {
        if let Some(addresses) = metadata.get(field).and_then(Value::as_array) {
            for address in addresses {
                entities.extend(person_from_address(address, role, confidence));
            }
        }
    }

    entities
}

/// Build a PERSON from an `{"name": ..., "email": ...}` record. The name is
/// preferred as the value, falling back to the email address; a record with
/// neither yields nothing.
fn person_from_address(address: &Value, role: &str, confidence: f32) -> Option<Entity> {
    let record = match address.as_object() {
        Some(record) => record,
        None => {
            tracing::debug!(role, "skipping malformed address record");
            return None;
        }
    };

    let name = record
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let email = record
        .get("email")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let value = name.or(email)?;
    let mut entity = Entity::new(EntityKind::Person, value, confidence).ok()?;
    if let Some(email) = email {
        entity = entity.with_metadata("email", email);
    }
    Some(entity.with_metadata("role", role))
}
