//! Cross-pass reconciliation: at most one entity per (kind, lower-cased
//! trimmed value) key survives. The candidate with the highest confidence
//! wins the identity; metadata always accumulates, with later candidates
//! overriding earlier ones on key collisions.

use std::collections::HashMap;

use shared_types::{Entity, EntityKind};

pub fn reconcile(candidates: Vec<Entity>) -> Vec<Entity> {
    let mut merged: Vec<Entity> = Vec::new();
    let mut index: HashMap<(EntityKind, String), usize> = HashMap::new();

    for candidate in candidates {
        let key = candidate.dedup_key();
        match index.get(&key) {
            None => {
                index.insert(key, merged.len());
                merged.push(candidate);
            }
            Some(&at) => {
                let existing = &mut merged[at];
                if candidate.confidence > existing.confidence {
                    // the newcomer takes over, carrying the union of metadata
                    let mut metadata = existing.metadata.clone();
                    metadata.extend(candidate.metadata.clone());
                    *existing = candidate;
                    existing.metadata = metadata;
                } else {
                    existing.metadata.extend(candidate.metadata);
                }
            }
        }
    }

    merged
}
