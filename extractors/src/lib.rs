//! Extractors Crate
//!
//! Multi-strategy entity extraction for email and note text: layered
//! passes (metadata lookup, regex patterns, heuristics) produce typed,
//! confidence-scored entities that are deduplicated and reconciled into a
//! single list.
//!
//! # Architecture
//!
//! - **Types**: [`Entity`] and its enums live in the `shared-types` crate
//! - **Patterns**: compiled matchers, grouped by kind and locale, in
//!   [`patterns::PatternRegistry`]
//! - **Passes**: one module per strategy under [`passes`], run in a fixed
//!   order by the facade
//! - **Reconciliation**: cross-pass dedup in [`dedup`]
//!
//! # Example
//!
//! ```rust
//! use extractors::EntityExtractor;
//!
//! let extractor = EntityExtractor::new();
//! let entities = extractor.extract("Bonjour Marie, budget validé à 50k€", None);
//! assert!(!entities.is_empty());
//! ```
//!
//! The extractor compiles every pattern once in `new()`; construct a single
//! instance at startup and share it (`&EntityExtractor` or an `Arc`) across
//! threads. Calls are pure CPU work with no cross-call state.

pub mod dedup;
pub mod passes;
pub mod patterns;

pub use patterns::PatternRegistry;

// Re-export the entity types from shared-types for convenience
pub use shared_types::{DatePatternConfig, Entity, EntityKind, EntitySource, ExtractionError};

/// Trust level for entities backed by structured email metadata.
pub const METADATA_CONFIDENCE: f32 = 0.98;
/// Trust level for entities matched by a regex pattern.
pub const REGEX_CONFIDENCE: f32 = 0.95;
/// Trust level for entities found by a heuristic.
pub const HEURISTIC_CONFIDENCE: f32 = 0.80;

/// CC-role persons are slightly less certain than direct addressees.
pub(crate) const CC_ROLE_SCALE: f32 = 0.95;
/// Lower-certainty regex variants, e.g. international phone numbers.
pub(crate) const SECONDARY_REGEX_SCALE: f32 = 0.9;

/// Facade running all extraction passes in a fixed order over one input.
pub struct EntityExtractor {
    patterns: PatternRegistry,
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self::with_registry(PatternRegistry::new())
    }

    /// Build an extractor around a custom registry, e.g. one extended with
    /// [`PatternRegistry::with_date_patterns`].
    pub fn with_registry(patterns: PatternRegistry) -> Self {
        Self { patterns }
    }

    /// Extract entities from `text`, optionally enriched with structured
    /// email metadata (`sender`/`recipients`/`cc` address records).
    ///
    /// Empty or whitespace-only text returns an empty list without running
    /// any pass. Otherwise every pass runs; a malformed fragment in one pass
    /// never aborts the others, and the call always returns a list.
    pub fn extract(&self, text: &str, metadata: Option<&serde_json::Value>) -> Vec<Entity> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        if let Some(metadata) = metadata {
            candidates.extend(passes::metadata::extract(metadata));
        }
        candidates.extend(passes::email::extract(&self.patterns, text));
        candidates.extend(passes::phone::extract(&self.patterns, text));
        candidates.extend(passes::url::extract(&self.patterns, text));
        candidates.extend(passes::amount::extract(&self.patterns, text));
        candidates.extend(passes::date::extract(&self.patterns, text));
        candidates.extend(passes::person::extract(&self.patterns, text));
        candidates.extend(passes::organization::extract(&self.patterns, text));

        dedup::reconcile(candidates)
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
