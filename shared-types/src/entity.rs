use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// Kinds of entities the extraction pipeline can produce.
///
/// Each kind has a conventional set of metadata keys attached by the passes:
/// - `Person`: `email`, `role`
/// - `Amount`: `value` (number), `currency` (ISO code)
/// - `Url`: `domain`, `path`
/// - `Phone`: `country`, `formatted`
/// - `Date`: `type` (sub-pattern name), `language`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Person,
    Date,
    Project,
    Organization,
    Amount,
    Location,
    Url,
    Topic,
    Phone,
}

/// Where an entity came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum EntitySource {
    /// Pattern or heuristic extraction (the default).
    #[default]
    Extraction,
    AiValidation,
    User,
    Context,
}

/// Validation failures when constructing an [`Entity`].
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error("entity value must not be empty")]
    EmptyValue,

    #[error("confidence {0} outside [0.0, 1.0]")]
    ConfidenceOutOfRange(f32),
}

/// One extracted fact: a typed, confidence-scored value with provenance
/// and kind-specific metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entity {
    pub kind: EntityKind,
    pub value: String,
    pub normalized: Option<String>,
    pub confidence: f32,
    #[serde(default)]
    pub source: EntitySource,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Entity {
    /// Create a validated entity. Fails on an empty value or a confidence
    /// outside [0.0, 1.0].
    pub fn new(
        kind: EntityKind,
        value: impl Into<String>,
        confidence: f32,
    ) -> Result<Self, EntityError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EntityError::EmptyValue);
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(EntityError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            kind,
            value,
            normalized: None,
            confidence,
            source: EntitySource::default(),
            metadata: HashMap::new(),
        })
    }

    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = Some(normalized.into());
        self
    }

    pub fn with_source(mut self, source: EntitySource) -> Self {
        self.source = source;
        self
    }

    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Key identifying "the same fact" across passes: the kind plus the
    /// lower-cased, trimmed value.
    pub fn dedup_key(&self) -> (EntityKind, String) {
        (self.kind, self.value.trim().to_lowercase())
    }
}
