use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A caller-supplied date sub-pattern, e.g. loaded from configuration to
/// cover domain-specific phrasings the built-in tables miss.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DatePatternConfig {
    pub name: String,
    pub regex: String,
    /// "fr" or "en"
    pub language: String,
    /// Heuristic patterns get heuristic confidence instead of regex
    /// confidence.
    pub heuristic: bool,
}
