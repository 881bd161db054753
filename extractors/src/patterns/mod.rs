mod dates;

pub use dates::{create_english_date_patterns, create_french_date_patterns, DatePattern};

use regex::Regex;
use shared_types::{DatePatternConfig, ExtractionError};

/// All compiled matchers used by the extraction passes, grouped by entity
/// kind and, for dates, by language. Built once and never mutated, so a
/// registry can be shared freely across threads.
pub struct PatternRegistry {
    pub email: Regex,
    /// French subscriber numbers: optional `+33` or leading `0`, then nine
    /// digits grouped in pairs with optional space/dot/dash separators.
    pub phone_fr: Regex,
    /// Fallback for `+CC`-prefixed numbers not already captured as French.
    pub phone_intl: Regex,
    pub url: Regex,
    pub amount: Regex,
    pub dates_fr: Vec<DatePattern>,
    pub dates_en: Vec<DatePattern>,
    /// Capitalized name right after a French or English greeting token.
    pub greeting: Regex,
    /// Two-token capitalized name on the line after a closing phrase.
    pub signature: Regex,
    /// Capitalized phrase followed by a legal-entity suffix.
    pub org_legal: Regex,
    /// Capitalized phrase following "chez"/"at"/"@".
    pub org_affiliation: Regex,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
            phone_fr: Regex::new(r"(?:\+33[\s.\-]?|0)[1-9](?:[\s.\-]?\d{2}){4}").unwrap(),
            phone_intl: Regex::new(r"\+(\d{1,3})[\s.\-]?\d{1,9}(?:[\s.\-]?\d{1,9}){2,5}").unwrap(),
            url: Regex::new(r#"(?:https?://|www\.)[^\s"'<>]+"#).unwrap(),
            amount: Regex::new(
                r"(?i)(\d{1,3}(?:[ ,]\d{3})+(?:[.,]\d{1,2})?|\d+(?:[.,]\d{1,2})?)\s*(k€|m€|€|euros?|eur|\$|usd|dollars?)",
            )
            .unwrap(),
            dates_fr: create_french_date_patterns(),
            dates_en: create_english_date_patterns(),
            greeting: Regex::new(
                r"\b(?:Bonjour|Bonsoir|Salut|Chère|Cher|Hello|Dear|Hi)\s+([A-ZÀ-Ý][a-zà-ÿ]+(?:-[A-ZÀ-Ý][a-zà-ÿ]+)?)",
            )
            .unwrap(),
            signature: Regex::new(
                r"(?:Bien cordialement|Cordialement|Best regards|Regards),?[ \t]*\n\s*([A-ZÀ-Ý][a-zà-ÿ]+\s+[A-ZÀ-Ý][a-zà-ÿ]+)",
            )
            .unwrap(),
            org_legal: Regex::new(
                r"\b([A-Z][A-Za-z0-9&'\-]*(?:\s+[A-Z][A-Za-z0-9&'\-]*)*\s+(?:SARL|SAS|SNC|SA|GmbH|Ltd|Inc|LLC|Corp|Pty|BV|AG))\b",
            )
            .unwrap(),
            org_affiliation: Regex::new(
                r"(?:\b(?:chez|at)|@)\s+([A-Z][A-Za-z0-9&'\-]*(?:\s+[A-Z][A-Za-z0-9&'\-]*)*(?:\s+(?:Group|Company|Corporation|Organization|Team|Department))?)",
            )
            .unwrap(),
        }
    }

    /// Extend the built-in date tables with configured sub-patterns, e.g.
    /// phrasings loaded from user settings. Invalid regexes and unknown
    /// languages fail instead of being silently dropped.
    pub fn with_date_patterns(configs: &[DatePatternConfig]) -> Result<Self, ExtractionError> {
        let mut registry = Self::new();
        for config in configs {
            let regex = Regex::new(&config.regex)
                .map_err(|e| ExtractionError::ParseError(e.to_string()))?;
            let pattern = DatePattern {
                name: config.name.clone(),
                regex,
                heuristic: config.heuristic,
            };
            match config.language.as_str() {
                "fr" => registry.dates_fr.push(pattern),
                "en" => registry.dates_en.push(pattern),
                other => {
                    return Err(ExtractionError::InvalidInput(format!(
                        "unknown pattern language: {other}"
                    )))
                }
            }
        }
        Ok(registry)
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
