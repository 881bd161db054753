//! Amount pass: numeric literal followed by a currency token. Handles
//! space/comma thousands separators, comma decimals, and the `k€`/`M€`
//! magnitude suffixes.

use regex::Captures;
use shared_types::{Entity, EntityKind};

use crate::patterns::PatternRegistry;
use crate::REGEX_CONFIDENCE;

pub fn extract(patterns: &PatternRegistry, text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    for caps in patterns.amount.captures_iter(text) {
        let full = match caps.get(0) {
            Some(m) => m.as_str(),
            None => continue,
        };
        let (value, currency) = match parse_amount(&caps) {
            Some(parsed) => parsed,
            None => {
                tracing::debug!(matched = full, "skipping unparseable amount");
                continue;
            }
        };
        if let Ok(entity) = Entity::new(EntityKind::Amount, full, REGEX_CONFIDENCE) {
            entities.push(
                entity
                    .with_normalized(format!("{value:.2} {currency}"))
                    .with_metadata("value", value)
                    .with_metadata("currency", currency),
            );
        }
    }

    entities
}

fn parse_amount(caps: &Captures) -> Option<(f64, String)> {
    let literal = caps.get(1)?.as_str();
    let token = caps.get(2)?.as_str();

    // Strip thousands separators, turn a decimal comma into a dot. A comma
    // followed by one or two digits is a decimal; commas before three-digit
    // groups are thousands separators.
    let mut cleaned = literal.replace(' ', "");
    if let Some(pos) = cleaned.rfind(',') {
        if cleaned.len() - pos - 1 <= 2 {
            cleaned.replace_range(pos..pos + 1, ".");
        }
    }
    let cleaned = cleaned.replace(',', "");
    let mut value: f64 = cleaned.parse().ok()?;

    let lower = token.to_lowercase();
    if lower == "k€" {
        value *= 1_000.0;
    } else if lower == "m€" {
        value *= 1_000_000.0;
    }

    let currency = if lower.ends_with('€') || lower.starts_with("eur") {
        "EUR".to_string()
    } else if lower == "$" || lower == "usd" || lower.starts_with("dollar") {
        "USD".to_string()
    } else {
        token.to_uppercase()
    };

    Some((value, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(patterns: &PatternRegistry, text: &str) -> Entity {
        let entities = extract(patterns, text);
        assert_eq!(entities.len(), 1, "expected one amount in {text:?}");
        entities.into_iter().next().unwrap()
    }

    #[test]
    fn test_magnitude_suffix() {
        let patterns = PatternRegistry::new();
        let entity = single(&patterns, "Budget: 50k€");
        assert_eq!(entity.metadata["value"], 50000.0);
        assert_eq!(entity.metadata["currency"], "EUR");
        assert_eq!(entity.normalized.as_deref(), Some("50000.00 EUR"));

        let entity = single(&patterns, "levée de 2,5 M€");
        assert_eq!(entity.metadata["value"], 2_500_000.0);
    }

    #[test]
    fn test_usd_detection() {
        let patterns = PatternRegistry::new();
        let entity = single(&patterns, "Total: $2500 USD");
        assert_eq!(entity.metadata["currency"], "USD");
        assert_eq!(entity.metadata["value"], 2500.0);
    }

    #[test]
    fn test_thousands_separators() {
        let patterns = PatternRegistry::new();
        let entity = single(&patterns, "coût total 1 500 €");
        assert_eq!(entity.metadata["value"], 1500.0);
        assert_eq!(entity.metadata["currency"], "EUR");

        let entity = single(&patterns, "1,234.56 dollars");
        assert_eq!(entity.metadata["value"], 1234.56);
        assert_eq!(entity.metadata["currency"], "USD");
    }

    #[test]
    fn test_decimal_comma() {
        let patterns = PatternRegistry::new();
        let entity = single(&patterns, "prix: 19,99 euros");
        assert_eq!(entity.metadata["value"], 19.99);
        assert_eq!(entity.normalized.as_deref(), Some("19.99 EUR"));
    }
}
