//! URL pass. Bare `www.` matches are rewritten to `https://` before storage;
//! anything `url::Url` refuses to parse is silently skipped.

use shared_types::{Entity, EntityKind};
use url::Url;

use crate::patterns::PatternRegistry;
use crate::REGEX_CONFIDENCE;

pub fn extract(patterns: &PatternRegistry, text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    for m in patterns.url.find_iter(text) {
        let raw = m.as_str();
        let stored = if raw.starts_with("www.") {
            format!("https://{raw}")
        } else {
            raw.to_string()
        };

        match Url::parse(&stored) {
            Ok(parsed) => {
                if let Ok(entity) = Entity::new(EntityKind::Url, stored.clone(), REGEX_CONFIDENCE) {
                    let mut entity = entity.with_metadata("path", parsed.path());
                    if let Some(domain) = parsed.host_str() {
                        entity = entity.with_metadata("domain", domain);
                    }
                    entities.push(entity);
                }
            }
            Err(error) => {
                tracing::debug!(%error, url = raw, "skipping unparseable url");
            }
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_url_with_domain_and_path() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "Voir https://example.com/docs/guide pour plus");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, EntityKind::Url);
        assert_eq!(entities[0].value, "https://example.com/docs/guide");
        assert_eq!(entities[0].metadata["domain"], "example.com");
        assert_eq!(entities[0].metadata["path"], "/docs/guide");
    }

    #[test]
    fn test_bare_www_is_rewritten() {
        let patterns = PatternRegistry::new();
        let entities = extract(&patterns, "site: www.example.org/page");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "https://www.example.org/page");
        assert_eq!(entities[0].metadata["domain"], "www.example.org");
    }

    #[test]
    fn test_unparseable_url_is_skipped() {
        let patterns = PatternRegistry::new();
        // matches the pattern but has no valid host
        let entities = extract(&patterns, "broken http://[ link");
        assert!(entities.is_empty());
    }
}
