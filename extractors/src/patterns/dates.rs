use regex::Regex;

/// One date sub-pattern. `heuristic` marks the lower-certainty phrasings
/// (relative dates, deadlines) that get heuristic confidence instead of
/// regex confidence.
pub struct DatePattern {
    pub name: String,
    pub regex: Regex,
    pub heuristic: bool,
}

const FR_MONTHS: &str = "janvier|février|fevrier|mars|avril|mai|juin|juillet|août|aout|septembre|octobre|novembre|décembre|decembre|janv\\.?|févr\\.?|fevr\\.?|avr\\.?|juil\\.?|sept\\.?|oct\\.?|nov\\.?|déc\\.?|dec\\.?";

const EN_MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

pub fn create_french_date_patterns() -> Vec<DatePattern> {
    vec![
        DatePattern {
            name: "full_date".to_string(),
            regex: Regex::new(&format!(
                r"(?i)\b(\d{{1,2}})(?:er)?\s+({FR_MONTHS})\s+(\d{{4}})\b"
            ))
            .unwrap(),
            heuristic: false,
        },
        DatePattern {
            name: "numeric_date".to_string(),
            regex: Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap(),
            heuristic: false,
        },
        DatePattern {
            name: "relative_date".to_string(),
            regex: Regex::new(
                r"(?i)\b(?:demain|aujourd'hui|(?:lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche)(?:\s+(?:prochain|dernier))?)\b",
            )
            .unwrap(),
            heuristic: true,
        },
        DatePattern {
            name: "deadline".to_string(),
            regex: Regex::new(&format!(
                r"(?i)\b(?:d'ici|avant|pour)\s+le\s+(\d{{1,2}})(?:er)?(?:\s+({FR_MONTHS}))?"
            ))
            .unwrap(),
            heuristic: true,
        },
    ]
}

pub fn create_english_date_patterns() -> Vec<DatePattern> {
    vec![
        DatePattern {
            name: "full_date".to_string(),
            regex: Regex::new(&format!(
                r"(?i)\b({EN_MONTHS})\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s*(\d{{4}})\b"
            ))
            .unwrap(),
            heuristic: false,
        },
        DatePattern {
            name: "iso_date".to_string(),
            regex: Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap(),
            heuristic: false,
        },
        DatePattern {
            name: "us_numeric_date".to_string(),
            regex: Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap(),
            heuristic: false,
        },
        DatePattern {
            name: "relative_date".to_string(),
            regex: Regex::new(
                r"(?i)\b(?:tomorrow|today|next\s+(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday))\b",
            )
            .unwrap(),
            heuristic: true,
        },
        DatePattern {
            name: "deadline".to_string(),
            regex: Regex::new(&format!(
                r"(?i)\b(?:by|before|until)\s+(?:the\s+)?(\d{{1,2}})(?:st|nd|rd|th)?(?:\s+of\s+({EN_MONTHS}))?\b"
            ))
            .unwrap(),
            heuristic: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern<'a>(patterns: &'a [DatePattern], name: &str) -> &'a DatePattern {
        patterns.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_french_full_date() {
        let patterns = create_french_date_patterns();
        let full = pattern(&patterns, "full_date");
        assert!(full.regex.is_match("le 15 janvier 2026"));
        assert!(full.regex.is_match("le 1er février 2026"));
        assert!(full.regex.is_match("le 3 sept. 2025"));
        assert!(!full.regex.is_match("janvier 2026"));
    }

    #[test]
    fn test_french_relative_and_deadline() {
        let patterns = create_french_date_patterns();
        let relative = pattern(&patterns, "relative_date");
        assert!(relative.heuristic);
        for text in ["demain", "aujourd'hui", "lundi prochain", "vendredi dernier"] {
            assert!(relative.regex.is_match(text), "should match {text}");
        }

        let deadline = pattern(&patterns, "deadline");
        assert!(deadline.regex.is_match("d'ici le 15"));
        assert!(deadline.regex.is_match("avant le 15 janvier"));
        assert!(deadline.regex.is_match("pour le 30 juin"));
    }

    #[test]
    fn test_english_patterns() {
        let patterns = create_english_date_patterns();
        assert!(pattern(&patterns, "full_date").regex.is_match("January 15, 2026"));
        assert!(pattern(&patterns, "full_date").regex.is_match("march 3rd 2025"));
        assert!(pattern(&patterns, "iso_date").regex.is_match("2026-01-15"));
        assert!(pattern(&patterns, "us_numeric_date").regex.is_match("01/15/2026"));
        assert!(pattern(&patterns, "relative_date").regex.is_match("next friday"));
        assert!(pattern(&patterns, "deadline").regex.is_match("by the 15th of January"));
        assert!(pattern(&patterns, "deadline").regex.is_match("before the 20th"));
    }
}
