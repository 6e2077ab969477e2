//! Rule-based English noun lemmatizer.
//!
//! Reduces plural forms to their singular lemma with a small irregular-form
//! map plus ordered suffix rules. Verbs and adjectives pass through
//! unchanged, matching noun-only lemmatization.

use std::collections::HashMap;

/// Irregular plural -> singular forms not covered by the suffix rules.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("people", "person"),
    // Mass nouns that look plural.
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
];

#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Lemmatizer {
            irregular: IRREGULAR_NOUNS.iter().copied().collect(),
        }
    }

    /// Lemmatize a single lowercased token.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(&singular) = self.irregular.get(token) {
            return singular.to_string();
        }

        // Short tokens are left alone, the suffix rules over-strip them.
        if token.len() <= 3 {
            return token.to_string();
        }

        if let Some(stem) = token.strip_suffix("sses") {
            return format!("{}ss", stem);
        }

        if token.len() > 4 {
            if let Some(stem) = token.strip_suffix("ies") {
                return format!("{}y", stem);
            }
        }

        for suffix in ["xes", "ches", "shes", "zes"] {
            if let Some(stem) = token.strip_suffix(suffix) {
                return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
            }
        }

        // -ss / -us / -is endings are singular already (class, virus, crisis).
        if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
            return token.to_string();
        }

        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }

        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("scientists"), "scientist");
        assert_eq!(lemmatizer.lemmatize("cures"), "cure");
        assert_eq!(lemmatizer.lemmatize("stories"), "story");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("people"), "person");
        assert_eq!(lemmatizer.lemmatize("mice"), "mouse");
    }

    #[test]
    fn test_singular_forms_unchanged() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("class"), "class");
        assert_eq!(lemmatizer.lemmatize("virus"), "virus");
        assert_eq!(lemmatizer.lemmatize("crisis"), "crisis");
        assert_eq!(lemmatizer.lemmatize("news"), "news");
    }

    #[test]
    fn test_short_tokens_unchanged() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("gas"), "gas");
        assert_eq!(lemmatizer.lemmatize("is"), "is");
    }

    #[test]
    fn test_verbs_pass_through() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("running"), "running");
        assert_eq!(lemmatizer.lemmatize("discovered"), "discovered");
    }
}
