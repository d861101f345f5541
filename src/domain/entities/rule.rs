use regex::{Regex, RegexBuilder};
use crate::application::errors::ConfigError;

/// A pattern/response pair consulted in priority order
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    response: String,
}

impl PatternRule {
    /// Build a rule from a regex pattern, matched case-insensitively and unanchored
    pub fn new(pattern: &str, response: impl Into<String>) -> Result<Self, ConfigError> {
        let response = response.into();
        if response.trim().is_empty() {
            return Err(ConfigError::InvalidValue(format!(
                "rule '{}' has an empty response",
                pattern
            )));
        }

        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidValue(format!("bad pattern '{}': {}", pattern, e)))?;

        Ok(Self { pattern, response })
    }

    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// Fallback responses used when no rule matches. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePool {
    entries: Vec<String>,
}

impl ResponsePool {
    pub fn new(entries: Vec<String>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::MissingField("fallback".to_string()));
        }
        if let Some(pos) = entries.iter().position(|e| e.trim().is_empty()) {
            return Err(ConfigError::InvalidValue(format!("fallback entry {} is empty", pos)));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn contains(&self, response: &str) -> bool {
        self.entries.iter().any(|e| e == response)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matches_case_insensitively_inside_words() {
        let rule = PatternRule::new("math|quantitative", "numbers").unwrap();
        assert!(rule.matches("MATHEMATICS is hard"));
        assert!(rule.matches("Quantitative aptitude"));
        assert!(!rule.matches("history"));
    }

    #[test]
    fn test_case_folding_covers_accented_letters() {
        let rule = PatternRule::new("café|ÉTUDE", "x").unwrap();
        assert!(rule.matches("CAFÉ tips"));
        assert!(rule.matches("mon étude"));
        assert!(!rule.matches("cafe"));
    }

    #[test]
    fn test_multi_word_pattern() {
        let rule = PatternRule::new("current affairs|gk", "news").unwrap();
        assert!(rule.matches("Daily CURRENT AFFAIRS digest"));
        assert!(!rule.matches("current events"));
        assert_eq!(rule.pattern(), "current affairs|gk");
    }

    #[test]
    fn test_invalid_rules_rejected() {
        assert!(matches!(PatternRule::new("(unclosed", "x"), Err(ConfigError::InvalidValue(_))));
        assert!(matches!(PatternRule::new("ok", "  "), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_pool_rejects_empty() {
        assert!(ResponsePool::new(vec![]).is_err());
        assert!(ResponsePool::new(vec!["a".to_string(), "".to_string()]).is_err());

        let pool = ResponsePool::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(1), Some("b"));
        assert!(pool.contains("a"));
        assert!(!pool.contains("c"));
    }
}
