//! Keyword response resolution for the AI demo

use crate::domain::entities::{PatternRule, ResponsePool};
use crate::domain::traits::RandomSource;

/// How a response was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Index of the first matching rule
    Rule(usize),
    /// Index drawn from the fallback pool
    Fallback(usize),
}

/// Maps free text to exactly one canned response.
///
/// Rules are consulted in order and the first match wins; later rules are
/// never looked at. Input matching no rule gets a uniform draw from the pool.
/// Total: every input, including the empty string, yields a response.
#[derive(Debug, Clone)]
pub struct ResponseResolver {
    rules: Vec<PatternRule>,
    pool: ResponsePool,
}

impl ResponseResolver {
    pub fn new(rules: Vec<PatternRule>, pool: ResponsePool) -> Self {
        Self { rules, pool }
    }

    pub fn resolve<'a, R>(&'a self, input: &str, rng: &mut R) -> &'a str
    where
        R: RandomSource + ?Sized,
    {
        let (response, _) = self.resolve_traced(input, rng);
        response
    }

    /// Like `resolve`, also reporting which rule or pool entry was used
    pub fn resolve_traced<'a, R>(&'a self, input: &str, rng: &mut R) -> (&'a str, Resolution)
    where
        R: RandomSource + ?Sized,
    {
        if let Some(index) = self.first_match(input) {
            return (self.rules[index].response(), Resolution::Rule(index));
        }

        let index = rng.next_index(self.pool.len()) % self.pool.len();
        (self.pool.entries()[index].as_str(), Resolution::Fallback(index))
    }

    /// Index of the first rule matching `input`
    pub fn first_match(&self, input: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(input))
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn pool(&self) -> &ResponsePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;
    use crate::infrastructure::config::Config;
    use crate::infrastructure::random::{SeededRandom, SequenceRandom, ThreadRandom};

    fn default_resolver() -> ResponseResolver {
        Config::default().assistant.build_resolver().unwrap()
    }

    fn pool(entries: &[&str]) -> ResponsePool {
        ResponsePool::new(entries.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_study_plan_wins_over_government_rule() {
        let resolver = default_resolver();
        let mut rng = SequenceRandom::new(vec![0]);
        let response = resolver.resolve("What is the best study plan for UPSC?", &mut rng);
        assert_eq!(response, resolver.rules()[0].response());
        assert!(response.starts_with("Based on exam analysis"));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_math_listed_before_practice() {
        let resolver = default_resolver();
        let mut rng = SequenceRandom::new(vec![0]);
        let (response, how) = resolver.resolve_traced("I need help with math practice", &mut rng);
        assert_eq!(how, Resolution::Rule(1));
        assert!(response.starts_with("For quantitative aptitude"));
    }

    #[test]
    fn test_each_rule_matches_its_keywords_in_any_case() {
        let resolver = default_resolver();
        let mut rng = SequenceRandom::new(vec![0]);
        let cases = [
            ("my PREPARATION is slow", 0),
            ("teach me Mathematics", 1),
            ("logical puzzles please", 2),
            ("How do I structure an ESSAY?", 3),
            ("gk tips", 4),
            ("when is the next mock", 5),
            ("SSC CGL", 6),
            ("I am too slow, need SPEED", 7),
        ];
        for (input, expected) in cases {
            assert_eq!(resolver.first_match(input), Some(expected), "input: {}", input);
            assert_eq!(resolver.resolve(input, &mut rng), resolver.rules()[expected].response());
        }
    }

    #[test]
    fn test_no_match_falls_back_to_pool() {
        let resolver = default_resolver();
        let mut rng = SeededRandom::new(7);
        for _ in 0..50 {
            let response = resolver.resolve("asdkjasd", &mut rng);
            assert!(resolver.pool().contains(response));
        }
    }

    #[test]
    fn test_fallback_is_pinned_by_random_source() {
        let resolver = default_resolver();
        let mut rng = SequenceRandom::new(vec![3, 0]);
        let (first, how) = resolver.resolve_traced("asdkjasd", &mut rng);
        assert_eq!(how, Resolution::Fallback(3));
        assert_eq!(first, resolver.pool().get(3).unwrap());
        assert_eq!(resolver.resolve("asdkjasd", &mut rng), resolver.pool().get(0).unwrap());
    }

    #[test]
    fn test_same_seed_same_output() {
        let resolver = default_resolver();
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for input in ["zzz", "qwerty", "", "hello there"] {
            assert_eq!(resolver.resolve(input, &mut a), resolver.resolve(input, &mut b));
        }
    }

    #[test]
    fn test_unseeded_fallback_varies() {
        let resolver = default_resolver();
        let mut rng = ThreadRandom::new();
        let seen: HashSet<&str> = (0..200)
            .map(|_| resolver.resolve("asdkjasd", &mut rng))
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_empty_input_uses_pool() {
        let resolver = default_resolver();
        let mut rng = SequenceRandom::new(vec![5]);
        let (response, how) = resolver.resolve_traced("", &mut rng);
        assert_eq!(how, Resolution::Fallback(5));
        assert!(!response.is_empty());
        assert_eq!(resolver.first_match("   "), None);
    }

    #[test]
    fn test_rule_order_is_priority() {
        let alpha = PatternRule::new("math", "alpha").unwrap();
        let beta = PatternRule::new("practice", "beta").unwrap();
        let mut rng = SequenceRandom::new(vec![0]);

        let forward = ResponseResolver::new(vec![alpha.clone(), beta.clone()], pool(&["fallback"]));
        let reversed = ResponseResolver::new(vec![beta, alpha], pool(&["fallback"]));

        assert_eq!(forward.resolve("math practice", &mut rng), "alpha");
        assert_eq!(reversed.resolve("math practice", &mut rng), "beta");
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let resolver = ResponseResolver::new(vec![], pool(&["a", "b"]));
        let mut rng = SequenceRandom::new(vec![3]);
        assert_eq!(resolver.resolve("anything", &mut rng), "b");
    }
}
