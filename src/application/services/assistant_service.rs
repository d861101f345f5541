use std::sync::Mutex;
use crate::application::errors::QueryError;
use crate::domain::traits::RandomSource;
use super::resolver::{Resolution, ResponseResolver};

pub const PLACEHOLDER: &str = "Ask me anything about exam preparation and I'll help you!";

/// Service answering AI demo queries
pub struct AssistantService {
    resolver: ResponseResolver,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl AssistantService {
    pub fn new(resolver: ResponseResolver, rng: Box<dyn RandomSource>) -> Self {
        Self {
            resolver,
            rng: Mutex::new(rng),
        }
    }

    /// Answer a query, rejecting empty or whitespace-only input
    pub fn ask(&self, query: &str) -> Result<String, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::Empty);
        }

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let (response, how) = self.resolver.resolve_traced(query, &mut **rng);

        match how {
            Resolution::Rule(index) => {
                tracing::debug!("Query matched rule {} ({})", index, self.resolver.rules()[index].pattern())
            }
            Resolution::Fallback(index) => tracing::debug!("No rule matched, fallback entry {}", index),
        }

        Ok(response.to_string())
    }

    pub fn resolver(&self) -> &ResponseResolver {
        &self.resolver
    }
}
