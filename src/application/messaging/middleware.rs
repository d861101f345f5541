//! Middleware system for message processing pipeline

use std::sync::Arc;
use crate::application::errors::QueryError;
use crate::domain::entities::{Content, Message};

/// Context passed through middleware chain
#[derive(Debug, Clone)]
pub struct Context {
    pub message: Message,
    pub chat_id: String,
}

impl Context {
    pub fn new(message: Message) -> Self {
        let chat_id = message.chat_id.clone();

        Self { message, chat_id }
    }
}

/// Middleware trait - processors that can intercept and modify message handling
pub trait Middleware: Send + Sync {
    /// Process a message and optionally modify the context
    fn process(&self, ctx: Context, next: Next) -> MiddlewareResult;
}

/// Result of middleware processing
pub type MiddlewareResult = Result<Context, MiddlewareError>;

/// Middleware errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiddlewareError {
    /// Stop processing and reply with this text
    Blocked(String),
    /// Internal error
    Internal(String),
}

impl std::fmt::Display for MiddlewareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MiddlewareError::Blocked(msg) => write!(f, "Blocked: {}", msg),
            MiddlewareError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for MiddlewareError {}

/// Next middleware in chain
#[derive(Clone)]
pub struct Next {
    remaining: Arc<Vec<Arc<dyn Middleware>>>,
}

impl Next {
    pub fn new(middlewares: Vec<Arc<dyn Middleware>>) -> Self {
        Self {
            remaining: Arc::new(middlewares),
        }
    }

    /// Process remaining middleware
    pub fn run(self, ctx: Context) -> MiddlewareResult {
        if let Some(first) = self.remaining.first() {
            let remaining = self.remaining[1..].to_vec();
            let next = Next::new(remaining);
            first.process(ctx, next)
        } else {
            // No more middleware, processing complete
            Ok(ctx)
        }
    }
}

/// Ordered middleware, run first to last for every message
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    pub fn add<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Start a run over the whole chain
    pub fn next(&self) -> Next {
        Next::new(self.middlewares.clone())
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects blank input before it reaches the assistant
pub struct QueryValidationMiddleware;

impl Middleware for QueryValidationMiddleware {
    fn process(&self, ctx: Context, next: Next) -> MiddlewareResult {
        let blank = match &ctx.message.content {
            Content::Empty => true,
            Content::Text(text) => text.trim().is_empty(),
            Content::Command { .. } => false,
        };

        if blank {
            return Err(MiddlewareError::Blocked(QueryError::Empty.to_string()));
        }

        next.run(ctx)
    }
}

/// Logging middleware for debugging
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn process(&self, ctx: Context, next: Next) -> MiddlewareResult {
        let msg_preview = match &ctx.message.content {
            Content::Text(s) => s.chars().take(50).collect::<String>(),
            Content::Command { name, .. } => format!("[command {}]", name),
            Content::Empty => "[empty]".to_string(),
        };

        tracing::debug!(
            "[{}] {} {} at {}",
            ctx.chat_id,
            ctx.message.message_type.as_str(),
            msg_preview,
            ctx.message.timestamp.format("%H:%M:%S")
        );

        let chat_id = ctx.chat_id.clone();
        let result = next.run(ctx);

        match &result {
            Ok(_) => {
                tracing::debug!("[{}] Processed OK", chat_id);
            }
            Err(e) => {
                tracing::warn!("[{}] {}", chat_id, e);
            }
        }

        result
    }
}
