//! Message handling - Console line processing

pub mod dispatcher;
pub mod middleware;
pub mod parser;

pub use dispatcher::{MessageDispatcher, Reply};
pub use middleware::{Middleware, LoggingMiddleware, QueryValidationMiddleware};
pub use parser::MessageParser;
