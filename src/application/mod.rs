//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Response resolution, theme, command handling
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing, middleware, dispatching
//! - Validation: Contact and newsletter forms

pub mod errors;
pub mod services;
pub mod messaging;
pub mod validation;
