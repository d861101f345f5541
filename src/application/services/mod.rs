//! Application services - Business logic orchestration

pub mod assistant_service;
pub mod command_service;
pub mod portal_commands;
pub mod resolver;
pub mod theme_service;

#[cfg(test)]
mod tests;

pub use assistant_service::AssistantService;
pub use command_service::CommandService;
pub use portal_commands::register_portal_commands;
pub use resolver::{Resolution, ResponseResolver};
pub use theme_service::ThemeService;
