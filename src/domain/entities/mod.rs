//! Domain entities - Core business objects with no external dependencies

pub mod message;
pub mod command;
pub mod rule;
pub mod study_plan;
pub mod theme;
pub mod tool;

pub use message::{Message, MessageType, Content};
pub use command::{Command, CommandRegistry};
pub use rule::{PatternRule, ResponsePool};
pub use study_plan::{StudyPlan, StudyPlanCatalog};
pub use theme::Theme;
pub use tool::ToolCatalog;
