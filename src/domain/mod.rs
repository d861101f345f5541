//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (PatternRule, StudyPlan, Theme, Message, Command)
//! - Traits: Abstractions for infrastructure (Bot, Store, RandomSource)

pub mod entities;
pub mod traits;
