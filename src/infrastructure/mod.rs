//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Preference persistence
//! - Random: Random sources for the assistant fallback
//! - Adapters: Chat surfaces (console)

pub mod config;
pub mod storage;
pub mod random;
pub mod adapters;
