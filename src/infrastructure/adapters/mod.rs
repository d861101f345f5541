//! Chat surface adapters

pub mod console;

pub use console::{ConsoleAdapter, RevealTiming};
