//! CLI command implementations

pub mod analysis;
pub mod completions;
pub mod config;
pub mod friendship;
pub mod person;
pub mod shell;
