//! Domain model for the reading orchestration context.

pub mod commands;
pub mod cycle;
pub mod fallback;
pub mod prompt;
pub mod reading;
pub mod report;
pub mod schema;
