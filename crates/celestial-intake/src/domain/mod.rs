//! Domain model for the input collector.

pub mod steps;
pub mod wizard;
