//! Application services for the reading orchestration context.

pub mod command_handlers;
pub mod location_probe;
pub mod requester;
