//! Celestial Core — shared abstractions.
//!
//! This crate defines the profile record, the determinism seams, and the
//! contracts for the two external boundaries (location and narrative
//! generation). It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod gateway;
pub mod location;
pub mod profile;
