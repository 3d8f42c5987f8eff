//! Celestial Mirror — Reading Orchestration.
//!
//! Turns a submitted profile into a complete report: probes location,
//! requests a structured narrative from the generative boundary, and falls
//! back to a deterministic offline report whenever that request fails.

pub mod application;
pub mod domain;
