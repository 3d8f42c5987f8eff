//! The outcome of one reading cycle.

use celestial_core::profile::Profile;
use serde::{Deserialize, Serialize};

use super::report::AnalysisResult;

/// Which path produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    /// The narrative service answered with a valid report.
    Oracle,
    /// The deterministic offline generator filled in.
    Fallback,
}

/// A profile, with any probed location merged in, and its report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// The profile as submitted to the narrative service.
    pub profile: Profile,
    /// The complete report.
    pub report: AnalysisResult,
    /// How the report was produced.
    pub source: ReportSource,
}
