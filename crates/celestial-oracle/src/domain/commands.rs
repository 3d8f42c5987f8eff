//! Commands for the reading orchestration context.

use celestial_core::command::Command;
use celestial_core::profile::Profile;
use uuid::Uuid;

/// Command to run one reading cycle for a submitted profile.
#[derive(Debug, Clone)]
pub struct AnalyzeProfile {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The profile handed over by the input collector. A location already
    /// present here is used as-is and the probe is skipped.
    pub profile: Profile,
}

impl Command for AnalyzeProfile {
    fn command_type(&self) -> &'static str {
        "reading.analyze_profile"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
