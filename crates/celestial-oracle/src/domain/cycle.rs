//! Loading/reset state machine a front end drives around one reading.

use celestial_core::error::DomainError;
use uuid::Uuid;

use super::reading::Reading;

/// The single notice shown when a cycle fails in the orchestration layer.
pub const CYCLE_FAILED_NOTICE: &str = "星辰能量暂时波动，请稍后再试。";

/// Phase of the reading cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CyclePhase {
    /// Input is being collected. Carries the notice from an aborted cycle.
    Collecting {
        /// User-facing notice, if the previous cycle failed.
        notice: Option<String>,
    },
    /// A cycle is in flight; the UI is blocked.
    Loading {
        /// Correlation ID of the in-flight cycle.
        correlation_id: Uuid,
    },
    /// A report is on display.
    Presenting(Box<Reading>),
}

/// Owns the in-progress profile/report for exactly one cycle at a time.
#[derive(Debug)]
pub struct ReadingCycle {
    phase: CyclePhase,
}

impl Default for ReadingCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingCycle {
    /// Starts in `Collecting` with no notice.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: CyclePhase::Collecting { notice: None },
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &CyclePhase {
        &self.phase
    }

    /// Whether a cycle is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, CyclePhase::Loading { .. })
    }

    /// The displayed reading, if any.
    #[must_use]
    pub fn reading(&self) -> Option<&Reading> {
        match &self.phase {
            CyclePhase::Presenting(reading) => Some(reading),
            _ => None,
        }
    }

    /// The notice left by an aborted cycle, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match &self.phase {
            CyclePhase::Collecting { notice } => notice.as_deref(),
            _ => None,
        }
    }

    /// Enters `Loading` for a newly submitted profile.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless collecting; cycles never
    /// overlap.
    pub fn begin(&mut self, correlation_id: Uuid) -> Result<(), DomainError> {
        if !matches!(self.phase, CyclePhase::Collecting { .. }) {
            return Err(DomainError::Validation(
                "a reading can only begin while collecting input".to_owned(),
            ));
        }
        self.phase = CyclePhase::Loading { correlation_id };
        Ok(())
    }

    /// Leaves `Loading` with a complete reading.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no cycle is in flight.
    pub fn complete(&mut self, reading: Reading) -> Result<(), DomainError> {
        if !self.is_loading() {
            return Err(DomainError::Validation(
                "no reading is in flight".to_owned(),
            ));
        }
        self.phase = CyclePhase::Presenting(Box::new(reading));
        Ok(())
    }

    /// Leaves `Loading` after an orchestration failure, returning to input
    /// with the user-facing notice.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no cycle is in flight.
    pub fn abort(&mut self) -> Result<(), DomainError> {
        if !self.is_loading() {
            return Err(DomainError::Validation(
                "no reading is in flight".to_owned(),
            ));
        }
        self.phase = CyclePhase::Collecting {
            notice: Some(CYCLE_FAILED_NOTICE.to_owned()),
        };
        Ok(())
    }

    /// Discards the displayed reading. A no-op outside `Presenting`: an
    /// in-flight cycle cannot be cancelled. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        if matches!(self.phase, CyclePhase::Presenting(_)) {
            self.phase = CyclePhase::Collecting { notice: None };
            true
        } else {
            false
        }
    }
}
