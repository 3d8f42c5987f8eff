//! The subject profile submitted for a reading.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::location::Coordinates;

/// Birth time used when the subject does not supply one.
pub const DEFAULT_BIRTH_TIME: &str = "12:00";

/// Name, birth moment, and optional location of the person being read.
///
/// Date and time are kept as the strings the user entered; their format is
/// owned by whatever input widget collected them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name. Never empty once validated.
    pub name: String,
    /// Calendar date of birth. Never empty once validated.
    pub birth_date: String,
    /// Time of day of birth.
    #[serde(default = "default_birth_time")]
    pub birth_time: String,
    /// Location merged in by the location probe, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
}

fn default_birth_time() -> String {
    DEFAULT_BIRTH_TIME.to_owned()
}

impl Profile {
    /// Creates a profile without a location.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            location: None,
        }
    }

    /// Returns a copy of this profile carrying `location`.
    #[must_use]
    pub fn with_location(self, location: Option<Coordinates>) -> Self {
        Self { location, ..self }
    }

    /// Checks the two required fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name or birth date is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::Validation("name must not be empty".to_owned()));
        }
        if self.birth_date.is_empty() {
            return Err(DomainError::Validation(
                "birth date must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
