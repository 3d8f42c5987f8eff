//! The profile wizard.

use celestial_core::profile::{DEFAULT_BIRTH_TIME, Profile};
use serde::{Deserialize, Serialize};

use super::steps::IntakeStep;

/// The profile fields as the user is filling them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// Name entered so far.
    #[serde(default)]
    pub name: String,
    /// Birth date entered so far.
    #[serde(default)]
    pub birth_date: String,
    /// Birth time; starts at noon.
    #[serde(default = "default_birth_time")]
    pub birth_time: String,
}

fn default_birth_time() -> String {
    DEFAULT_BIRTH_TIME.to_owned()
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            birth_date: String::new(),
            birth_time: default_birth_time(),
        }
    }
}

impl ProfileDraft {
    fn to_profile(&self) -> Profile {
        Profile::new(&self.name, &self.birth_date, &self.birth_time)
    }
}

/// Result of pressing the advance control.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on to the given step.
    Moved(IntakeStep),
    /// The current step's required field is empty; nothing changed.
    Blocked(IntakeStep),
    /// The final step was confirmed; the profile is handed over.
    Submitted(Profile),
    /// The wizard already submitted; nothing changed.
    Finished,
}

/// Three-step wizard: name, birth date, birth time.
#[derive(Debug, Clone)]
pub struct IntakeWizard {
    step: IntakeStep,
    draft: ProfileDraft,
    submitted: bool,
}

impl Default for IntakeWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeWizard {
    /// A fresh wizard on step 1 with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::resume(IntakeStep::Name, ProfileDraft::default())
    }

    /// Resumes a wizard from a snapshot.
    #[must_use]
    pub fn resume(step: IntakeStep, draft: ProfileDraft) -> Self {
        Self {
            step,
            draft,
            submitted: false,
        }
    }

    /// The step currently shown.
    #[must_use]
    pub fn step(&self) -> IntakeStep {
        self.step
    }

    /// The draft as entered so far.
    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Whether the profile has been handed over.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Sets the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Sets the birth date field.
    pub fn set_birth_date(&mut self, birth_date: impl Into<String>) {
        self.draft.birth_date = birth_date.into();
    }

    /// Sets the birth time field.
    pub fn set_birth_time(&mut self, birth_time: impl Into<String>) {
        self.draft.birth_time = birth_time.into();
    }

    /// Moves forward, or submits from the last step.
    ///
    /// Step 1 needs a name and step 2 a birth date; step 3 always submits,
    /// whatever the birth time holds.
    pub fn advance(&mut self) -> Advance {
        if self.submitted {
            return Advance::Finished;
        }

        let step = self.step;
        let blocked = match step {
            IntakeStep::Name => self.draft.name.is_empty(),
            IntakeStep::BirthDate => self.draft.birth_date.is_empty(),
            IntakeStep::BirthTime => false,
        };
        if blocked {
            return Advance::Blocked(step);
        }

        match step.next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => {
                self.submitted = true;
                Advance::Submitted(self.draft.to_profile())
            }
        }
    }

    /// Moves back one step; a no-op on step 1 or after submission.
    pub fn retreat(&mut self) -> IntakeStep {
        if !self.submitted {
            if let Some(previous) = self.step.previous() {
                self.step = previous;
            }
        }
        self.step
    }
}
