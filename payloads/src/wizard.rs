//! Step sequencing for the listing wizards.

use serde::{Deserialize, Serialize};

use crate::{FieldError, ListingDraft, ListingKind, validation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Property,
    Locality,
    Rental,
    Resale,
    PgDetails,
    Flatmate,
    Amenities,
    Gallery,
    Schedule,
}

impl WizardStep {
    pub fn steps_for(kind: ListingKind) -> &'static [WizardStep] {
        use WizardStep::*;
        match kind {
            ListingKind::Rent => {
                &[Property, Locality, Rental, Amenities, Gallery, Schedule]
            }
            ListingKind::Resale => {
                &[Property, Locality, Resale, Amenities, Gallery, Schedule]
            }
            ListingKind::PgHostel => {
                &[Locality, PgDetails, Amenities, Gallery, Schedule]
            }
            ListingKind::Flatmates => {
                &[Property, Locality, Flatmate, Amenities, Gallery, Schedule]
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Property => "Property Details",
            Self::Locality => "Locality Details",
            Self::Rental => "Rental Details",
            Self::Resale => "Resale Details",
            Self::PgDetails => "PG Details",
            Self::Flatmate => "Flatmate Details",
            Self::Amenities => "Amenities",
            Self::Gallery => "Gallery",
            Self::Schedule => "Schedule",
        }
    }
}

/// Where the owner is in a wizard and which steps have passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardProgress {
    steps: Vec<WizardStep>,
    current: usize,
    completed: Vec<bool>,
}

impl WizardProgress {
    pub fn new(kind: ListingKind) -> Self {
        let steps = WizardStep::steps_for(kind).to_vec();
        let completed = vec![false; steps.len()];
        Self {
            steps,
            current: 0,
            completed,
        }
    }

    /// Rebuild progress for a resumed draft: every leading step that
    /// validates counts as completed, and the owner lands on the first one
    /// that does not.
    pub fn resume(draft: &ListingDraft) -> Self {
        let mut progress = Self::new(draft.kind);
        for (index, step) in progress.steps.iter().enumerate() {
            if !validation::validate_step(draft, *step).is_empty() {
                break;
            }
            progress.completed[index] = true;
        }
        progress.current = progress.first_incomplete().unwrap_or(
            progress.steps.len().saturating_sub(1),
        );
        progress
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn current(&self) -> WizardStep {
        self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn is_completed(&self, step: WizardStep) -> bool {
        self.index_of(step)
            .map(|i| self.completed[i])
            .unwrap_or(false)
    }

    pub fn all_completed(&self) -> bool {
        self.completed.iter().all(|c| *c)
    }

    /// Share of steps completed, 0 to 100.
    pub fn percent_complete(&self) -> u8 {
        let done = self.completed.iter().filter(|c| **c).count();
        (done * 100 / self.steps.len()) as u8
    }

    fn index_of(&self, step: WizardStep) -> Option<usize> {
        self.steps.iter().position(|s| *s == step)
    }

    fn first_incomplete(&self) -> Option<usize> {
        self.completed.iter().position(|c| !*c)
    }

    /// Validate the current step and move to the next one.
    ///
    /// On failure the position is unchanged and the step is marked
    /// incomplete. Advancing from the last step only marks it completed.
    pub fn advance(&mut self, draft: &ListingDraft) -> Result<(), Vec<FieldError>> {
        let errors = validation::validate_step(draft, self.current());
        if !errors.is_empty() {
            self.completed[self.current] = false;
            return Err(errors);
        }
        self.completed[self.current] = true;
        if !self.is_last() {
            self.current += 1;
        }
        Ok(())
    }

    /// Go back one step. Never validates.
    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to a step that is already completed or is the first incomplete
    /// one. Returns whether the jump happened.
    pub fn jump_to(&mut self, step: WizardStep) -> bool {
        let Some(target) = self.index_of(step) else {
            return false;
        };
        let reachable = self.completed[target]
            || self.first_incomplete().is_none_or(|first| target <= first);
        if reachable {
            self.current = target;
        }
        reachable
    }
}
