//! Wizard State Machine
//!
//! Owns the authoritative `Inputs` and `Factors`. The location and factors
//! steps edit draft copies; `advance()` commits the draft of the step being
//! left. `back()` drops the draft, and entering a step re-seeds its draft from
//! the committed values.

use super::step::WizardStep;
use crate::engine::EstimateBreakdown;
use crate::parcel::{FactorKind, Factors, Inputs, Region};
use crate::summary::{project, project_with_breakdown, Summary};

/// Guided estimation session
#[derive(Debug, Clone, Default)]
pub struct WizardStateMachine {
    step: WizardStep,
    inputs: Inputs,
    factors: Factors,
    draft_inputs: Inputs,
    draft_factors: Factors,
}

impl WizardStateMachine {
    /// Fresh session at `Intro` with default inputs and neutral factors
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Committed inputs
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Committed factors
    pub fn factors(&self) -> &Factors {
        &self.factors
    }

    /// Inputs being edited on the location step
    pub fn draft_inputs(&self) -> &Inputs {
        &self.draft_inputs
    }

    /// Factors being edited on the factors step
    pub fn draft_factors(&self) -> &Factors {
        &self.draft_factors
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    /// Move to the next step, committing the current step's draft
    ///
    /// Returns false at `Result`, where nothing changes.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };

        match self.step {
            WizardStep::Location => {
                self.inputs = self.draft_inputs.clone();
                tracing::info!(
                    region = %self.inputs.region,
                    acres = self.inputs.acres,
                    "Committed parcel inputs"
                );
            }
            WizardStep::Factors => {
                self.factors = self.draft_factors;
                tracing::info!(
                    soil = self.factors.soil,
                    access = self.factors.access,
                    utilities = self.factors.utilities,
                    zoning = self.factors.zoning,
                    "Committed factors"
                );
            }
            WizardStep::Intro | WizardStep::Result => {}
        }

        self.enter(next);
        true
    }

    /// Move to the previous step, discarding uncommitted edits
    ///
    /// Returns false at `Intro`, where nothing changes.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.enter(previous);
                true
            }
            None => false,
        }
    }

    /// Back to `Intro` with default inputs and factors
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::info!("Wizard reset");
    }

    fn enter(&mut self, step: WizardStep) {
        tracing::info!("Wizard step {} -> {}", self.step, step);
        self.step = step;
        match step {
            WizardStep::Location => self.draft_inputs = self.inputs.clone(),
            WizardStep::Factors => self.draft_factors = self.factors,
            WizardStep::Intro | WizardStep::Result => {}
        }
    }

    // ========================================================================
    // Location step edits
    // ========================================================================

    fn location_draft(&mut self, field: &str) -> Option<&mut Inputs> {
        if self.step == WizardStep::Location {
            Some(&mut self.draft_inputs)
        } else {
            tracing::warn!("Ignoring {} edit outside the location step ({})", field, self.step);
            None
        }
    }

    pub fn set_location(&mut self, location: &str) -> bool {
        match self.location_draft("location") {
            Some(draft) => {
                draft.location = location.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_region(&mut self, region: Region) -> bool {
        match self.location_draft("region") {
            Some(draft) => {
                draft.region = region;
                true
            }
            None => false,
        }
    }

    /// Free-form acreage entry, clamped to the minimum. Returns the stored value.
    pub fn set_acres(&mut self, acres: f64) -> Option<f64> {
        self.location_draft("acres").map(|draft| draft.set_acres(acres))
    }

    pub fn increment_acres(&mut self) -> Option<f64> {
        self.location_draft("acres").map(Inputs::increment_acres)
    }

    pub fn decrement_acres(&mut self) -> Option<f64> {
        self.location_draft("acres").map(Inputs::decrement_acres)
    }

    // ========================================================================
    // Factors step edits
    // ========================================================================

    /// Set one factor on the draft, clamped to its bounds. Returns the stored value.
    pub fn set_factor(&mut self, kind: FactorKind, value: f64) -> Option<f64> {
        if self.step != WizardStep::Factors {
            tracing::warn!("Ignoring {} edit outside the factors step ({})", kind.key(), self.step);
            return None;
        }
        Some(self.draft_factors.set(kind, value))
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Summary of the committed state
    ///
    /// Computable in any step; only shown to the user at `Result`.
    pub fn summary(&self) -> Summary {
        project(&self.inputs, &self.factors)
    }

    /// Summary and intermediate terms of the committed state
    pub fn summary_with_breakdown(&self) -> (Summary, EstimateBreakdown) {
        project_with_breakdown(&self.inputs, &self.factors)
    }

    /// Live summary including the active step's uncommitted edits
    pub fn preview(&self) -> Summary {
        match self.step {
            WizardStep::Location => project(&self.draft_inputs, &self.factors),
            WizardStep::Factors => project(&self.inputs, &self.draft_factors),
            WizardStep::Intro | WizardStep::Result => self.summary(),
        }
    }
}
