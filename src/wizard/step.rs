//! Wizard Steps
//!
//! Four stages in a fixed order. Each has exactly one successor and one
//! predecessor except at the ends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the guided flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Intro,
    Location,
    Factors,
    Result,
}

/// Progress marker for one step relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

impl WizardStep {
    /// Next step, `None` at `Result`
    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Intro => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Factors),
            WizardStep::Factors => Some(WizardStep::Result),
            WizardStep::Result => None,
        }
    }

    /// Previous step, `None` at `Intro`
    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Intro => None,
            WizardStep::Location => Some(WizardStep::Intro),
            WizardStep::Factors => Some(WizardStep::Location),
            WizardStep::Result => Some(WizardStep::Factors),
        }
    }

    /// Zero-based position
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Intro => 0,
            WizardStep::Location => 1,
            WizardStep::Factors => 2,
            WizardStep::Result => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Intro => "Intro",
            WizardStep::Location => "Location",
            WizardStep::Factors => "Factors",
            WizardStep::Result => "Result",
        }
    }

    /// Status of `self` when `current` is the active step
    pub fn status_relative_to(&self, current: WizardStep) -> StepStatus {
        match self.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => StepStatus::Done,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Intro,
            WizardStep::Location,
            WizardStep::Factors,
            WizardStep::Result,
        ]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One-line progress bar: "✓ Intro > [Location] > Factors > Result"
pub fn render_progress(current: WizardStep) -> String {
    WizardStep::all()
        .iter()
        .map(|step| match step.status_relative_to(current) {
            StepStatus::Done => format!("✓ {}", step.label()),
            StepStatus::Active => format!("[{}]", step.label()),
            StepStatus::Pending => step.label().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_order() {
        let mut step = WizardStep::Intro;
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
            seen.push(step);
        }
        assert_eq!(seen, WizardStep::all());
    }

    #[test]
    fn test_render_progress() {
        assert_eq!(
            render_progress(WizardStep::Factors),
            "✓ Intro > ✓ Location > [Factors] > Result"
        );
    }
}
